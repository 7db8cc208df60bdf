//! Audit sink tests: every terminal gate decision leaves one JSON line.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use navgate::gate::{
    AccessGate, AuditEvent, AuthorizationPolicy, FileAuditSink, PolicyError, SessionVerifier,
    VerificationOutcome, VerifyError,
};
use navgate::{NavigationDecision, Navigator, Role, RouteTable, StateStore, UserRecord};

struct FixedVerifier(Option<UserRecord>);

#[async_trait]
impl SessionVerifier for FixedVerifier {
    async fn verify(&self) -> Result<VerificationOutcome, VerifyError> {
        Ok(VerificationOutcome {
            user_data: self.0.clone(),
        })
    }
}

struct FixedPolicy(bool);

#[async_trait]
impl AuthorizationPolicy for FixedPolicy {
    async fn authorize(&self, _user: &UserRecord) -> Result<bool, PolicyError> {
        Ok(self.0)
    }
}

#[tokio::test]
async fn file_sink_records_one_event_per_decision() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit.jsonl");

    let admin = UserRecord {
        identity: Uuid::new_v4(),
        display_name: "ops".to_string(),
        role: Role::Admin,
    };

    let gate = AccessGate::new(
        Arc::new(FixedVerifier(Some(admin))),
        Arc::new(FixedPolicy(true)),
        StateStore::new(),
    )
    .with_audit_sink(Box::new(FileAuditSink::new(log_path.clone())));
    let nav = Navigator::new(RouteTable::demo_app(), gate);

    // Two gated navigations, one ungated. Only the gated ones are audited.
    nav.navigate("/dashboard", None).await.unwrap();
    nav.navigate("/admin", None).await.unwrap();
    nav.navigate("/", None).await.unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let events: Vec<AuditEvent> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].outcome.target, "/dashboard");
    assert_eq!(events[0].outcome.decision, NavigationDecision::Proceed);
    assert_eq!(events[1].outcome.target, "/admin");
    assert!(events[1].outcome.denial.is_none());
    assert!(events.iter().all(|e| e.id.starts_with("gate-")));
}

#[tokio::test]
async fn denied_navigation_is_audited_with_denial_kind() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit.jsonl");

    let gate = AccessGate::new(
        Arc::new(FixedVerifier(None)),
        Arc::new(FixedPolicy(true)),
        StateStore::new(),
    )
    .with_audit_sink(Box::new(FileAuditSink::new(log_path.clone())));
    let nav = Navigator::new(RouteTable::demo_app(), gate);

    nav.navigate("/admin", None).await.unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let event: AuditEvent = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(
        event.outcome.denial,
        Some(navgate::gate::DenialKind::NoSession)
    );
}
