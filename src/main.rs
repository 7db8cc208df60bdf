//! NavGate - Demo Entry Point
//!
//! Wires the demo application together:
//! - Tracing to stderr and a daily-rotated log file
//! - The demo route table (home, login, dashboard, admin area, catch-all)
//! - Stub session/policy collaborators standing in for the real backends
//! - A handful of navigations driven through the gate

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use navgate::gate::{
    AuthorizationPolicy, ConsoleAuditSink, PolicyError, SessionVerifier, VerificationOutcome,
    VerifyError,
};
use navgate::{AccessGate, Navigator, Role, RouteTable, StateStore, UserRecord};

/// Stub verifier: resolves to a fixed outcome. A real deployment talks
/// to a session backend here.
struct StaticVerifier {
    outcome: Option<UserRecord>,
}

#[async_trait::async_trait]
impl SessionVerifier for StaticVerifier {
    async fn verify(&self) -> Result<VerificationOutcome, VerifyError> {
        Ok(VerificationOutcome {
            user_data: self.outcome.clone(),
        })
    }
}

/// Stub policy: admits everyone the verifier admits.
struct AllowAll;

#[async_trait::async_trait]
impl AuthorizationPolicy for AllowAll {
    async fn authorize(&self, _user: &UserRecord) -> Result<bool, PolicyError> {
        Ok(true)
    }
}

#[tokio::main]
async fn main() {
    // ---------- Log directory setup ----------
    // Logs go to .navgate/logs/ under the current working directory.
    let log_dir = std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join(".navgate")
        .join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    // Daily-rotated file appender: navgate.log.YYYY-MM-DD
    let file_appender = tracing_appender::rolling::daily(&log_dir, "navgate.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize tracing — logs to both stderr (console) and file
    let env_filter =
        EnvFilter::from_default_env().add_directive("navgate=debug".parse().unwrap());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    info!("NavGate demo starting...");
    info!("Log directory: {}", log_dir.display());

    let member = UserRecord {
        identity: Uuid::new_v4(),
        display_name: "demo member".to_string(),
        role: Role::Member,
    };

    let state = StateStore::new();
    let gate = AccessGate::new(
        Arc::new(StaticVerifier {
            outcome: Some(member),
        }),
        Arc::new(AllowAll),
        state.clone(),
    )
    .with_audit_sink(Box::new(ConsoleAuditSink));

    let navigator = Navigator::new(RouteTable::demo_app(), gate);

    for path in ["/", "/dashboard", "/admin", "/admin/presets", "/nowhere"] {
        match navigator.navigate(path, Some("/")).await {
            Ok(outcome) => info!(path, view = outcome.view(), ?outcome, "navigated"),
            Err(e) => info!(path, "navigation error: {}", e),
        }
    }

    if let Some(user) = state.user_data().await {
        info!(user = %user.display_name, role = user.role.as_str(), "current user in state store");
    }
}
