use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::audit::{AuditEvent, AuditSink, NullAuditSink};
use super::types::{
    DenialKind, GateConfig, GateOutcome, GateTier, NavigationAttempt, NavigationDecision, Role,
    RouteName,
};
use super::verify::{AuthorizationPolicy, SessionVerifier};

/// The route access control gate.
///
/// For each navigation attempt into a protected area the gate produces
/// exactly one `NavigationDecision`, suspending on the session verifier
/// and (authenticated tier only) the authorization policy. Collaborator
/// failures are absorbed and fail closed: the attempt is redirected away
/// from the protected area, never granted and never surfaced as an error.
pub struct AccessGate {
    verifier: Arc<dyn SessionVerifier>,
    policy: Arc<dyn AuthorizationPolicy>,
    state: crate::state::StateStore,
    audit_sink: Arc<Mutex<Box<dyn AuditSink + Send>>>,
}

impl AccessGate {
    pub fn new(
        verifier: Arc<dyn SessionVerifier>,
        policy: Arc<dyn AuthorizationPolicy>,
        state: crate::state::StateStore,
    ) -> Self {
        Self {
            verifier,
            policy,
            state,
            audit_sink: Arc::new(Mutex::new(Box::new(NullAuditSink))),
        }
    }

    pub fn with_audit_sink(mut self, sink: Box<dyn AuditSink + Send>) -> Self {
        self.audit_sink = Arc::new(Mutex::new(sink));
        self
    }

    /// Shared state store this gate publishes verified records into.
    pub fn state(&self) -> &crate::state::StateStore {
        &self.state
    }

    /// Evaluate one attempt against one gate configuration. Terminal for
    /// the attempt: the returned outcome always carries a decision.
    pub async fn evaluate(&self, attempt: &NavigationAttempt, config: &GateConfig) -> GateOutcome {
        debug!(
            attempt_id = attempt.attempt_id,
            path = %attempt.target,
            tier = ?config.tier,
            "gate evaluating attempt"
        );

        let outcome = match config.tier {
            GateTier::Authenticated => self.evaluate_authenticated(attempt).await,
            GateTier::Privileged { required_role } => {
                self.evaluate_privileged(attempt, required_role).await
            }
        };

        match outcome.denial {
            None => info!(
                attempt_id = attempt.attempt_id,
                path = %attempt.target,
                "navigation permitted"
            ),
            Some(kind) => info!(
                attempt_id = attempt.attempt_id,
                path = %attempt.target,
                denial = ?kind,
                decision = ?outcome.decision,
                "navigation turned away"
            ),
        }

        {
            let mut audit = self.audit_sink.lock().await;
            if let Err(e) = audit.log(AuditEvent::decision(&outcome)) {
                warn!("failed to write audit event: {}", e);
            }
        }

        outcome
    }

    /// Convenience wrapper returning only the decision.
    pub async fn decide(
        &self,
        attempt: &NavigationAttempt,
        config: &GateConfig,
    ) -> NavigationDecision {
        self.evaluate(attempt, config).await.decision
    }

    /// Authenticated tier: any logged-in user passes, subject to the
    /// authorization policy. All failure paths redirect to login.
    async fn evaluate_authenticated(&self, attempt: &NavigationAttempt) -> GateOutcome {
        let tier = GateTier::Authenticated;

        let verified = match self.verifier.verify().await {
            Ok(v) => v,
            Err(e) => {
                warn!(attempt_id = attempt.attempt_id, "session verification failed: {}", e);
                return GateOutcome::new(
                    attempt,
                    tier,
                    NavigationDecision::redirect(RouteName::Login),
                    Some(DenialKind::CollaboratorFailure),
                );
            }
        };

        let Some(record) = verified.user_data else {
            // No session. The gate must still terminate with a decision;
            // an attempt that neither proceeds nor redirects would leave
            // the user stranded on the origin view.
            return GateOutcome::new(
                attempt,
                tier,
                NavigationDecision::redirect(RouteName::Login),
                Some(DenialKind::NoSession),
            );
        };

        // Published before the authorization check on purpose: the store
        // tracks the last verified user even when access is then denied.
        self.state.publish(attempt.attempt_id, record.clone()).await;

        match self.policy.authorize(&record).await {
            Ok(true) => GateOutcome::new(attempt, tier, NavigationDecision::Proceed, None),
            Ok(false) => GateOutcome::new(
                attempt,
                tier,
                NavigationDecision::redirect(RouteName::Login),
                Some(DenialKind::Unauthorized),
            ),
            Err(e) => {
                warn!(attempt_id = attempt.attempt_id, "authorization check failed: {}", e);
                GateOutcome::new(
                    attempt,
                    tier,
                    NavigationDecision::redirect(RouteName::Login),
                    Some(DenialKind::CollaboratorFailure),
                )
            }
        }
    }

    /// Privileged tier: the record's role must equal the required role.
    /// Every failure redirects to not-found, never to login, so an
    /// outsider cannot distinguish "does not exist" from "exists but
    /// restricted".
    async fn evaluate_privileged(
        &self,
        attempt: &NavigationAttempt,
        required_role: Role,
    ) -> GateOutcome {
        let tier = GateTier::Privileged { required_role };
        let conceal = NavigationDecision::redirect(RouteName::NotFound);

        let verified = match self.verifier.verify().await {
            Ok(v) => v,
            Err(e) => {
                warn!(attempt_id = attempt.attempt_id, "session verification failed: {}", e);
                return GateOutcome::new(attempt, tier, conceal, Some(DenialKind::CollaboratorFailure));
            }
        };

        match verified.user_data {
            Some(record) if record.role == required_role => {
                self.state.publish(attempt.attempt_id, record).await;
                GateOutcome::new(attempt, tier, NavigationDecision::Proceed, None)
            }
            Some(_) => GateOutcome::new(attempt, tier, conceal, Some(DenialKind::WrongRole)),
            None => GateOutcome::new(attempt, tier, conceal, Some(DenialKind::NoSession)),
        }
    }
}
