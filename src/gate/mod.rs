//! Route access control gate.
//! This module is intentionally standalone so it can be reviewed and tested in isolation.

mod audit;
mod engine;
mod types;
mod verify;

pub use audit::{AuditEvent, AuditSink, ConsoleAuditSink, FileAuditSink, NullAuditSink};
pub use engine::AccessGate;
pub use types::{
    DenialKind, GateConfig, GateOutcome, GateTier, NavigationAttempt,
    NavigationDecision, Role, RouteName, UserRecord, VerificationOutcome,
};
pub use verify::{AuthorizationPolicy, PolicyError, SessionVerifier, VerifyError};
