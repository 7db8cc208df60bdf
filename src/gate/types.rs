use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// User identity
// ============================================================================

/// Role carried by a verified user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Member,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Guest => "guest",
        }
    }
}

/// A verified user, as produced by the session verifier.
/// The gate receives a read-only copy and may publish it into the
/// application state store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub identity: Uuid,
    pub display_name: String,
    pub role: Role,
}

/// Result of a session verification. `user_data: None` means no
/// authenticated session; that case is not an error (see `VerifyError`
/// for transport-level failures).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub user_data: Option<UserRecord>,
}

impl VerificationOutcome {
    pub fn authenticated(record: UserRecord) -> Self {
        Self {
            user_data: Some(record),
        }
    }

    pub fn anonymous() -> Self {
        Self { user_data: None }
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// One navigation event. Created per attempt, consumed by the gate,
/// never persisted. `attempt_id` is allocated by the navigator from a
/// monotonically increasing counter; the state store uses it to refuse
/// writes from superseded attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationAttempt {
    pub target: String,
    pub origin: Option<String>,
    pub attempt_id: u64,
}

impl NavigationAttempt {
    pub fn new(target: impl Into<String>, origin: Option<String>, attempt_id: u64) -> Self {
        Self {
            target: target.into(),
            origin,
            attempt_id,
        }
    }
}

/// Named redirect targets resolvable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteName {
    Login,
    NotFound,
}

/// The sole output of the gate for a given attempt. Exhaustive by
/// construction: every terminal state of the gate maps to exactly one
/// variant, so a navigation can never end without a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum NavigationDecision {
    Proceed,
    RedirectTo { route: RouteName },
}

impl NavigationDecision {
    pub fn redirect(route: RouteName) -> Self {
        NavigationDecision::RedirectTo { route }
    }
}

// ============================================================================
// Gate configuration
// ============================================================================

/// Protection tier of a gated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum GateTier {
    /// Any logged-in user, subject to the authorization policy.
    Authenticated,
    /// Role-restricted area. Failures redirect to not-found rather than
    /// login so the area's existence is not revealed.
    Privileged { required_role: Role },
}

/// Per-route gate configuration carried by protected route entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub tier: GateTier,
}

impl GateConfig {
    pub fn authenticated() -> Self {
        Self {
            tier: GateTier::Authenticated,
        }
    }

    pub fn privileged(required_role: Role) -> Self {
        Self {
            tier: GateTier::Privileged { required_role },
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Why a gate turned an attempt away. All variants are absorbed into a
/// redirect decision; none surface as errors to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// Verifier resolved with no user record.
    NoSession,
    /// Authorization policy denied the verified user.
    Unauthorized,
    /// Privileged tier, record present, role mismatch.
    WrongRole,
    /// Verifier or policy call failed outright; the gate fails closed.
    CollaboratorFailure,
}

/// Full record of one gate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateOutcome {
    pub attempt_id: u64,
    pub target: String,
    pub tier: GateTier,
    pub timestamp: String,
    pub decision: NavigationDecision,
    pub denial: Option<DenialKind>,
}

impl GateOutcome {
    pub(crate) fn new(
        attempt: &NavigationAttempt,
        tier: GateTier,
        decision: NavigationDecision,
        denial: Option<DenialKind>,
    ) -> Self {
        Self {
            attempt_id: attempt.attempt_id,
            target: attempt.target.clone(),
            tier,
            timestamp: Utc::now().to_rfc3339(),
            decision,
            denial,
        }
    }
}
