//! Collaborator seams for the gate.
//!
//! Session verification and authorization live outside this crate (token
//! stores, policy backends). The gate only sees these two traits; tests
//! substitute counting mocks.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{UserRecord, VerificationOutcome};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("verification backend unreachable: {0}")]
    Unreachable(String),

    #[error("verification response malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("policy backend unreachable: {0}")]
    Unreachable(String),

    #[error("policy evaluation failed: {0}")]
    Evaluation(String),
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// Resolves the ambient session (cookie, token, whatever the host app
/// uses) into a verification outcome. "No session" is `Ok` with
/// `user_data: None`, never an `Err` — errors mean the check itself
/// could not be carried out.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self) -> Result<VerificationOutcome, VerifyError>;
}

/// Decides whether a verified user may enter the authenticated area.
/// Must not mutate application state.
#[async_trait]
pub trait AuthorizationPolicy: Send + Sync {
    async fn authorize(&self, user: &UserRecord) -> Result<bool, PolicyError>;
}
