//! NavGate - Navigator
//!
//! Front door for navigation attempts: resolves the target against the
//! route table, runs the gate when the matched entry carries one, and
//! maps the gate's decision back onto a concrete view. Performs no
//! mutual exclusion between attempts and no timeout of its own; each
//! attempt gets a fresh id from a monotonic counter so the state store
//! can discard writes from superseded attempts.

use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, info};

use crate::gate::{AccessGate, NavigationAttempt, NavigationDecision, RouteName};
use crate::routes::RouteTable;

// ============================================================================
// Error Types
// ============================================================================

/// Route table misconfiguration surfaced at navigation time. Gate
/// denials are not errors; they come back as `NavigationOutcome::Redirect`.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("no route matches '{path}' and the table has no catch-all")]
    NoMatch { path: String },

    #[error("redirect target {name:?} is not declared in the route table")]
    MissingNamedRoute { name: RouteName },
}

// ============================================================================
// Outcome
// ============================================================================

/// What the host application should render for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed { view: String },
    Redirect { route: RouteName, view: String },
}

impl NavigationOutcome {
    pub fn view(&self) -> &str {
        match self {
            NavigationOutcome::Proceed { view } => view,
            NavigationOutcome::Redirect { view, .. } => view,
        }
    }
}

// ============================================================================
// Navigator
// ============================================================================

pub struct Navigator {
    table: RouteTable,
    gate: AccessGate,
    next_attempt: AtomicU64,
}

impl Navigator {
    pub fn new(table: RouteTable, gate: AccessGate) -> Self {
        Self {
            table,
            gate,
            next_attempt: AtomicU64::new(1),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Run one navigation attempt to completion. Ungated entries (the
    /// catch-all included) proceed unconditionally without touching the
    /// verifier or the policy.
    pub async fn navigate(
        &self,
        to: &str,
        from: Option<&str>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let attempt_id = self.next_attempt.fetch_add(1, Ordering::Relaxed);
        debug!(attempt_id, to, from = ?from, "navigation attempt");

        let resolved = self.table.resolve(to).ok_or_else(|| NavigationError::NoMatch {
            path: to.to_string(),
        })?;

        let Some(gate_config) = resolved.gate else {
            info!(attempt_id, to, view = resolved.view, "ungated navigation");
            return Ok(NavigationOutcome::Proceed {
                view: resolved.view.to_string(),
            });
        };

        let attempt = NavigationAttempt::new(to, from.map(String::from), attempt_id);
        let decision = self.gate.decide(&attempt, gate_config).await;

        match decision {
            NavigationDecision::Proceed => Ok(NavigationOutcome::Proceed {
                view: resolved.view.to_string(),
            }),
            NavigationDecision::RedirectTo { route } => {
                let target = self
                    .table
                    .by_name(route)
                    .ok_or(NavigationError::MissingNamedRoute { name: route })?;
                Ok(NavigationOutcome::Redirect {
                    route,
                    view: target.view.clone(),
                })
            }
        }
    }
}
