//! NavGate - Application State Store
//!
//! Process-wide mutable state holding the last successfully verified user
//! record. Written only by the gate, read by the rest of the application
//! to render user-specific UI. No automatic invalidation: a record stays
//! until a later verification overwrites it.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::gate::UserRecord;

#[derive(Debug, Default)]
struct StateInner {
    user_data: Option<UserRecord>,
    /// Attempt id of the last applied write. Writes from attempts older
    /// than this are refused, so a superseded navigation that resolves
    /// late cannot clobber fresher state.
    written_by: u64,
}

/// Cloneable handle to the shared application state.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    inner: Arc<Mutex<StateInner>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a verified record on behalf of `attempt_id`. Applied only
    /// if no newer attempt has written already; returns whether the write
    /// took effect. The store is never cleared through this path — absent
    /// verification outcomes are not publishable.
    pub async fn publish(&self, attempt_id: u64, record: UserRecord) -> bool {
        let mut inner = self.inner.lock().await;
        if attempt_id < inner.written_by {
            debug!(
                attempt_id,
                written_by = inner.written_by,
                "discarding stale state write"
            );
            return false;
        }
        inner.written_by = attempt_id;
        inner.user_data = Some(record);
        true
    }

    /// Snapshot of the current user record, if any.
    pub async fn user_data(&self) -> Option<UserRecord> {
        self.inner.lock().await.user_data.clone()
    }
}
