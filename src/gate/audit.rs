use super::types::GateOutcome;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{Result as IoResult, Write};
use std::path::PathBuf;
use tracing::info;

/// One line in the access audit trail. Every terminal gate decision
/// produces exactly one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub timestamp: String,
    pub outcome: GateOutcome,
}

impl AuditEvent {
    pub fn decision(outcome: &GateOutcome) -> Self {
        Self {
            id: format!("gate-{}", outcome.attempt_id),
            timestamp: Utc::now().to_rfc3339(),
            outcome: outcome.clone(),
        }
    }
}

pub trait AuditSink: Send {
    fn log(&mut self, event: AuditEvent) -> IoResult<()>;
}

/// Appends events as JSON lines.
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn open_append(&self) -> IoResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
    }
}

impl AuditSink for FileAuditSink {
    fn log(&mut self, event: AuditEvent) -> IoResult<()> {
        let mut file = self.open_append()?;
        let line = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

/// Console audit sink for development.
pub struct ConsoleAuditSink;

impl AuditSink for ConsoleAuditSink {
    fn log(&mut self, event: AuditEvent) -> IoResult<()> {
        info!(
            target: "navgate::audit",
            attempt_id = event.outcome.attempt_id,
            path = %event.outcome.target,
            decision = ?event.outcome.decision,
            denial = ?event.outcome.denial,
            "gate decision"
        );
        Ok(())
    }
}

/// Discards everything. Default when the host app brings no sink.
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn log(&mut self, _event: AuditEvent) -> IoResult<()> {
        Ok(())
    }
}
