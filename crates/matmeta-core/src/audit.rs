// crates/matmeta-core/src/audit.rs
// ============================================================================
// Module: Payload Audit Logging
// Description: Structured audit events for payload builds.
// Purpose: Emit JSON-line build records without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every build routed through [`crate::PayloadBuilder`] produces one
//! [`PayloadAuditEvent`]. Sinks decide where events go; the default sink
//! discards them. Events never carry record contents, only the service,
//! outcome, failing field path, and payload size.
//!
//! Sinks swallow their own write failures so auditing cannot change a build
//! result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::registry::ServiceId;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of a payload build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadOutcome {
    /// The payload was built.
    Built,
    /// The record was rejected.
    Rejected,
}

/// Payload build audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Target service.
    pub service: ServiceId,
    /// Build outcome.
    pub outcome: PayloadOutcome,
    /// Normalized error kind label when rejected.
    pub error_kind: Option<&'static str>,
    /// Failing field path when rejected by validation.
    pub error_path: Option<String>,
    /// Serialized payload size in bytes when built.
    pub payload_bytes: Option<usize>,
}

impl PayloadAuditEvent {
    /// Creates an event for a successful build.
    #[must_use]
    pub fn built(service: ServiceId, payload_bytes: usize) -> Self {
        Self {
            event: "payload_build",
            timestamp_ms: now_ms(),
            service,
            outcome: PayloadOutcome::Built,
            error_kind: None,
            error_path: None,
            payload_bytes: Some(payload_bytes),
        }
    }

    /// Creates an event for a rejected build.
    #[must_use]
    pub fn rejected(
        service: ServiceId,
        error_kind: &'static str,
        error_path: Option<String>,
    ) -> Self {
        Self {
            event: "payload_build",
            timestamp_ms: now_ms(),
            service,
            outcome: PayloadOutcome::Rejected,
            error_kind: Some(error_kind),
            error_path,
            payload_bytes: None,
        }
    }
}

/// Milliseconds since the Unix epoch, zero if the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for payload build events.
pub trait PayloadAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &PayloadAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrPayloadAuditSink;

impl PayloadAuditSink for StderrPayloadAuditSink {
    fn record(&self, event: &PayloadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FilePayloadAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FilePayloadAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl PayloadAuditSink for FilePayloadAuditSink {
    fn record(&self, event: &PayloadAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopPayloadAuditSink;

impl PayloadAuditSink for NoopPayloadAuditSink {
    fn record(&self, _event: &PayloadAuditEvent) {}
}
