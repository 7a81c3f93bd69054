//! Payload builder audit tests for matmeta-core.
// crates/matmeta-core/tests/builder_audit.rs
// =============================================================================
// Module: Payload Builder Audit Tests
// Description: Dispatch by service and audit events for every build.
// Purpose: Ensure builds are observable without exposing record contents.
// =============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use matmeta_core::FilePayloadAuditSink;
use matmeta_core::PayloadAuditEvent;
use matmeta_core::PayloadAuditSink;
use matmeta_core::PayloadBuilder;
use matmeta_core::PayloadOptions;
use matmeta_core::PayloadOutcome;
use matmeta_core::ServiceId;
use serde_json::Value;

mod common;

type TestResult = Result<(), String>;

/// Audit sink that keeps events in memory.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<PayloadAuditEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Result<Vec<PayloadAuditEvent>, String> {
        self.events.lock().map(|events| events.clone()).map_err(|err| err.to_string())
    }
}

impl PayloadAuditSink for RecordingSink {
    fn record(&self, event: &PayloadAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

#[test]
fn build_all_returns_payloads_in_registry_order() -> TestResult {
    let payloads = PayloadBuilder::default()
        .build_all(&common::readme_record())
        .map_err(|err| err.to_string())?;
    let services: Vec<ServiceId> = payloads.iter().map(|payload| payload.service()).collect();
    if services != ServiceId::ALL.to_vec() {
        return Err(format!("unexpected service order {services:?}"));
    }
    Ok(())
}

#[test]
fn builder_applies_configured_options() -> TestResult {
    let mut options = PayloadOptions::default();
    options.citrine.category = "system.chemical".to_string();
    let payload = PayloadBuilder::new(options)
        .build(ServiceId::Citrine, &common::readme_record())
        .map_err(|err| err.to_string())?;
    if payload.metapayload()["category"] == Value::from("system.chemical") {
        Ok(())
    } else {
        Err(format!("category not applied: {}", payload.metapayload()))
    }
}

// ============================================================================
// SECTION: Audit Events
// ============================================================================

#[test]
fn successful_build_records_built_event() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let builder = PayloadBuilder::default().with_audit(sink.clone());
    let payload = builder
        .build(ServiceId::MaterialsCommons, &common::readme_record())
        .map_err(|err| err.to_string())?;

    let events = sink.events()?;
    let [event] = events.as_slice() else {
        return Err(format!("expected one event, got {}", events.len()));
    };
    let bytes = serde_json::to_vec(payload.metapayload()).map_err(|err| err.to_string())?.len();
    if event.outcome != PayloadOutcome::Built
        || event.service != ServiceId::MaterialsCommons
        || event.payload_bytes != Some(bytes)
        || event.error_kind.is_some()
    {
        return Err(format!("unexpected event {event:?}"));
    }
    Ok(())
}

#[test]
fn rejected_build_records_failing_path() -> TestResult {
    let sink = Arc::new(RecordingSink::default());
    let builder = PayloadBuilder::default().with_audit(sink.clone());
    let mut record = common::readme_record();
    record.title = None;
    if builder.build(ServiceId::MaterialsDataFacility, &record).is_ok() {
        return Err("record without title accepted".to_string());
    }

    let events = sink.events()?;
    let [event] = events.as_slice() else {
        return Err(format!("expected one event, got {}", events.len()));
    };
    if event.outcome != PayloadOutcome::Rejected
        || event.error_kind != Some("validation")
        || event.error_path.as_deref() != Some("title")
        || event.payload_bytes.is_some()
    {
        return Err(format!("unexpected event {event:?}"));
    }
    Ok(())
}

#[test]
fn file_sink_writes_json_lines_without_record_contents() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("audit.jsonl");
    let sink = FilePayloadAuditSink::new(&path).map_err(|err| err.to_string())?;
    let builder = PayloadBuilder::default().with_audit(Arc::new(sink));
    builder.build_all(&common::readme_record()).map_err(|err| err.to_string())?;

    let contents = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
    let lines: Vec<&str> = contents.lines().collect();
    if lines.len() != ServiceId::ALL.len() {
        return Err(format!("expected {} lines, got {}", ServiceId::ALL.len(), lines.len()));
    }
    for line in lines {
        let event: Value = serde_json::from_str(line).map_err(|err| err.to_string())?;
        if event["event"] != Value::from("payload_build") || event["outcome"] != Value::from("built")
        {
            return Err(format!("unexpected audit line {line}"));
        }
    }
    if contents.contains("test title") || contents.contains("example.org") {
        return Err("audit log leaked record contents".to_string());
    }
    Ok(())
}
