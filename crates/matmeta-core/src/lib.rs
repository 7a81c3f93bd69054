// crates/matmeta-core/src/lib.rs
// ============================================================================
// Module: Matmeta Core Library
// Description: Public API surface for common metadata translation.
// Purpose: Expose the record model, registry, validator, and payload mappers.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `matmeta-core` translates a single common metadata record into the
//! payloads expected by materials-data repositories (Citrine, Materials Data
//! Facility, Materials Commons). Required fields are declared per service in
//! a static registry; the same tables drive the template generator and the
//! validator, so a template always describes exactly what mapping enforces.
//!
//! Mapping is pure and all-or-nothing: a record that fails validation never
//! yields a partial payload.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod citation;
pub mod payload;
pub mod record;
pub mod registry;
pub mod schema;
pub mod template;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FilePayloadAuditSink;
pub use audit::NoopPayloadAuditSink;
pub use audit::PayloadAuditEvent;
pub use audit::PayloadAuditSink;
pub use audit::PayloadOutcome;
pub use audit::StderrPayloadAuditSink;
pub use citation::format_citation;
pub use payload::CitrineOptions;
pub use payload::CitrinePayload;
pub use payload::McPayload;
pub use payload::MdfOptions;
pub use payload::MdfPayload;
pub use payload::PUBLIC_ACL;
pub use payload::PayloadBuilder;
pub use payload::PayloadError;
pub use payload::PayloadOptions;
pub use payload::ServicePayload;
pub use record::Citation;
pub use record::CommonInputRecord;
pub use record::Contact;
pub use record::License;
pub use record::Links;
pub use record::Source;
pub use registry::ConfigurationError;
pub use registry::FieldKind;
pub use registry::FieldPath;
pub use registry::FieldSpec;
pub use registry::PathSegment;
pub use registry::SchemaDescriptor;
pub use registry::ServiceId;
pub use schema::common_input_schema;
pub use template::PayloadTemplate;
pub use template::get_common_payload_template;
pub use validation::ValidationError;
pub use validation::validate;
