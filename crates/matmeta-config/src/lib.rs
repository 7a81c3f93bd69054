// crates/matmeta-config/src/lib.rs
// ============================================================================
// Module: Matmeta Config Library
// Description: Config model, record loading, and artifact generation.
// Purpose: Single source of truth for matmeta.toml semantics.
// Dependencies: matmeta-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! `matmeta-config` wires files on disk to `matmeta-core`: it loads and
//! validates `matmeta.toml`, turns it into a configured
//! [`matmeta_core::PayloadBuilder`], loads common input records from JSON or
//! TOML, and generates the config schema, examples, and reference docs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod record;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::CitrineConfig;
pub use config::ConfigError;
pub use config::MatmetaConfig;
pub use config::MdfConfig;
pub use docs::DocsError;
pub use docs::template_docs_markdown;
pub use docs::verify_template_docs;
pub use docs::write_template_docs;
pub use examples::config_toml_example;
pub use examples::record_toml_example;
pub use record::RecordFormat;
pub use record::load_record;
pub use record::parse_record;
pub use schema::config_schema;
