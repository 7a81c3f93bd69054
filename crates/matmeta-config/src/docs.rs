// crates/matmeta-config/src/docs.rs
// ============================================================================
// Module: Reference Docs Generator
// Description: Markdown generator for configuration and template docs.
// Purpose: Keep reference docs in sync with the config schema and registry.
// Dependencies: matmeta-core, serde_json, std
// ============================================================================

//! ## Overview
//! Generates the matmeta reference markdown: one table per `matmeta.toml` section, rendered
//! from [`config_schema`], followed by one table per service listing the
//! record fields its mapper requires or reads. Output is deterministic so the
//! committed file can be checked for drift.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use matmeta_core::FieldSpec;
use matmeta_core::PayloadTemplate;
use matmeta_core::ServiceId;
use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying reference docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while reading or writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the reference markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn template_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("matmeta.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Matmeta Reference\n");
    out.push_str("Description: matmeta.toml settings and per-service record requirements.\n");
    out.push_str("Purpose: Tell dataset authors which fields each service needs.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# Matmeta Reference\n\n");
    out.push_str("## matmeta.toml\n\n");
    out.push_str("All sections are optional. Invalid values fail closed on load.\n\n");

    for section in SECTIONS {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        out.push_str(section.description);
        out.push_str("\n\n");
        let table = render_config_table(&schema, section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        out.push('\n');
    }

    out.push_str("## Common Input Record\n\n");
    out.push_str("Sequence fields are marked `[]`; required sub-fields apply to every\n");
    out.push_str("element and the list itself must be non-empty.\n\n");

    for service in ServiceId::ALL {
        let _ = writeln!(&mut out, "### {service}\n");
        let template = PayloadTemplate::for_services(&[service]);
        out.push_str(&render_field_table(&template));
        out.push('\n');
    }

    out.push_str("### all services\n\n");
    out.push_str(&render_field_table(&PayloadTemplate::for_services(&ServiceId::ALL)));

    Ok(out)
}

/// Writes the generated docs to `path`.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_template_docs(path: &Path) -> Result<(), DocsError> {
    let content = template_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the docs at `path` match the generated output.
///
/// # Errors
///
/// Returns [`DocsError::Io`] when `path` cannot be read and
/// [`DocsError::Drift`] when its content differs.
pub fn verify_template_docs(path: &Path) -> Result<(), DocsError> {
    let content = template_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Config Sections
// ============================================================================

/// Specification for one rendered config section.
struct SectionSpec {
    /// Section heading, including TOML table name.
    heading: &'static str,
    /// Top-level schema property holding the section.
    property: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// Ordered field list rendered in the docs table.
    fields: &'static [&'static str],
}

/// Ordered list of configuration sections to render.
const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        heading: "[citrine]",
        property: "citrine",
        description: "Citrine mapper defaults.",
        fields: &["category"],
    },
    SectionSpec {
        heading: "[materials_data_facility]",
        property: "materials_data_facility",
        description: "Materials Data Facility mapper defaults.",
        fields: &["acl"],
    },
    SectionSpec {
        heading: "[audit]",
        property: "audit",
        description: "Payload build audit logging (JSON lines).",
        fields: &["enabled", "path"],
    },
];

/// Renders the markdown table for a configuration section.
fn render_config_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let props = schema
        .pointer(&format!("/properties/{}/properties", section.property))
        .and_then(Value::as_object)
        .ok_or_else(|| format!("schema properties missing for {}", section.property))?;

    let mut seen = BTreeSet::new();
    for field in section.fields {
        if !props.contains_key(*field) {
            return Err(format!("missing field in schema: {field}"));
        }
        seen.insert(*field);
    }
    for key in props.keys() {
        if !seen.contains(key.as_str()) {
            return Err(format!("field not documented: {key}"));
        }
    }

    let mut table = String::new();
    table.push_str("| Field | Type | Default | Notes |\n");
    table.push_str("| --- | --- | --- | --- |\n");
    for field in section.fields {
        let raw_schema =
            props.get(*field).ok_or_else(|| format!("missing field schema: {field}"))?;
        let field_type = format_schema_type(raw_schema);
        let default_value =
            raw_schema.get("default").map_or_else(|| "n/a".to_string(), format_default_value);
        let notes = raw_schema.get("description").and_then(Value::as_str).unwrap_or("");
        let _ = writeln!(&mut table, "| `{field}` | {field_type} | {default_value} | {notes} |");
    }
    Ok(table)
}

/// Formats a schema type for markdown tables.
fn format_schema_type(schema: &Value) -> String {
    if let Some(one_of) = schema.get("oneOf").and_then(Value::as_array) {
        let types: Vec<&str> = one_of
            .iter()
            .filter_map(|item| item.get("type").and_then(Value::as_str))
            .filter(|kind| *kind != "null")
            .collect();
        if let [only] = types.as_slice() {
            return format!("{only} \\| null");
        }
    }
    match schema.get("type").and_then(Value::as_str) {
        Some("boolean") => "bool".to_string(),
        Some("object") => "table".to_string(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

/// Formats schema defaults for display in docs.
fn format_default_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => format!("\"{text}\""),
        other => other.to_string().replace(',', ", "),
    }
}

// ============================================================================
// SECTION: Record Fields
// ============================================================================

/// Renders the required and optional fields of a template.
fn render_field_table(template: &PayloadTemplate) -> String {
    let mut table = String::new();
    table.push_str("| Field | Kind | Required |\n");
    table.push_str("| --- | --- | --- |\n");
    push_field_rows(&mut table, template.required_specs(), "yes");
    push_field_rows(&mut table, template.optional_specs(), "no");
    table
}

/// Appends one table row per field spec.
fn push_field_rows(table: &mut String, specs: &[FieldSpec], required: &str) {
    for spec in specs {
        let kind = placeholder_label(&spec.kind.placeholder());
        let _ = writeln!(table, "| `{}` | {kind} | {required} |", spec.path);
    }
}

/// Renders a placeholder value as plain text.
fn placeholder_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(placeholder_label).collect();
            format!("list of {}", inner.join(", "))
        }
        other => other.to_string(),
    }
}
