// crates/matmeta-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builder for matmeta.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for `matmeta.toml`. Defaults are read
//! from the same functions serde uses, so schema and runtime cannot drift.

use serde_json::Value;
use serde_json::json;

use crate::config::MAX_ACL_ENTRIES;
use crate::config::MAX_CATEGORY_LENGTH;
use crate::config::default_audit_enabled;
use crate::config::default_citrine_category;
use crate::config::default_mdf_acl;

/// Pattern for a hyphenated UUID.
const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

/// Returns the JSON schema for `matmeta.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "matmeta://schemas/config.schema.json",
        "title": "Matmeta Configuration",
        "description": "Mapper defaults and audit settings for payload building.",
        "type": "object",
        "properties": {
            "citrine": citrine_config_schema(),
            "materials_data_facility": mdf_config_schema(),
            "audit": audit_config_schema()
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// Schema for the `[citrine]` section.
fn citrine_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Citrine mapper defaults.",
        "properties": {
            "category": {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_CATEGORY_LENGTH,
                "pattern": "^\\s*[A-Za-z0-9._-]+\\s*$",
                "default": default_citrine_category(),
                "description": "PIF category stamped on every Citrine system."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for the `[materials_data_facility]` section.
fn mdf_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Materials Data Facility mapper defaults.",
        "properties": {
            "acl": {
                "type": "array",
                "items": {
                    "oneOf": [
                        { "const": "public" },
                        { "type": "string", "pattern": UUID_PATTERN }
                    ]
                },
                "minItems": 1,
                "maxItems": MAX_ACL_ENTRIES,
                "uniqueItems": true,
                "default": default_mdf_acl(),
                "description": "Dataset access control list: \"public\" or Globus identity UUIDs."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for the `[audit]` section.
fn audit_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Payload build audit logging.",
        "properties": {
            "enabled": {
                "type": "boolean",
                "default": default_audit_enabled(),
                "description": "Emit one JSON-line audit event per payload build."
            },
            "path": {
                "oneOf": [
                    { "type": "null" },
                    {
                        "type": "string",
                        "minLength": 1,
                        "description": "Audit log path (JSON lines)."
                    }
                ],
                "default": null,
                "description": "Audit log path; events go to stderr when unset."
            }
        },
        "additionalProperties": false
    })
}
