// crates/matmeta-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration and record files.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for `matmeta.toml` and for a common input record that
//! satisfies every registered service. Outputs are deterministic and kept in
//! sync with the schemas by tests.

/// Returns a canonical example `matmeta.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[citrine]
category = "system"

[materials_data_facility]
acl = ["public"]

[audit]
enabled = true
path = "matmeta-audit.jsonl"
"#,
    )
}

/// Returns a canonical example record in TOML form.
#[must_use]
pub fn record_toml_example() -> String {
    String::from(
        r#"title = "test title"
description = "test description"

[source]
name = "test source"

[links]
landing_page = "http://somepage.org"

[[data_contacts]]
given_name = "John"
family_name = "Smith"
email = "john.smith@example.org"

[[data_contributors]]
given_name = "Jane"
family_name = "Doe"
email = "jane.doe@example.org"
"#,
    )
}
