// crates/matmeta-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared record fixtures for matmeta-core integration tests.
// Purpose: Keep the reference record identical across suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use matmeta_core::CommonInputRecord;
use matmeta_core::Contact;
use matmeta_core::Links;
use matmeta_core::Source;

/// Returns the minimal record that satisfies every registered service.
pub fn readme_record() -> CommonInputRecord {
    CommonInputRecord {
        title: Some("test title".to_string()),
        source: Some(Source {
            name: Some("test source".to_string()),
            ..Source::default()
        }),
        data_contacts: Some(vec![Contact::new("John", "Smith", "john.smith@example.org")]),
        data_contributors: Some(vec![Contact::new("Jane", "Doe", "jane.doe@example.org")]),
        links: Some(Links {
            landing_page: Some("http://somepage.org".to_string()),
            ..Links::default()
        }),
        description: Some("test description".to_string()),
        ..CommonInputRecord::default()
    }
}

/// Returns the reference record as a JSON tree.
pub fn readme_value() -> Result<serde_json::Value, String> {
    readme_record().to_value().map_err(|err| err.to_string())
}

/// Parses a record from a JSON tree.
pub fn record_from_value(value: serde_json::Value) -> Result<CommonInputRecord, String> {
    serde_json::from_value(value).map_err(|err| err.to_string())
}
