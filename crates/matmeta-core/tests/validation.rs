//! Required field validation tests for matmeta-core.
// crates/matmeta-core/tests/validation.rs
// =============================================================================
// Module: Required Field Validation Tests
// Description: Omit each required field and expect a path-carrying rejection.
// Purpose: Ensure mappers fail closed and never yield partial payloads.
// =============================================================================

use matmeta_core::Contact;
use matmeta_core::PathSegment;
use matmeta_core::PayloadBuilder;
use matmeta_core::PayloadError;
use matmeta_core::ServiceId;
use matmeta_core::ValidationError;
use matmeta_core::validate;
use serde_json::Value;
use serde_json::json;

mod common;

type TestResult = Result<(), String>;

/// Removes the leaf of `segments` from `node`, descending every list element.
fn remove_leaf(node: &mut Value, segments: &[PathSegment]) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let Value::Object(map) = node else {
        return;
    };
    if rest.is_empty() {
        map.remove(segment.name());
        return;
    }
    match map.get_mut(segment.name()) {
        Some(Value::Array(items)) if segment.is_sequence() => {
            for item in items {
                remove_leaf(item, rest);
            }
        }
        Some(child) => remove_leaf(child, rest),
        None => {}
    }
}

fn expect_rejected_at(
    result: Result<matmeta_core::ServicePayload, PayloadError>,
    expected_path: &str,
) -> TestResult {
    match result {
        Err(PayloadError::Validation(error)) if error.path() == expected_path => Ok(()),
        Err(error) => Err(format!("expected rejection at {expected_path}, got {error}")),
        Ok(_) => Err(format!("expected rejection at {expected_path}, got a payload")),
    }
}

// ============================================================================
// SECTION: Single Omissions
// ============================================================================

#[test]
fn omitting_any_required_field_rejects_the_record() -> TestResult {
    let builder = PayloadBuilder::default();
    for service in ServiceId::ALL {
        for path in service.descriptor().required_paths() {
            let mut tree = common::readme_value()?;
            remove_leaf(&mut tree, path.segments());
            let record = common::record_from_value(tree)?;
            expect_rejected_at(builder.build(service, &record), &path.to_string())
                .map_err(|err| format!("{service}: {err}"))?;
        }
    }
    Ok(())
}

#[test]
fn omitting_description_only_affects_services_that_require_it() -> TestResult {
    let mut record = common::readme_record();
    record.description = None;
    let builder = PayloadBuilder::default();

    expect_rejected_at(builder.build(ServiceId::MaterialsDataFacility, &record), "description")?;
    expect_rejected_at(builder.build(ServiceId::MaterialsCommons, &record), "description")?;
    builder.build(ServiceId::Citrine, &record).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn empty_string_counts_as_missing() -> TestResult {
    let mut record = common::readme_record();
    record.title = Some(String::new());
    let result = PayloadBuilder::default().build(ServiceId::MaterialsDataFacility, &record);
    match result {
        Err(PayloadError::Validation(ValidationError::Empty {
            path, ..
        })) if path == "title" => Ok(()),
        other => Err(format!("expected empty title rejection, got {other:?}")),
    }
}

#[test]
fn empty_contact_list_is_rejected() -> TestResult {
    let mut record = common::readme_record();
    record.data_contacts = Some(Vec::new());
    let result = PayloadBuilder::default().build(ServiceId::Citrine, &record);
    match result {
        Err(PayloadError::Validation(ValidationError::EmptySequence {
            location, ..
        })) if location == "data_contacts" => Ok(()),
        other => Err(format!("expected empty list rejection, got {other:?}")),
    }
}

#[test]
fn error_location_names_the_failing_element() -> TestResult {
    let mut record = common::readme_record();
    let mut incomplete = Contact::new("Max", "Born", "max@example.org");
    incomplete.email = None;
    record.data_contributors =
        Some(vec![Contact::new("Jane", "Doe", "jane.doe@example.org"), incomplete]);
    let result = PayloadBuilder::default().build(ServiceId::Citrine, &record);
    match result {
        Err(PayloadError::Validation(error)) => {
            if error.path() != "data_contributors[].email" {
                return Err(format!("unexpected path {}", error.path()));
            }
            if error.location() != "data_contributors[1].email" {
                return Err(format!("unexpected location {}", error.location()));
            }
            if !error.to_string().contains("data_contributors[1].email") {
                return Err(format!("message lacks location: {error}"));
            }
            Ok(())
        }
        other => Err(format!("expected validation error, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Raw Trees
// ============================================================================

#[test]
fn non_list_where_list_required_is_a_type_error() -> TestResult {
    let tree = json!({ "data_contacts": { "given_name": "John" } });
    let paths = ServiceId::Citrine.descriptor().required_paths();
    match validate(&tree, paths) {
        Err(ValidationError::UnexpectedType {
            expected, ..
        }) if expected == "a list" => Ok(()),
        other => Err(format!("expected list type error, got {other:?}")),
    }
}

#[test]
fn validation_does_not_mutate_input() -> TestResult {
    let tree = common::readme_value()?;
    let before = tree.clone();
    for service in ServiceId::ALL {
        validate(&tree, service.descriptor().required_paths()).map_err(|err| err.to_string())?;
    }
    if tree == before { Ok(()) } else { Err("validation mutated the record".to_string()) }
}
