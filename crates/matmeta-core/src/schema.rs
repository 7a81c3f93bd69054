// crates/matmeta-core/src/schema.rs
// ============================================================================
// Module: Common Input Schema
// Description: JSON schema builder for the common input record.
// Purpose: Provide a canonical schema for tooling that authors records.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The schema describes every recognized record field and rejects unknown
//! ones. Its `required` lists are derived from the union of all registered
//! services' required paths, so a record that validates against the schema
//! carries every field any mapper needs.

use serde_json::Value;
use serde_json::json;

use crate::registry::FieldPath;
use crate::registry::ServiceId;
use crate::template::PayloadTemplate;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Returns the JSON schema for a common input record.
#[must_use]
pub fn common_input_schema() -> Value {
    let required = PayloadTemplate::for_services(&ServiceId::ALL).required_paths();
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "matmeta://schemas/common_input.schema.json",
        "title": "Matmeta Common Input Record",
        "description": "Service-independent dataset metadata translated into service payloads.",
        "type": "object",
        "properties": {
            "title": schema_for_string("Dataset title."),
            "source": source_schema(&required),
            "data_contacts": contact_list_schema(
                "People to contact about the dataset.",
                &required_children(&required, "data_contacts"),
            ),
            "data_contributors": contact_list_schema(
                "People who contributed data.",
                &required_children(&required, "data_contributors"),
            ),
            "links": links_schema(&required),
            "authors": contact_list_schema(
                "Dataset authors.",
                &required_children(&required, "authors"),
            ),
            "licenses": {
                "type": "array",
                "items": license_schema(),
                "description": "Licenses covering the dataset."
            },
            "citations": {
                "type": "array",
                "items": citation_schema(),
                "description": "Structured citations for the dataset."
            },
            "repository": schema_for_string("Repository name."),
            "collection": schema_for_string("Collection name."),
            "tags": schema_for_string_array("Free-form dataset tags."),
            "description": schema_for_string("Dataset description."),
            "raw": schema_for_string("Raw data reference."),
            "year": {
                "type": "integer",
                "description": "Publication year."
            },
            "composition": schema_for_string("Material composition.")
        },
        "required": required_roots(&required),
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Record Parts
// ============================================================================

/// Schema for the `source` block.
fn source_schema(required: &[FieldPath]) -> Value {
    json!({
        "type": "object",
        "description": "Dataset source.",
        "properties": {
            "name": schema_for_string("Short source name."),
            "producer": schema_for_string("Organization or person producing the data."),
            "url": schema_for_string("Source URL."),
            "tags": schema_for_string_array("Source tags.")
        },
        "required": required_children(required, "source"),
        "additionalProperties": false
    })
}

/// Schema for the `links` block.
fn links_schema(required: &[FieldPath]) -> Value {
    json!({
        "type": "object",
        "description": "Dataset links.",
        "properties": {
            "landing_page": schema_for_string("Landing page URI."),
            "publication": schema_for_string_array("Related publication URIs."),
            "data_doi": schema_for_string("Data DOI URI."),
            "related_id": schema_for_string_array("Related dataset identifiers."),
            "parent_id": schema_for_string("Parent dataset identifier.")
        },
        "required": required_children(required, "links"),
        "additionalProperties": false
    })
}

/// Schema for a list of people; a list with required fields must be non-empty.
fn contact_list_schema(description: &str, required: &[&'static str]) -> Value {
    let mut items = contact_schema();
    if let Value::Object(map) = &mut items {
        map.insert("required".to_string(), json!(required));
    }
    let min_items = usize::from(!required.is_empty());
    json!({
        "type": "array",
        "items": items,
        "minItems": min_items,
        "description": description
    })
}

/// Schema for a person.
fn contact_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "given_name": schema_for_string("Given (first) name."),
            "family_name": schema_for_string("Family (last) name."),
            "title": schema_for_string("Honorific or academic title."),
            "orcid": schema_for_string("ORCID identifier."),
            "email": schema_for_string("Email address."),
            "institution": schema_for_string("Affiliated institution."),
            "tags": schema_for_string_array("Free-form tags.")
        },
        "additionalProperties": false
    })
}

/// Schema for a license entry.
fn license_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": schema_for_string("License name."),
            "description": schema_for_string("License description."),
            "url": schema_for_string("License URL."),
            "tags": schema_for_string_array("License tags.")
        },
        "additionalProperties": false
    })
}

/// Schema for a structured citation.
fn citation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "authors": {
                "type": "array",
                "items": contact_schema(),
                "description": "Cited authors."
            },
            "year": schema_for_string("Publication year."),
            "title": schema_for_string("Article or book title."),
            "journal": schema_for_string("Journal title; absent for books."),
            "volume": schema_for_string("Journal volume."),
            "issue": schema_for_string("Journal issue."),
            "page_location": schema_for_string("Page range or article location."),
            "edition": schema_for_string("Book edition."),
            "publication_location": schema_for_string("Place of publication."),
            "publisher": schema_for_string("Publisher name."),
            "extent": schema_for_string("Extent (page count) of a book."),
            "notes": schema_for_string("Additional notes.")
        },
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Required Field Derivation
// ============================================================================

/// Returns the distinct top-level keys of `required`.
fn required_roots(required: &[FieldPath]) -> Vec<&'static str> {
    let mut roots = Vec::new();
    for root in required.iter().filter_map(|path| path.root()) {
        if !roots.contains(&root) {
            roots.push(root);
        }
    }
    roots
}

/// Returns the distinct second-level keys of `required` under `root`.
fn required_children(required: &[FieldPath], root: &str) -> Vec<&'static str> {
    let mut children = Vec::new();
    for path in required {
        if let [first, second, ..] = path.segments()
            && first.name() == root
            && !children.contains(&second.name())
        {
            children.push(second.name());
        }
    }
    children
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Schema for an arbitrary string.
fn schema_for_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Schema for a string array (empty allowed).
fn schema_for_string_array(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}
