// crates/matmeta-core/src/validation.rs
// ============================================================================
// Module: Required Field Validation
// Description: Path-driven presence checks over a record's JSON view.
// Purpose: Reject records with missing or empty required fields before mapping.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The validator walks each required [`FieldPath`] through a JSON tree. A
//! sequence segment (`data_contacts[]`) must hold at least one element and the
//! rest of the path is checked against every element. Validation fails closed
//! on the first missing, empty, or mistyped node and never mutates its input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::registry::FieldPath;
use crate::registry::PathSegment;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Label used for the record root in error locations.
const ROOT_LOCATION: &str = "(root)";

/// Required field failures, keyed by declared path and concrete location.
///
/// `path` is the registry form (`data_contacts[].email`); `location` names
/// the exact node (`data_contacts[1].email`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("missing required field: {location}")]
    Missing {
        /// Declared field path.
        path: String,
        /// Concrete location of the missing node.
        location: String,
    },
    /// A required field is an empty string or empty mapping.
    #[error("required field is empty: {location}")]
    Empty {
        /// Declared field path.
        path: String,
        /// Concrete location of the empty node.
        location: String,
    },
    /// A required sequence has no elements.
    #[error("required list is empty: {location}")]
    EmptySequence {
        /// Declared field path.
        path: String,
        /// Concrete location of the empty sequence.
        location: String,
    },
    /// A node along a required path has the wrong shape.
    #[error("required field {location} must be {expected}")]
    UnexpectedType {
        /// Declared field path.
        path: String,
        /// Concrete location of the mistyped node.
        location: String,
        /// Expected JSON shape.
        expected: &'static str,
    },
}

impl ValidationError {
    /// Returns the declared field path that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Missing {
                path, ..
            }
            | Self::Empty {
                path, ..
            }
            | Self::EmptySequence {
                path, ..
            }
            | Self::UnexpectedType {
                path, ..
            } => path,
        }
    }

    /// Returns the concrete location that failed.
    #[must_use]
    pub fn location(&self) -> &str {
        match self {
            Self::Missing {
                location, ..
            }
            | Self::Empty {
                location, ..
            }
            | Self::EmptySequence {
                location, ..
            }
            | Self::UnexpectedType {
                location, ..
            } => location,
        }
    }
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Validates that every required path is present and non-empty in `record`.
///
/// Paths are checked in iteration order and the first failure is returned.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first missing, empty, or mistyped
/// required field.
pub fn validate<I>(record: &Value, required: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = FieldPath>,
{
    for path in required {
        check_node(record, path, path.segments(), String::new())?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Traversal
// ============================================================================

/// Checks the remaining `segments` of `path` starting at `node`.
fn check_node(
    node: &Value,
    path: FieldPath,
    segments: &[PathSegment],
    location: String,
) -> Result<(), ValidationError> {
    let Some((segment, rest)) = segments.split_first() else {
        return check_leaf(node, path, location);
    };
    let Value::Object(map) = node else {
        return Err(ValidationError::UnexpectedType {
            path: path.to_string(),
            location: display_location(location),
            expected: "an object",
        });
    };
    let location = child_location(&location, segment.name());
    let child = match map.get(segment.name()) {
        None | Some(Value::Null) => {
            return Err(ValidationError::Missing {
                path: path.to_string(),
                location,
            });
        }
        Some(child) => child,
    };
    if !segment.is_sequence() {
        return check_node(child, path, rest, location);
    }
    let Value::Array(items) = child else {
        return Err(ValidationError::UnexpectedType {
            path: path.to_string(),
            location,
            expected: "a list",
        });
    };
    if items.is_empty() {
        return Err(ValidationError::EmptySequence {
            path: path.to_string(),
            location,
        });
    }
    for (index, item) in items.iter().enumerate() {
        check_node(item, path, rest, format!("{location}[{index}]"))?;
    }
    Ok(())
}

/// Checks that a leaf value carries content.
fn check_leaf(node: &Value, path: FieldPath, location: String) -> Result<(), ValidationError> {
    let location = display_location(location);
    match node {
        Value::String(text) if text.is_empty() => Err(ValidationError::Empty {
            path: path.to_string(),
            location,
        }),
        Value::Object(map) if map.is_empty() => Err(ValidationError::Empty {
            path: path.to_string(),
            location,
        }),
        Value::Array(items) if items.is_empty() => Err(ValidationError::EmptySequence {
            path: path.to_string(),
            location,
        }),
        _ => Ok(()),
    }
}

/// Joins a parent location and a mapping key.
fn child_location(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_string() } else { format!("{parent}.{key}") }
}

/// Substitutes the root label for an empty location.
fn display_location(location: String) -> String {
    if location.is_empty() { ROOT_LOCATION.to_string() } else { location }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ValidationError;
    use super::validate;
    use crate::registry::ServiceId;

    #[test]
    fn non_object_record_is_rejected_at_root() {
        let paths = ServiceId::MaterialsCommons.descriptor().required_paths();
        let result = validate(&json!([]), paths);
        assert!(matches!(
            result,
            Err(ValidationError::UnexpectedType { ref location, .. }) if location == "(root)"
        ));
    }

    #[test]
    fn null_counts_as_missing() {
        let paths = ServiceId::MaterialsCommons.descriptor().required_paths();
        let record = json!({"source": {"name": null}, "description": "d"});
        let result = validate(&record, paths);
        assert!(matches!(
            result,
            Err(ValidationError::Missing { ref path, .. }) if path == "source.name"
        ));
    }
}
