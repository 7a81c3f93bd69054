// crates/matmeta-core/src/template.rs
// ============================================================================
// Module: Common Payload Template
// Description: Human-readable description of the common input record.
// Purpose: Tell callers which fields a set of services requires.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! A [`PayloadTemplate`] unions the registry tables of the selected services.
//! Required fields are the union of each service's required paths; optional
//! fields are the union of optional paths minus anything already required.
//! Both render as nested example trees whose leaves are type placeholders
//! such as `"string"` or `"uri (string)"`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::registry::ConfigurationError;
use crate::registry::FieldPath;
use crate::registry::FieldSpec;
use crate::registry::PathSegment;
use crate::registry::ServiceId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Usage hint rendered alongside templates.
const USAGE: &str = "payload = <service payload, e.g. MdfPayload>::new(&record)?.metapayload()";

// ============================================================================
// SECTION: Template
// ============================================================================

/// Required and optional field description for a service selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadTemplate {
    /// Selected services in registry order.
    services: Vec<ServiceId>,
    /// Union of required fields.
    required: Vec<FieldSpec>,
    /// Union of optional fields not already required.
    optional: Vec<FieldSpec>,
}

impl PayloadTemplate {
    /// Builds the template for a service selection.
    ///
    /// An empty selection means every registered service.
    #[must_use]
    pub fn for_services(services: &[ServiceId]) -> Self {
        let services = ServiceId::normalize(services);
        let mut required: Vec<FieldSpec> = Vec::new();
        for service in &services {
            push_unique(&mut required, service.descriptor().required);
        }
        let mut optional: Vec<FieldSpec> = Vec::new();
        for service in &services {
            for spec in service.descriptor().optional {
                if !contains_path(&required, spec.path) {
                    push_unique(&mut optional, std::slice::from_ref(spec));
                }
            }
        }
        Self {
            services,
            required,
            optional,
        }
    }

    /// Returns the selected services.
    #[must_use]
    pub fn services(&self) -> &[ServiceId] {
        &self.services
    }

    /// Returns the required fields with their value kinds.
    #[must_use]
    pub fn required_specs(&self) -> &[FieldSpec] {
        &self.required
    }

    /// Returns the optional fields with their value kinds.
    #[must_use]
    pub fn optional_specs(&self) -> &[FieldSpec] {
        &self.optional
    }

    /// Returns the required field paths in registry order.
    #[must_use]
    pub fn required_paths(&self) -> Vec<FieldPath> {
        self.required.iter().map(|spec| spec.path).collect()
    }

    /// Returns the optional field paths in registry order.
    #[must_use]
    pub fn optional_paths(&self) -> Vec<FieldPath> {
        self.optional.iter().map(|spec| spec.path).collect()
    }

    /// Renders the required fields as a nested example tree.
    #[must_use]
    pub fn required_fields(&self) -> Value {
        render_tree(&self.required)
    }

    /// Renders the optional fields as a nested example tree.
    #[must_use]
    pub fn optional_fields(&self) -> Value {
        render_tree(&self.optional)
    }

    /// Returns a short usage hint for the template.
    #[must_use]
    pub const fn usage(&self) -> &'static str {
        USAGE
    }

    /// Renders `{required_fields, optional_fields}` as JSON.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "required_fields": self.required_fields(),
            "optional_fields": self.optional_fields(),
        })
    }
}

/// Returns the common payload template for the named services.
///
/// An empty list selects every registered service.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownService`] when a name is not
/// registered.
pub fn get_common_payload_template<S: AsRef<str>>(
    services: &[S],
) -> Result<PayloadTemplate, ConfigurationError> {
    let services = ServiceId::resolve(services)?;
    Ok(PayloadTemplate::for_services(&services))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when `specs` already lists `path`.
fn contains_path(specs: &[FieldSpec], path: FieldPath) -> bool {
    specs.iter().any(|spec| spec.path == path)
}

/// Appends each spec whose path is not yet present.
fn push_unique(target: &mut Vec<FieldSpec>, specs: &[FieldSpec]) {
    for spec in specs {
        if !contains_path(target, spec.path) {
            target.push(*spec);
        }
    }
}

/// Renders field specs as a nested example object.
fn render_tree(specs: &[FieldSpec]) -> Value {
    let mut root = Map::new();
    for spec in specs {
        insert_placeholder(&mut root, spec.path.segments(), spec);
    }
    Value::Object(root)
}

/// Inserts one placeholder, creating intermediate objects and one-element lists.
fn insert_placeholder(node: &mut Map<String, Value>, segments: &[PathSegment], spec: &FieldSpec) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        node.insert(segment.name().to_string(), spec.kind.placeholder());
        return;
    }
    if segment.is_sequence() {
        let entry = node
            .entry(segment.name())
            .or_insert_with(|| Value::Array(vec![Value::Object(Map::new())]));
        if let Value::Array(items) = entry
            && let Some(Value::Object(child)) = items.first_mut()
        {
            insert_placeholder(child, rest, spec);
        }
    } else {
        let entry = node.entry(segment.name()).or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(child) = entry {
            insert_placeholder(child, rest, spec);
        }
    }
}
