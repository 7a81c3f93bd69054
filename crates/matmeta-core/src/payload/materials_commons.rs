// crates/matmeta-core/src/payload/materials_commons.rs
// ============================================================================
// Module: Materials Commons Payload
// Description: Common record to Materials Commons projection.
// Purpose: Build the minimal `{name, description}` document.
// Dependencies: serde, serde_json
// ============================================================================

use serde::Serialize;
use serde_json::Value;

use super::PayloadError;
use super::encode;
use super::ensure_valid;
use crate::record::CommonInputRecord;
use crate::registry::ServiceId;

/// Materials Commons payload built from a common record.
#[derive(Debug, Clone, PartialEq)]
pub struct McPayload {
    /// Finished document tree.
    metapayload: Value,
}

impl McPayload {
    /// Builds the payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails Materials Commons
    /// validation.
    pub fn new(record: &CommonInputRecord) -> Result<Self, PayloadError> {
        ensure_valid(record, ServiceId::MaterialsCommons)?;
        let document = McDocument {
            name: record.source_name().unwrap_or_default(),
            description: record.description.as_deref().unwrap_or_default(),
        };
        Ok(Self {
            metapayload: encode(&document)?,
        })
    }

    /// Returns the payload JSON tree.
    #[must_use]
    pub const fn metapayload(&self) -> &Value {
        &self.metapayload
    }

    /// Consumes the payload and returns its JSON tree.
    #[must_use]
    pub fn into_metapayload(self) -> Value {
        self.metapayload
    }
}

/// Materials Commons document.
#[derive(Serialize)]
struct McDocument<'a> {
    /// Project name (the record's source name).
    name: &'a str,
    /// Project description.
    description: &'a str,
}
