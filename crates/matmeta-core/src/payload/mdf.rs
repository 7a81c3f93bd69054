// crates/matmeta-core/src/payload/mdf.rs
// ============================================================================
// Module: Materials Data Facility Payload
// Description: Common record to MDF dataset projection.
// Purpose: Build the `{mdf, dc}` dataset document for MDF ingest.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! MDF datasets nest the record under `mdf` with singular list names
//! (`data_contact`, `data_contributor`) and the source name flattened to
//! `source_name`. Optional record fields are copied through under their own
//! names, except `citations`, which become formatted strings in `citation`.
//! `dc` is reserved for DataCite fields and is always empty.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::PayloadError;
use super::encode;
use super::ensure_valid;
use crate::citation::format_citation;
use crate::record::CommonInputRecord;
use crate::record::Contact;
use crate::record::License;
use crate::record::Links;
use crate::registry::ServiceId;

// ============================================================================
// SECTION: Options
// ============================================================================

/// ACL entry granting public access.
pub const PUBLIC_ACL: &str = "public";

/// Materials Data Facility mapper defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdfOptions {
    /// Access control list: `public` or Globus Auth identity UUIDs.
    #[serde(default = "default_acl")]
    pub acl: Vec<String>,
}

impl Default for MdfOptions {
    fn default() -> Self {
        Self {
            acl: default_acl(),
        }
    }
}

/// Default value for [`MdfOptions::acl`].
fn default_acl() -> Vec<String> {
    vec![PUBLIC_ACL.to_string()]
}

// ============================================================================
// SECTION: Payload
// ============================================================================

/// Materials Data Facility payload built from a common record.
#[derive(Debug, Clone, PartialEq)]
pub struct MdfPayload {
    /// Finished dataset tree.
    metapayload: Value,
}

impl MdfPayload {
    /// Builds the payload with default options.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails MDF validation.
    pub fn new(record: &CommonInputRecord) -> Result<Self, PayloadError> {
        Self::with_options(record, &MdfOptions::default())
    }

    /// Builds the payload with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails MDF validation.
    pub fn with_options(
        record: &CommonInputRecord,
        options: &MdfOptions,
    ) -> Result<Self, PayloadError> {
        ensure_valid(record, ServiceId::MaterialsDataFacility)?;

        // Required fields are present past validation.
        let block = MdfBlock {
            title: record.title.as_deref().unwrap_or_default(),
            acl: &options.acl,
            source_name: record.source_name().unwrap_or_default(),
            links: record.links.as_ref(),
            data_contact: record.data_contacts.as_deref().unwrap_or_default(),
            data_contributor: record.data_contributors.as_deref().unwrap_or_default(),
            description: record.description.as_deref().unwrap_or_default(),
            authors: record.authors.as_deref(),
            licenses: record.licenses.as_deref(),
            repository: record.repository.as_deref(),
            collection: record.collection.as_deref(),
            tags: record.tags.as_deref(),
            raw: record.raw.as_deref(),
            year: record.year,
            composition: record.composition.as_deref(),
            citation: record
                .citations
                .as_ref()
                .map(|citations| citations.iter().map(format_citation).collect()),
        };
        let dataset = MdfDataset {
            mdf: block,
            dc: Map::new(),
        };
        Ok(Self {
            metapayload: encode(&dataset)?,
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

// ============================================================================
// SECTION: MDF Shapes
// ============================================================================

/// Top-level MDF dataset document.
#[derive(Serialize)]
struct MdfDataset<'a> {
    /// MDF block.
    mdf: MdfBlock<'a>,
    /// DataCite block (reserved, empty).
    dc: Map<String, Value>,
}

/// The `mdf` block.
#[derive(Serialize)]
struct MdfBlock<'a> {
    /// Dataset title.
    title: &'a str,
    /// Access control list.
    acl: &'a [String],
    /// Source name.
    source_name: &'a str,
    /// Dataset links.
    links: Option<&'a Links>,
    /// Data contacts, 1:1.
    data_contact: &'a [Contact],
    /// Data contributors, 1:1.
    data_contributor: &'a [Contact],
    /// Dataset description.
    description: &'a str,
    /// Authors.
    #[serde(skip_serializing_if = "Option::is_none")]
    authors: Option<&'a [Contact]>,
    /// Licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<&'a [License]>,
    /// Repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<&'a str>,
    /// Collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    collection: Option<&'a str>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    /// Raw data reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
    /// Year.
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i64>,
    /// Composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    composition: Option<&'a str>,
    /// Formatted citations.
    #[serde(skip_serializing_if = "Option::is_none")]
    citation: Option<Vec<String>>,
}
