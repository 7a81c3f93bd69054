// crates/matmeta-core/src/record.rs
// ============================================================================
// Module: Common Input Record
// Description: Service-independent metadata record supplied by callers.
// Purpose: Enumerate every recognized input field in one typed structure.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The common input record is the single normalized description of a dataset
//! that every payload mapper reads from. Every field is optional at the type
//! level so that omissions are reported by the validator with a field path
//! instead of surfacing as deserialization failures. Unknown fields are
//! rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Record Types
// ============================================================================

/// Common metadata record shared across all target services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommonInputRecord {
    /// Dataset title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Dataset source (producer, name, tags).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// People to contact about the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_contacts: Option<Vec<Contact>>,
    /// People who contributed data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_contributors: Option<Vec<Contact>>,
    /// Dataset links (landing page, publications, DOIs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    /// Dataset authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Contact>>,
    /// Licenses covering the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<License>>,
    /// Structured citations for the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    /// Repository name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Free-form dataset tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Dataset description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw data reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Material composition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
}

impl CommonInputRecord {
    /// Returns the JSON view of the record used for path validation.
    ///
    /// Absent fields are omitted rather than rendered as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the record cannot be serialized.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns the source name when present.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|source| source.name.as_deref())
    }
}

/// Dataset source description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Source {
    /// Short source name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Organization or person producing the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    /// Source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Source tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A person referenced by the record (contact, contributor, or author).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Given (first) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// Family (last) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Honorific or academic title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ORCID identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Affiliated institution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Contact {
    /// Creates a contact with a given name, family name, and email.
    #[must_use]
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            given_name: Some(given_name.into()),
            family_name: Some(family_name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }
}

/// Dataset links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    /// Landing page URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,
    /// Related publication URIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<Vec<String>>,
    /// Data DOI URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_doi: Option<String>,
    /// Related dataset identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<Vec<String>>,
    /// Parent dataset identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// License entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct License {
    /// License name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// License description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// License URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// License tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Structured citation for a journal article or book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Citation {
    /// Cited authors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<Contact>>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Article or book title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Journal title; absent for books.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    /// Journal volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Journal issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    /// Page range or article location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_location: Option<String>,
    /// Book edition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Place of publication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_location: Option<String>,
    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Extent (page count) of a book.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    /// Additional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
