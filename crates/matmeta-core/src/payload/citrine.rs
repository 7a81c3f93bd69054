// crates/matmeta-core/src/payload/citrine.rs
// ============================================================================
// Module: Citrine Payload
// Description: Common record to Citrine PIF system projection.
// Purpose: Build the `System` document posted to Citrine.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Citrine receives a PIF `System` with people in `contacts`: any authors
//! first (tagged `author`), then data contacts (tagged `contact`), then data
//! contributors (tagged `contributor`), each group in input order.
//!
//! The `source` block carries producer, URL, and tags but never the source
//! name; Citrine's `Source` has no name field for it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::PayloadError;
use super::encode;
use super::ensure_valid;
use crate::record::Citation;
use crate::record::CommonInputRecord;
use crate::record::Contact;
use crate::record::License;
use crate::registry::ServiceId;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Default PIF category for Citrine systems.
const DEFAULT_CATEGORY: &str = "system";

/// Citrine mapper defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitrineOptions {
    /// PIF category stamped on every system.
    #[serde(default = "default_category")]
    pub category: String,
}

impl Default for CitrineOptions {
    fn default() -> Self {
        Self {
            category: default_category(),
        }
    }
}

/// Default value for [`CitrineOptions::category`].
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

// ============================================================================
// SECTION: Payload
// ============================================================================

/// Citrine payload built from a common record.
#[derive(Debug, Clone, PartialEq)]
pub struct CitrinePayload {
    /// Finished PIF system tree.
    metapayload: Value,
}

impl CitrinePayload {
    /// Builds the payload with default options.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails Citrine validation.
    pub fn new(record: &CommonInputRecord) -> Result<Self, PayloadError> {
        Self::with_options(record, &CitrineOptions::default())
    }

    /// Builds the payload with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails Citrine validation.
    pub fn with_options(
        record: &CommonInputRecord,
        options: &CitrineOptions,
    ) -> Result<Self, PayloadError> {
        ensure_valid(record, ServiceId::Citrine)?;

        let mut contacts = Vec::new();
        push_people(&mut contacts, record.authors.as_deref(), &["author"]);
        push_people(&mut contacts, record.data_contacts.as_deref(), &["contact"]);
        push_people(&mut contacts, record.data_contributors.as_deref(), &["contributor"]);

        let source = record.source.as_ref();
        let system = PifSystem {
            category: &options.category,
            source: PifSource {
                producer: source.and_then(|source| source.producer.as_deref()),
                url: source.and_then(|source| source.url.as_deref()),
                tags: source.and_then(|source| source.tags.as_deref()).unwrap_or_default(),
            },
            contacts,
            licenses: record.licenses.iter().flatten().map(PifLicense::from).collect(),
            references: record.citations.iter().flatten().map(PifReference::from).collect(),
        };
        Ok(Self {
            metapayload: encode(&system)?,
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

/// Appends every person in `people` with the given tags.
fn push_people<'a>(
    out: &mut Vec<PifPerson<'a>>,
    people: Option<&'a [Contact]>,
    tags: &'static [&'static str],
) {
    for person in people.unwrap_or_default() {
        out.push(PifPerson {
            name: PifName::from(person),
            email: person.email.as_deref(),
            orcid: person.orcid.as_deref(),
            tags,
        });
    }
}

// ============================================================================
// SECTION: PIF Shapes
// ============================================================================

/// PIF `System` document.
#[derive(Serialize)]
struct PifSystem<'a> {
    /// PIF category.
    category: &'a str,
    /// Data source.
    source: PifSource<'a>,
    /// People associated with the system.
    contacts: Vec<PifPerson<'a>>,
    /// Licenses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<PifLicense<'a>>,
    /// References built from citations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    references: Vec<PifReference<'a>>,
}

/// PIF `Source`.
#[derive(Serialize)]
struct PifSource<'a> {
    /// Producer.
    #[serde(skip_serializing_if = "Option::is_none")]
    producer: Option<&'a str>,
    /// URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    /// Tags, empty when none supplied.
    tags: &'a [String],
}

/// PIF `Person`.
#[derive(Serialize)]
struct PifPerson<'a> {
    /// Structured name.
    name: PifName<'a>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    /// ORCID identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    orcid: Option<&'a str>,
    /// Role tags.
    tags: &'static [&'static str],
}

/// PIF `Name`.
#[derive(Serialize)]
struct PifName<'a> {
    /// Title, empty when absent.
    title: &'a str,
    /// Given name.
    given: &'a str,
    /// Family name.
    family: &'a str,
}

impl<'a> From<&'a Contact> for PifName<'a> {
    fn from(person: &'a Contact) -> Self {
        Self {
            title: person.title.as_deref().unwrap_or_default(),
            given: person.given_name.as_deref().unwrap_or_default(),
            family: person.family_name.as_deref().unwrap_or_default(),
        }
    }
}

/// PIF `License`.
#[derive(Serialize)]
struct PifLicense<'a> {
    /// License name.
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    /// License description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    /// License URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    /// License tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
}

impl<'a> From<&'a License> for PifLicense<'a> {
    fn from(license: &'a License) -> Self {
        Self {
            name: license.name.as_deref(),
            description: license.description.as_deref(),
            url: license.url.as_deref(),
            tags: license.tags.as_deref(),
        }
    }
}

/// PIF `Reference`.
#[derive(Serialize)]
struct PifReference<'a> {
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    /// Year.
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<&'a str>,
    /// Journal.
    #[serde(skip_serializing_if = "Option::is_none")]
    journal: Option<&'a str>,
    /// Volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<&'a str>,
    /// Issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<&'a str>,
    /// Publisher.
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<&'a str>,
    /// Pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<&'a str>,
    /// Author names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<PifName<'a>>,
}

impl<'a> From<&'a Citation> for PifReference<'a> {
    fn from(citation: &'a Citation) -> Self {
        Self {
            title: citation.title.as_deref(),
            year: citation.year.as_deref(),
            journal: citation.journal.as_deref(),
            volume: citation.volume.as_deref(),
            issue: citation.issue.as_deref(),
            publisher: citation.publisher.as_deref(),
            pages: citation.page_location.as_deref(),
            authors: citation.authors.iter().flatten().map(PifName::from).collect(),
        }
    }
}
