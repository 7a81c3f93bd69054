// crates/matmeta-core/src/registry.rs
// ============================================================================
// Module: Schema Registry
// Description: Static required/optional field tables for each target service.
// Purpose: Single source of truth for templates and validation.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Each supported service has one [`SchemaDescriptor`] listing the field paths
//! its mapper requires and the optional paths it reads. The tables are plain
//! constant data: the template generator renders them and the validator
//! enforces them, so both always agree.
//!
//! Adding a service means adding a [`ServiceId`] variant, one descriptor, and
//! one mapper.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when a service selection cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The requested service identifier is not registered.
    #[error("unknown service: {0}")]
    UnknownService(String),
}

// ============================================================================
// SECTION: Service Identifiers
// ============================================================================

/// Target materials-data service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceId {
    /// Citrine PIF system records.
    Citrine,
    /// Materials Data Facility datasets.
    MaterialsDataFacility,
    /// Materials Commons projects.
    MaterialsCommons,
}

impl ServiceId {
    /// Every registered service, in registry order.
    pub const ALL: [Self; 3] = [Self::Citrine, Self::MaterialsDataFacility, Self::MaterialsCommons];

    /// Returns the stable string form of the identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citrine => "citrine",
            Self::MaterialsDataFacility => "materials_data_facility",
            Self::MaterialsCommons => "materials_commons",
        }
    }

    /// Returns the schema descriptor registered for this service.
    #[must_use]
    pub fn descriptor(self) -> &'static SchemaDescriptor {
        match self {
            Self::Citrine => &CITRINE,
            Self::MaterialsDataFacility => &MATERIALS_DATA_FACILITY,
            Self::MaterialsCommons => &MATERIALS_COMMONS,
        }
    }

    /// Resolves a list of service names, deduplicated and in registry order.
    ///
    /// An empty list selects every registered service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownService`] for the first name that
    /// is not registered.
    pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Self>, ConfigurationError> {
        if names.is_empty() {
            return Ok(Self::ALL.to_vec());
        }
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            selected.push(name.as_ref().parse::<Self>()?);
        }
        Ok(Self::normalize(&selected))
    }

    /// Deduplicates a service selection and orders it by registry order.
    ///
    /// An empty selection is expanded to every registered service.
    #[must_use]
    pub fn normalize(services: &[Self]) -> Vec<Self> {
        if services.is_empty() {
            return Self::ALL.to_vec();
        }
        Self::ALL.into_iter().filter(|service| services.contains(service)).collect()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == value)
            .ok_or_else(|| ConfigurationError::UnknownService(value.to_string()))
    }
}

// ============================================================================
// SECTION: Field Paths
// ============================================================================

/// One step of a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// Mapping key for this step.
    name: &'static str,
    /// Whether the key holds a sequence whose every element is descended.
    sequence: bool,
}

impl PathSegment {
    /// Creates a plain mapping segment.
    #[must_use]
    pub const fn field(name: &'static str) -> Self {
        Self {
            name,
            sequence: false,
        }
    }

    /// Creates a sequence segment (`name[]`).
    #[must_use]
    pub const fn each(name: &'static str) -> Self {
        Self {
            name,
            sequence: true,
        }
    }

    /// Returns the mapping key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns true when the segment descends into every sequence element.
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        self.sequence
    }
}

/// Nested field location, rendered as `source.name` or `data_contacts[].email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Ordered path segments from the record root.
    segments: &'static [PathSegment],
}

impl FieldPath {
    /// Creates a field path from static segments.
    #[must_use]
    pub const fn new(segments: &'static [PathSegment]) -> Self {
        Self {
            segments,
        }
    }

    /// Returns the path segments.
    #[must_use]
    pub const fn segments(self) -> &'static [PathSegment] {
        self.segments
    }

    /// Returns the top-level record key this path starts from.
    #[must_use]
    pub fn root(self) -> Option<&'static str> {
        self.segments.first().map(|segment| segment.name())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment.name())?;
            if segment.is_sequence() {
                f.write_str("[]")?;
            }
        }
        Ok(())
    }
}

/// Value kind of a leaf field, used for template placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain string.
    String,
    /// URI string.
    Uri,
    /// URL string.
    Url,
    /// Integer.
    Integer,
    /// List of strings.
    StringList,
    /// List of URI strings.
    UriList,
    /// ORCID identifier (format not yet fixed).
    Orcid,
    /// Accepted but not yet consumed by any service.
    Pending,
}

impl FieldKind {
    /// Returns the human-readable placeholder rendered in templates.
    #[must_use]
    pub fn placeholder(self) -> Value {
        match self {
            Self::String => json!("string"),
            Self::Uri => json!("uri (string)"),
            Self::Url => json!("url string"),
            Self::Integer => json!("integer"),
            Self::StringList => json!(["string"]),
            Self::UriList => json!(["uri (string)"]),
            Self::Orcid => json!("TBD"),
            Self::Pending => json!("not yet available"),
        }
    }
}

/// A field path paired with its value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Location of the field.
    pub path: FieldPath,
    /// Value kind of the field.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a field spec from static segments.
    #[must_use]
    pub const fn new(segments: &'static [PathSegment], kind: FieldKind) -> Self {
        Self {
            path: FieldPath::new(segments),
            kind,
        }
    }
}

/// Declarative field requirements for one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    /// Service this descriptor belongs to.
    pub service: ServiceId,
    /// Fields that must be present and non-empty.
    pub required: &'static [FieldSpec],
    /// Fields the mapper reads when present.
    pub optional: &'static [FieldSpec],
}

impl SchemaDescriptor {
    /// Returns the required field paths in declaration order.
    #[must_use]
    pub fn required_paths(&self) -> Vec<FieldPath> {
        self.required.iter().map(|spec| spec.path).collect()
    }

    /// Returns the optional field paths in declaration order.
    #[must_use]
    pub fn optional_paths(&self) -> Vec<FieldPath> {
        self.optional.iter().map(|spec| spec.path).collect()
    }
}

// ============================================================================
// SECTION: Path Tables
// ============================================================================

/// `title`.
static TITLE: [PathSegment; 1] = [PathSegment::field("title")];
/// `description`.
static DESCRIPTION: [PathSegment; 1] = [PathSegment::field("description")];
/// `source.name`.
static SOURCE_NAME: [PathSegment; 2] = [PathSegment::field("source"), PathSegment::field("name")];
/// `source.producer`.
static SOURCE_PRODUCER: [PathSegment; 2] =
    [PathSegment::field("source"), PathSegment::field("producer")];
/// `source.url`.
static SOURCE_URL: [PathSegment; 2] = [PathSegment::field("source"), PathSegment::field("url")];
/// `source.tags`.
static SOURCE_TAGS: [PathSegment; 2] = [PathSegment::field("source"), PathSegment::field("tags")];
/// `links.landing_page`.
static LANDING_PAGE: [PathSegment; 2] =
    [PathSegment::field("links"), PathSegment::field("landing_page")];
/// `links.publication`.
static LINKS_PUBLICATION: [PathSegment; 2] =
    [PathSegment::field("links"), PathSegment::field("publication")];
/// `links.data_doi`.
static LINKS_DATA_DOI: [PathSegment; 2] =
    [PathSegment::field("links"), PathSegment::field("data_doi")];
/// `links.related_id`.
static LINKS_RELATED_ID: [PathSegment; 2] =
    [PathSegment::field("links"), PathSegment::field("related_id")];
/// `links.parent_id`.
static LINKS_PARENT_ID: [PathSegment; 2] =
    [PathSegment::field("links"), PathSegment::field("parent_id")];

/// `data_contacts[].given_name`.
static CONTACT_GIVEN_NAME: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("given_name")];
/// `data_contacts[].family_name`.
static CONTACT_FAMILY_NAME: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("family_name")];
/// `data_contacts[].email`.
static CONTACT_EMAIL: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("email")];
/// `data_contacts[].title`.
static CONTACT_TITLE: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("title")];
/// `data_contacts[].orcid`.
static CONTACT_ORCID: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("orcid")];
/// `data_contacts[].institution`.
static CONTACT_INSTITUTION: [PathSegment; 2] =
    [PathSegment::each("data_contacts"), PathSegment::field("institution")];

/// `data_contributors[].given_name`.
static CONTRIBUTOR_GIVEN_NAME: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("given_name")];
/// `data_contributors[].family_name`.
static CONTRIBUTOR_FAMILY_NAME: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("family_name")];
/// `data_contributors[].email`.
static CONTRIBUTOR_EMAIL: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("email")];
/// `data_contributors[].title`.
static CONTRIBUTOR_TITLE: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("title")];
/// `data_contributors[].orcid`.
static CONTRIBUTOR_ORCID: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("orcid")];
/// `data_contributors[].institution`.
static CONTRIBUTOR_INSTITUTION: [PathSegment; 2] =
    [PathSegment::each("data_contributors"), PathSegment::field("institution")];

/// `authors[].given_name`.
static AUTHOR_GIVEN_NAME: [PathSegment; 2] =
    [PathSegment::each("authors"), PathSegment::field("given_name")];
/// `authors[].family_name`.
static AUTHOR_FAMILY_NAME: [PathSegment; 2] =
    [PathSegment::each("authors"), PathSegment::field("family_name")];
/// `authors[].title`.
static AUTHOR_TITLE: [PathSegment; 2] = [PathSegment::each("authors"), PathSegment::field("title")];
/// `authors[].orcid`.
static AUTHOR_ORCID: [PathSegment; 2] = [PathSegment::each("authors"), PathSegment::field("orcid")];
/// `authors[].email`.
static AUTHOR_EMAIL: [PathSegment; 2] = [PathSegment::each("authors"), PathSegment::field("email")];

/// `licenses[].name`.
static LICENSE_NAME: [PathSegment; 2] = [PathSegment::each("licenses"), PathSegment::field("name")];
/// `licenses[].description`.
static LICENSE_DESCRIPTION: [PathSegment; 2] =
    [PathSegment::each("licenses"), PathSegment::field("description")];
/// `licenses[].url`.
static LICENSE_URL: [PathSegment; 2] = [PathSegment::each("licenses"), PathSegment::field("url")];
/// `licenses[].tags`.
static LICENSE_TAGS: [PathSegment; 2] = [PathSegment::each("licenses"), PathSegment::field("tags")];

/// `citations[].authors[].given_name`.
static CITATION_AUTHOR_GIVEN_NAME: [PathSegment; 3] = [
    PathSegment::each("citations"),
    PathSegment::each("authors"),
    PathSegment::field("given_name"),
];
/// `citations[].authors[].family_name`.
static CITATION_AUTHOR_FAMILY_NAME: [PathSegment; 3] = [
    PathSegment::each("citations"),
    PathSegment::each("authors"),
    PathSegment::field("family_name"),
];
/// `citations[].year`.
static CITATION_YEAR: [PathSegment; 2] = [PathSegment::each("citations"), PathSegment::field("year")];
/// `citations[].title`.
static CITATION_TITLE: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("title")];
/// `citations[].journal`.
static CITATION_JOURNAL: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("journal")];
/// `citations[].volume`.
static CITATION_VOLUME: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("volume")];
/// `citations[].issue`.
static CITATION_ISSUE: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("issue")];
/// `citations[].page_location`.
static CITATION_PAGE_LOCATION: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("page_location")];
/// `citations[].edition`.
static CITATION_EDITION: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("edition")];
/// `citations[].publication_location`.
static CITATION_PUBLICATION_LOCATION: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("publication_location")];
/// `citations[].publisher`.
static CITATION_PUBLISHER: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("publisher")];
/// `citations[].extent`.
static CITATION_EXTENT: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("extent")];
/// `citations[].notes`.
static CITATION_NOTES: [PathSegment; 2] =
    [PathSegment::each("citations"), PathSegment::field("notes")];

/// `repository`.
static REPOSITORY: [PathSegment; 1] = [PathSegment::field("repository")];
/// `collection`.
static COLLECTION: [PathSegment; 1] = [PathSegment::field("collection")];
/// `tags`.
static TAGS: [PathSegment; 1] = [PathSegment::field("tags")];
/// `raw`.
static RAW: [PathSegment; 1] = [PathSegment::field("raw")];
/// `year`.
static YEAR: [PathSegment; 1] = [PathSegment::field("year")];
/// `composition`.
static COMPOSITION: [PathSegment; 1] = [PathSegment::field("composition")];

// ============================================================================
// SECTION: Service Descriptors
// ============================================================================

/// Citrine requires every contact and contributor to be fully named.
static CITRINE_REQUIRED: [FieldSpec; 6] = [
    FieldSpec::new(&CONTACT_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CONTACT_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CONTACT_EMAIL, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_EMAIL, FieldKind::String),
];

/// Optional fields read by the Citrine mapper.
static CITRINE_OPTIONAL: [FieldSpec; 25] = [
    FieldSpec::new(&SOURCE_PRODUCER, FieldKind::String),
    FieldSpec::new(&SOURCE_URL, FieldKind::Url),
    FieldSpec::new(&SOURCE_TAGS, FieldKind::StringList),
    FieldSpec::new(&CONTACT_TITLE, FieldKind::String),
    FieldSpec::new(&CONTACT_ORCID, FieldKind::Orcid),
    FieldSpec::new(&CONTRIBUTOR_TITLE, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_ORCID, FieldKind::Orcid),
    FieldSpec::new(&AUTHOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&AUTHOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&AUTHOR_TITLE, FieldKind::String),
    FieldSpec::new(&AUTHOR_ORCID, FieldKind::Orcid),
    FieldSpec::new(&AUTHOR_EMAIL, FieldKind::String),
    FieldSpec::new(&LICENSE_NAME, FieldKind::String),
    FieldSpec::new(&LICENSE_DESCRIPTION, FieldKind::String),
    FieldSpec::new(&LICENSE_URL, FieldKind::Url),
    FieldSpec::new(&LICENSE_TAGS, FieldKind::StringList),
    FieldSpec::new(&CITATION_AUTHOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CITATION_AUTHOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CITATION_YEAR, FieldKind::String),
    FieldSpec::new(&CITATION_TITLE, FieldKind::String),
    FieldSpec::new(&CITATION_JOURNAL, FieldKind::String),
    FieldSpec::new(&CITATION_VOLUME, FieldKind::String),
    FieldSpec::new(&CITATION_ISSUE, FieldKind::String),
    FieldSpec::new(&CITATION_PAGE_LOCATION, FieldKind::String),
    FieldSpec::new(&CITATION_PUBLISHER, FieldKind::String),
];

/// Materials Data Facility requires the full minimal record.
static MDF_REQUIRED: [FieldSpec; 10] = [
    FieldSpec::new(&TITLE, FieldKind::String),
    FieldSpec::new(&SOURCE_NAME, FieldKind::String),
    FieldSpec::new(&CONTACT_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CONTACT_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CONTACT_EMAIL, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_EMAIL, FieldKind::String),
    FieldSpec::new(&LANDING_PAGE, FieldKind::Uri),
    FieldSpec::new(&DESCRIPTION, FieldKind::String),
];

/// Optional fields copied into the MDF block when present.
static MDF_OPTIONAL: [FieldSpec; 38] = [
    FieldSpec::new(&CONTACT_TITLE, FieldKind::String),
    FieldSpec::new(&CONTACT_ORCID, FieldKind::Orcid),
    FieldSpec::new(&CONTACT_INSTITUTION, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_TITLE, FieldKind::String),
    FieldSpec::new(&CONTRIBUTOR_ORCID, FieldKind::Orcid),
    FieldSpec::new(&CONTRIBUTOR_INSTITUTION, FieldKind::String),
    FieldSpec::new(&LINKS_PUBLICATION, FieldKind::UriList),
    FieldSpec::new(&LINKS_DATA_DOI, FieldKind::Uri),
    FieldSpec::new(&LINKS_RELATED_ID, FieldKind::StringList),
    FieldSpec::new(&LINKS_PARENT_ID, FieldKind::String),
    FieldSpec::new(&AUTHOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&AUTHOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&AUTHOR_TITLE, FieldKind::String),
    FieldSpec::new(&AUTHOR_ORCID, FieldKind::Orcid),
    FieldSpec::new(&AUTHOR_EMAIL, FieldKind::String),
    FieldSpec::new(&LICENSE_NAME, FieldKind::String),
    FieldSpec::new(&LICENSE_DESCRIPTION, FieldKind::String),
    FieldSpec::new(&LICENSE_URL, FieldKind::Url),
    FieldSpec::new(&LICENSE_TAGS, FieldKind::StringList),
    FieldSpec::new(&CITATION_AUTHOR_GIVEN_NAME, FieldKind::String),
    FieldSpec::new(&CITATION_AUTHOR_FAMILY_NAME, FieldKind::String),
    FieldSpec::new(&CITATION_YEAR, FieldKind::String),
    FieldSpec::new(&CITATION_TITLE, FieldKind::String),
    FieldSpec::new(&CITATION_JOURNAL, FieldKind::String),
    FieldSpec::new(&CITATION_VOLUME, FieldKind::String),
    FieldSpec::new(&CITATION_ISSUE, FieldKind::String),
    FieldSpec::new(&CITATION_PAGE_LOCATION, FieldKind::String),
    FieldSpec::new(&CITATION_EDITION, FieldKind::String),
    FieldSpec::new(&CITATION_PUBLICATION_LOCATION, FieldKind::String),
    FieldSpec::new(&CITATION_PUBLISHER, FieldKind::String),
    FieldSpec::new(&CITATION_EXTENT, FieldKind::String),
    FieldSpec::new(&CITATION_NOTES, FieldKind::String),
    FieldSpec::new(&REPOSITORY, FieldKind::Pending),
    FieldSpec::new(&COLLECTION, FieldKind::Pending),
    FieldSpec::new(&TAGS, FieldKind::StringList),
    FieldSpec::new(&RAW, FieldKind::Pending),
    FieldSpec::new(&YEAR, FieldKind::Integer),
    FieldSpec::new(&COMPOSITION, FieldKind::Pending),
];

/// Materials Commons only needs a name and a description.
static MC_REQUIRED: [FieldSpec; 2] = [
    FieldSpec::new(&SOURCE_NAME, FieldKind::String),
    FieldSpec::new(&DESCRIPTION, FieldKind::String),
];

/// Citrine descriptor.
static CITRINE: SchemaDescriptor = SchemaDescriptor {
    service: ServiceId::Citrine,
    required: &CITRINE_REQUIRED,
    optional: &CITRINE_OPTIONAL,
};

/// Materials Data Facility descriptor.
static MATERIALS_DATA_FACILITY: SchemaDescriptor = SchemaDescriptor {
    service: ServiceId::MaterialsDataFacility,
    required: &MDF_REQUIRED,
    optional: &MDF_OPTIONAL,
};

/// Materials Commons descriptor.
static MATERIALS_COMMONS: SchemaDescriptor = SchemaDescriptor {
    service: ServiceId::MaterialsCommons,
    required: &MC_REQUIRED,
    optional: &[],
};

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::ServiceId;

    #[test]
    fn paths_render_with_sequence_markers() {
        let rendered: Vec<String> = ServiceId::MaterialsDataFacility
            .descriptor()
            .required_paths()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(rendered.contains(&"source.name".to_string()));
        assert!(rendered.contains(&"data_contacts[].given_name".to_string()));
        assert!(rendered.contains(&"links.landing_page".to_string()));
    }

    #[test]
    fn descriptors_match_their_service() {
        for service in ServiceId::ALL {
            assert_eq!(service.descriptor().service, service);
        }
    }

    #[test]
    fn optional_paths_never_repeat_required_paths() {
        for service in ServiceId::ALL {
            let descriptor = service.descriptor();
            for path in descriptor.optional_paths() {
                assert!(!descriptor.required_paths().contains(&path), "{service}: {path}");
            }
        }
    }
}
