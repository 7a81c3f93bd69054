// crates/matmeta-core/src/payload/mod.rs
// ============================================================================
// Module: Payload Mappers
// Description: Service payload construction from the common record.
// Purpose: Validate once, then transform per service by tagged dispatch.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Every mapper follows the same flow: validate the record against the
//! service's required paths, then project it into the service's wire shape.
//! Mappers are all-or-nothing; a rejected record never yields a payload.
//!
//! [`PayloadBuilder`] dispatches on [`ServiceId`] and reports each build to a
//! [`PayloadAuditSink`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

mod citrine;
mod materials_commons;
mod mdf;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use self::citrine::CitrineOptions;
pub use self::citrine::CitrinePayload;
pub use self::materials_commons::McPayload;
pub use self::mdf::MdfOptions;
pub use self::mdf::MdfPayload;
pub use self::mdf::PUBLIC_ACL;
use crate::audit::NoopPayloadAuditSink;
use crate::audit::PayloadAuditEvent;
use crate::audit::PayloadAuditSink;
use crate::record::CommonInputRecord;
use crate::registry::ServiceId;
use crate::validation::ValidationError;
use crate::validation::validate;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building a service payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The record failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The record or payload could not be encoded as JSON.
    #[error("payload encoding error: {0}")]
    Encode(String),
}

impl PayloadError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Encode(_) => "encode",
        }
    }

    /// Returns the failing field path for validation errors.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Validation(error) => Some(error.path()),
            Self::Encode(_) => None,
        }
    }
}

// ============================================================================
// SECTION: Shared Flow
// ============================================================================

/// Validates `record` against the required paths registered for `service`.
pub(crate) fn ensure_valid(
    record: &CommonInputRecord,
    service: ServiceId,
) -> Result<(), PayloadError> {
    let view = record.to_value().map_err(|err| PayloadError::Encode(err.to_string()))?;
    validate(&view, service.descriptor().required_paths())?;
    Ok(())
}

/// Encodes a typed payload shape as a JSON tree.
pub(crate) fn encode<T: Serialize>(payload: &T) -> Result<Value, PayloadError> {
    serde_json::to_value(payload).map_err(|err| PayloadError::Encode(err.to_string()))
}

// ============================================================================
// SECTION: Service Payloads
// ============================================================================

/// A built payload for one service.
#[derive(Debug, Clone, PartialEq)]
pub enum ServicePayload {
    /// Citrine payload.
    Citrine(CitrinePayload),
    /// Materials Data Facility payload.
    MaterialsDataFacility(MdfPayload),
    /// Materials Commons payload.
    MaterialsCommons(McPayload),
}

impl ServicePayload {
    /// Returns the service the payload targets.
    #[must_use]
    pub const fn service(&self) -> ServiceId {
        match self {
            Self::Citrine(_) => ServiceId::Citrine,
            Self::MaterialsDataFacility(_) => ServiceId::MaterialsDataFacility,
            Self::MaterialsCommons(_) => ServiceId::MaterialsCommons,
        }
    }

    /// Returns the payload JSON tree.
    #[must_use]
    pub const fn metapayload(&self) -> &Value {
        match self {
            Self::Citrine(payload) => payload.metapayload(),
            Self::MaterialsDataFacility(payload) => payload.metapayload(),
            Self::MaterialsCommons(payload) => payload.metapayload(),
        }
    }

    /// Consumes the payload and returns its JSON tree.
    #[must_use]
    pub fn into_metapayload(self) -> Value {
        match self {
            Self::Citrine(payload) => payload.into_metapayload(),
            Self::MaterialsDataFacility(payload) => payload.into_metapayload(),
            Self::MaterialsCommons(payload) => payload.into_metapayload(),
        }
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Per-service mapper defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadOptions {
    /// Citrine mapper defaults.
    #[serde(default)]
    pub citrine: CitrineOptions,
    /// Materials Data Facility mapper defaults.
    #[serde(default)]
    pub materials_data_facility: MdfOptions,
}

/// Builds service payloads by identifier and audits every build.
#[derive(Clone)]
pub struct PayloadBuilder {
    /// Mapper defaults.
    options: PayloadOptions,
    /// Audit sink for build events.
    audit: Arc<dyn PayloadAuditSink>,
}

impl PayloadBuilder {
    /// Creates a builder with the given options and a no-op audit sink.
    #[must_use]
    pub fn new(options: PayloadOptions) -> Self {
        Self {
            options,
            audit: Arc::new(NoopPayloadAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn PayloadAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the mapper defaults.
    #[must_use]
    pub const fn options(&self) -> &PayloadOptions {
        &self.options
    }

    /// Builds the payload for `service`.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the record fails validation for the
    /// service or cannot be encoded.
    pub fn build(
        &self,
        service: ServiceId,
        record: &CommonInputRecord,
    ) -> Result<ServicePayload, PayloadError> {
        let result = match service {
            ServiceId::Citrine => {
                CitrinePayload::with_options(record, &self.options.citrine)
                    .map(ServicePayload::Citrine)
            }
            ServiceId::MaterialsDataFacility => {
                MdfPayload::with_options(record, &self.options.materials_data_facility)
                    .map(ServicePayload::MaterialsDataFacility)
            }
            ServiceId::MaterialsCommons => {
                McPayload::new(record).map(ServicePayload::MaterialsCommons)
            }
        };
        let event = match &result {
            Ok(payload) => PayloadAuditEvent::built(
                service,
                serde_json::to_vec(payload.metapayload()).map_or(0, |bytes| bytes.len()),
            ),
            Err(error) => PayloadAuditEvent::rejected(
                service,
                error.kind(),
                error.path().map(str::to_string),
            ),
        };
        self.audit.record(&event);
        result
    }

    /// Builds payloads for every registered service in registry order.
    ///
    /// # Errors
    ///
    /// Returns the first [`PayloadError`] encountered.
    pub fn build_all(&self, record: &CommonInputRecord) -> Result<Vec<ServicePayload>, PayloadError> {
        ServiceId::ALL.into_iter().map(|service| self.build(service, record)).collect()
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new(PayloadOptions::default())
    }
}
