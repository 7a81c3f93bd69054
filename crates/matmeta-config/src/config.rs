// crates/matmeta-config/src/config.rs
// ============================================================================
// Module: Matmeta Configuration
// Description: Configuration loading and validation for payload building.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: matmeta-core, serde, toml, uuid
// ============================================================================

//! ## Overview
//! `matmeta.toml` carries the per-service mapper defaults (Citrine category,
//! MDF access control list) and audit settings. Configuration is loaded from
//! an explicit path with strict size and path limits; every section is
//! validated and invalid input fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::sync::Arc;

use matmeta_core::CitrineOptions;
use matmeta_core::FilePayloadAuditSink;
use matmeta_core::MdfOptions;
use matmeta_core::NoopPayloadAuditSink;
use matmeta_core::PUBLIC_ACL;
use matmeta_core::PayloadAuditSink;
use matmeta_core::PayloadBuilder;
use matmeta_core::PayloadOptions;
use matmeta_core::StderrPayloadAuditSink;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use uuid::fmt::Hyphenated;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the Citrine category.
pub(crate) const MAX_CATEGORY_LENGTH: usize = 128;
/// Maximum number of MDF ACL entries.
pub(crate) const MAX_ACL_ENTRIES: usize = 64;

// ============================================================================
// SECTION: Config Root
// ============================================================================

/// Root `matmeta.toml` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatmetaConfig {
    /// Citrine mapper defaults.
    #[serde(default)]
    pub citrine: CitrineConfig,
    /// Materials Data Facility mapper defaults.
    #[serde(default)]
    pub materials_data_facility: MdfConfig,
    /// Payload build audit settings.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl MatmetaConfig {
    /// Loads and validates configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds limits,
    /// fails to parse, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_bounded(path, MAX_CONFIG_FILE_SIZE, "config")?;
        let mut config: Self =
            toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// Trims the Citrine category in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.citrine.validate()?;
        self.materials_data_facility.validate()?;
        self.audit.validate()?;
        Ok(())
    }

    /// Returns the mapper defaults described by this configuration.
    #[must_use]
    pub fn payload_options(&self) -> PayloadOptions {
        PayloadOptions {
            citrine: CitrineOptions {
                category: self.citrine.category.clone(),
            },
            materials_data_facility: MdfOptions {
                acl: self.materials_data_facility.acl.clone(),
            },
        }
    }

    /// Builds the audit sink selected by the `[audit]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit log cannot be opened.
    pub fn audit_sink(&self) -> Result<Arc<dyn PayloadAuditSink>, ConfigError> {
        if !self.audit.enabled {
            return Ok(Arc::new(NoopPayloadAuditSink));
        }
        match &self.audit.path {
            Some(path) => {
                let sink = FilePayloadAuditSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
            None => Ok(Arc::new(StderrPayloadAuditSink)),
        }
    }

    /// Builds a payload builder with these defaults and audit settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit log cannot be opened.
    pub fn payload_builder(&self) -> Result<PayloadBuilder, ConfigError> {
        Ok(PayloadBuilder::new(self.payload_options()).with_audit(self.audit_sink()?))
    }
}

// ============================================================================
// SECTION: Citrine
// ============================================================================

/// Citrine mapper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CitrineConfig {
    /// PIF category stamped on every system.
    #[serde(default = "default_citrine_category")]
    pub category: String,
}

impl Default for CitrineConfig {
    fn default() -> Self {
        Self {
            category: default_citrine_category(),
        }
    }
}

impl CitrineConfig {
    /// Validates and normalizes the category.
    fn validate(&mut self) -> Result<(), ConfigError> {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid("citrine.category must be non-empty".to_string()));
        }
        if trimmed.len() > MAX_CATEGORY_LENGTH {
            return Err(ConfigError::Invalid("citrine.category exceeds max length".to_string()));
        }
        if !trimmed.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
        {
            return Err(ConfigError::Invalid(
                "citrine.category must contain only ascii letters, digits, '.', '_' or '-'"
                    .to_string(),
            ));
        }
        self.category = trimmed.to_string();
        Ok(())
    }
}

/// Default value for [`CitrineConfig::category`].
pub(crate) fn default_citrine_category() -> String {
    CitrineOptions::default().category
}

// ============================================================================
// SECTION: Materials Data Facility
// ============================================================================

/// Materials Data Facility mapper configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MdfConfig {
    /// Access control list: `public` or Globus Auth identity UUIDs.
    #[serde(default = "default_mdf_acl")]
    pub acl: Vec<String>,
}

impl Default for MdfConfig {
    fn default() -> Self {
        Self {
            acl: default_mdf_acl(),
        }
    }
}

impl MdfConfig {
    /// Validates ACL entries.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.acl.is_empty() {
            return Err(ConfigError::Invalid(
                "materials_data_facility.acl must be non-empty".to_string(),
            ));
        }
        if self.acl.len() > MAX_ACL_ENTRIES {
            return Err(ConfigError::Invalid(
                "materials_data_facility.acl exceeds max entries".to_string(),
            ));
        }
        for (index, entry) in self.acl.iter().enumerate() {
            if entry != PUBLIC_ACL && !is_identity_uuid(entry) {
                return Err(ConfigError::Invalid(format!(
                    "materials_data_facility.acl entry must be \"public\" or a uuid: {entry}"
                )));
            }
            if self.acl.iter().take(index).any(|prior| prior == entry) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate materials_data_facility.acl entry: {entry}"
                )));
            }
        }
        Ok(())
    }
}

/// Default value for [`MdfConfig::acl`].
pub(crate) fn default_mdf_acl() -> Vec<String> {
    MdfOptions::default().acl
}

/// Returns true for a Globus identity in hyphenated UUID form.
fn is_identity_uuid(value: &str) -> bool {
    value.len() == Hyphenated::LENGTH && Uuid::try_parse(value).is_ok()
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Payload build audit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Enable structured audit logging (JSON lines).
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,
    /// Optional audit log path; stderr when absent.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            path: None,
        }
    }
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            validate_path_string("audit.path", path)?;
        }
        Ok(())
    }
}

/// Default value for [`AuditConfig::enabled`].
pub(crate) const fn default_audit_enabled() -> bool {
    false
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML or JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a UTF-8 file after checking path and size limits.
pub(crate) fn read_bounded(path: &Path, max_bytes: usize, label: &str) -> Result<String, ConfigError> {
    validate_path(path, label)?;
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(ConfigError::Invalid(format!("{label} file exceeds size limit")));
    }
    String::from_utf8(bytes)
        .map_err(|_| ConfigError::Invalid(format!("{label} file must be utf-8")))
}

/// Validates a path against length limits.
fn validate_path(path: &Path, label: &str) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{label} path exceeds max length")));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{label} path component too long")));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
