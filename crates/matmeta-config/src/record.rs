// crates/matmeta-config/src/record.rs
// ============================================================================
// Module: Record Loading
// Description: Load common input records from JSON or TOML files.
// Purpose: Let callers keep dataset metadata alongside their data on disk.
// Dependencies: matmeta-core, serde_json, toml
// ============================================================================

//! ## Overview
//! Record files are untrusted input: they are size-capped, must be UTF-8,
//! and are parsed strictly (unknown fields are rejected by the record model).
//! The format is chosen by file extension. Loading does not validate required
//! fields; that happens per service when a payload is built.

use std::path::Path;

use matmeta_core::CommonInputRecord;

use crate::config::ConfigError;
use crate::config::read_bounded;

/// Maximum record file size in bytes.
pub(crate) const MAX_RECORD_FILE_SIZE: usize = 1024 * 1024;

/// On-disk record encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON document (`.json`).
    Json,
    /// TOML document (`.toml`).
    Toml,
}

impl RecordFormat {
    /// Selects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parses a record from text in the given format.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] when the text is not a valid record.
pub fn parse_record(content: &str, format: RecordFormat) -> Result<CommonInputRecord, ConfigError> {
    match format {
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
        }
        RecordFormat::Toml => {
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
        }
    }
}

/// Loads a record from a `.json` or `.toml` file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the extension is unsupported, the file
/// cannot be read or exceeds limits, or the content is not a valid record.
pub fn load_record(path: &Path) -> Result<CommonInputRecord, ConfigError> {
    let format = RecordFormat::from_path(path).ok_or_else(|| {
        ConfigError::Invalid(format!("record file must be .json or .toml: {}", path.display()))
    })?;
    let content = read_bounded(path, MAX_RECORD_FILE_SIZE, "record")?;
    parse_record(&content, format)
}
