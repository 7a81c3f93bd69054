//! Config validation tests for matmeta-config.
// crates/matmeta-config/tests/config_validation.rs
// =============================================================================
// Module: Config Validation Tests
// Description: Validate section constraints and config loading limits.
// Purpose: Ensure invalid matmeta.toml input fails closed.
// =============================================================================

use matmeta_config::ConfigError;
use matmeta_config::MatmetaConfig;
use matmeta_core::ServiceId;

mod common;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Defaults
// ============================================================================

#[test]
fn empty_config_uses_mapper_defaults() -> TestResult {
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    let options = config.payload_options();
    if options != matmeta_core::PayloadOptions::default() {
        return Err(format!("unexpected defaults {options:?}"));
    }
    if config.audit.enabled {
        return Err("audit should be disabled by default".to_string());
    }
    Ok(())
}

#[test]
fn unknown_sections_are_rejected() -> TestResult {
    if common::config_from_toml("[figshare]\ntoken = \"x\"\n").is_ok() {
        return Err("unknown section accepted".to_string());
    }
    if common::config_from_toml("[citrine]\ncategry = \"system\"\n").is_ok() {
        return Err("misspelled field accepted".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Citrine
// ============================================================================

#[test]
fn citrine_category_must_be_non_empty() -> TestResult {
    let mut config = common::config_from_toml("[citrine]\ncategory = \"  \"\n")
        .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "citrine.category must be non-empty")
}

#[test]
fn citrine_category_rejects_unexpected_characters() -> TestResult {
    let mut config = common::config_from_toml("[citrine]\ncategory = \"system/alloy\"\n")
        .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "citrine.category must contain only")
}

#[test]
fn citrine_category_is_trimmed() -> TestResult {
    let mut config = common::config_from_toml("[citrine]\ncategory = \" system.alloy \"\n")
        .map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    if config.payload_options().citrine.category == "system.alloy" {
        Ok(())
    } else {
        Err(format!("category not trimmed: {:?}", config.citrine.category))
    }
}

// ============================================================================
// SECTION: Materials Data Facility
// ============================================================================

#[test]
fn mdf_acl_must_be_non_empty() -> TestResult {
    let mut config = common::config_from_toml("[materials_data_facility]\nacl = []\n")
        .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "materials_data_facility.acl must be non-empty")
}

#[test]
fn mdf_acl_entries_must_be_public_or_uuid() -> TestResult {
    let mut config =
        common::config_from_toml("[materials_data_facility]\nacl = [\"everyone\"]\n")
            .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "must be \"public\" or a uuid: everyone")
}

#[test]
fn mdf_acl_rejects_duplicates() -> TestResult {
    let mut config = common::config_from_toml(
        "[materials_data_facility]\nacl = [\"public\", \"public\"]\n",
    )
    .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "duplicate materials_data_facility.acl entry")
}

#[test]
fn mdf_acl_accepts_identity_uuids() -> TestResult {
    let mut config = common::config_from_toml(
        "[materials_data_facility]\nacl = [\"12345678-1234-1234-1234-123456789abc\"]\n",
    )
    .map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn mdf_acl_rejects_non_hyphenated_uuid_forms() -> TestResult {
    for entry in [
        "123456781234123412341234567890ab",
        "{12345678-1234-1234-1234-123456789abc}",
        "urn:uuid:12345678-1234-1234-1234-123456789abc",
        "12345678-1234-1234-1234-123456789abz",
    ] {
        let mut config = common::config_from_toml(&format!(
            "[materials_data_facility]\nacl = [\"{entry}\"]\n"
        ))
        .map_err(|err| err.to_string())?;
        common::assert_invalid(config.validate(), "must be \"public\" or a uuid")?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Audit
// ============================================================================

#[test]
fn audit_path_must_be_non_empty() -> TestResult {
    let mut config = common::config_from_toml("[audit]\nenabled = true\npath = \" \"\n")
        .map_err(|err| err.to_string())?;
    common::assert_invalid(config.validate(), "audit.path must be non-empty")
}

#[test]
fn configured_builder_writes_audit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let log = dir.path().join("audit.jsonl");
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.audit.enabled = true;
    config.audit.path = Some(log.to_string_lossy().into_owned());
    config.validate().map_err(|err| err.to_string())?;

    let builder = config.payload_builder().map_err(|err| err.to_string())?;
    let record = matmeta_config::parse_record(
        &matmeta_config::record_toml_example(),
        matmeta_config::RecordFormat::Toml,
    )
    .map_err(|err| err.to_string())?;
    builder.build(ServiceId::MaterialsCommons, &record).map_err(|err| err.to_string())?;

    let contents = std::fs::read_to_string(&log).map_err(|err| err.to_string())?;
    if contents.lines().count() == 1 && contents.contains("\"materials_commons\"") {
        Ok(())
    } else {
        Err(format!("unexpected audit log {contents}"))
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

#[test]
fn load_reads_and_validates_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("matmeta.toml");
    std::fs::write(&path, "[citrine]\ncategory = \"system.alloy\"\n")
        .map_err(|err| err.to_string())?;
    let config = MatmetaConfig::load(&path).map_err(|err| err.to_string())?;
    if config.citrine.category == "system.alloy" {
        Ok(())
    } else {
        Err(format!("unexpected category {}", config.citrine.category))
    }
}

#[test]
fn load_rejects_invalid_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("matmeta.toml");
    std::fs::write(&path, "[materials_data_facility]\nacl = []\n")
        .map_err(|err| err.to_string())?;
    match MatmetaConfig::load(&path) {
        Err(ConfigError::Invalid(_)) => Ok(()),
        other => Err(format!("expected invalid config, got {other:?}")),
    }
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("matmeta.toml");
    let padding = format!("# {}\n", "x".repeat(1024 * 1024));
    std::fs::write(&path, padding).map_err(|err| err.to_string())?;
    common::assert_invalid(MatmetaConfig::load(&path).map(|_| ()), "config file exceeds size limit")
}

#[test]
fn load_reports_missing_file_as_io() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    match MatmetaConfig::load(&dir.path().join("absent.toml")) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got {other:?}")),
    }
}

#[test]
fn load_reports_malformed_toml_as_parse() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("matmeta.toml");
    std::fs::write(&path, "[citrine\n").map_err(|err| err.to_string())?;
    match MatmetaConfig::load(&path) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got {other:?}")),
    }
}
