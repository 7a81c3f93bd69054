//! Schema default alignment tests for matmeta-config.
// crates/matmeta-config/tests/schema_defaults.rs
// =============================================================================
// Module: Schema Defaults Alignment Tests
// Description: Ensure schema defaults match runtime defaults.
// Purpose: Prevent drift between config defaults and generated schema/docs.
// =============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use matmeta_config::config_schema;
use matmeta_config::config_toml_example;
use serde_json::Value;

mod common;

type TestResult = Result<(), String>;

fn schema_default<'a>(schema: &'a Value, pointer: &str) -> Result<&'a Value, String> {
    schema.pointer(pointer).ok_or_else(|| format!("missing schema default at {pointer}"))
}

fn assert_default(schema: &Value, pointer: &str, expected: &Value) -> TestResult {
    let actual = schema_default(schema, pointer)?;
    if actual != expected {
        return Err(format!("schema default mismatch at {pointer}: {actual:?} vs {expected:?}"));
    }
    Ok(())
}

fn compile() -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&config_schema())
        .map_err(|err| err.to_string())
}

fn toml_to_json(text: &str) -> Result<Value, String> {
    let value: toml::Table = toml::from_str(text).map_err(|err| err.to_string())?;
    serde_json::to_value(value).map_err(|err| err.to_string())
}

#[test]
fn schema_defaults_match_runtime_defaults() -> TestResult {
    let schema = config_schema();
    let mut config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;

    assert_default(
        &schema,
        "/properties/citrine/properties/category/default",
        &serde_json::json!(config.citrine.category),
    )?;
    assert_default(
        &schema,
        "/properties/materials_data_facility/properties/acl/default",
        &serde_json::json!(config.materials_data_facility.acl),
    )?;
    assert_default(
        &schema,
        "/properties/audit/properties/enabled/default",
        &serde_json::json!(config.audit.enabled),
    )?;
    assert_default(&schema, "/properties/audit/properties/path/default", &Value::Null)?;
    Ok(())
}

#[test]
fn example_config_matches_schema_and_validates() -> TestResult {
    let validator = compile()?;
    let example = toml_to_json(&config_toml_example())?;
    let errors: Vec<String> = validator.iter_errors(&example).map(|err| err.to_string()).collect();
    if !errors.is_empty() {
        return Err(errors.join("; "));
    }
    let mut config =
        common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn schema_rejects_what_validation_rejects() -> TestResult {
    let validator = compile()?;
    let cases = [
        "[materials_data_facility]\nacl = []\n",
        "[materials_data_facility]\nacl = [\"everyone\"]\n",
        "[materials_data_facility]\nacl = [\"public\", \"public\"]\n",
        "[citrine]\ncategory = \"\"\n",
        "[citrine]\ncategory = \"system/alloy\"\n",
        "[unknown]\nkey = 1\n",
    ];
    for case in cases {
        let instance = toml_to_json(case)?;
        if validator.iter_errors(&instance).next().is_none() {
            return Err(format!("schema accepted invalid config: {case}"));
        }
    }
    Ok(())
}
