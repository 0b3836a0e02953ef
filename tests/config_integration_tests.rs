//! Integration tests for config loading from fixture files.
//!
//! These tests verify that the rename config can parse the sample config file correctly.

use std::fs;
use std::path::Path;

use rx_rename::rename::RxRenameConfig;

/// Read the sample config file content.
fn read_sample_config() -> String {
    let config_path = Path::new("tests/fixtures/sample_config.toml");
    fs::read_to_string(config_path).expect("Failed to read sample config file")
}

#[test]
fn sample_config_file_exists() {
    let config_path = Path::new("tests/fixtures/sample_config.toml");
    assert!(config_path.exists(), "Sample config file should exist");
}

#[test]
fn sample_config_is_valid_toml() {
    let config_content = read_sample_config();
    let result: Result<toml::Value, _> = toml::from_str(&config_content);
    assert!(result.is_ok(), "Sample config should be valid TOML: {:?}", result.err());
}

#[test]
fn rxrename_section_has_expected_structure() {
    let config_content = read_sample_config();
    let value: toml::Value = toml::from_str(&config_content).expect("should parse");

    let section = value.get("rxrename").expect("should have rxrename section");

    for key in ["dryrun", "force", "ignore_case", "quiet", "replace_all", "verbose"] {
        let field = section.get(key);
        assert!(field.is_some(), "rxrename section should have '{key}'");
        assert!(field.is_some_and(toml::Value::is_bool), "'{key}' should be a boolean");
    }
}

#[test]
fn sample_config_parses_into_rename_config() {
    let config_content = read_sample_config();
    let config = RxRenameConfig::from_toml_str(&config_content).expect("should parse sample config");

    assert!(config.ignore_case);
    assert!(config.replace_all);
    assert!(!config.dryrun);
    assert!(!config.force);
    assert!(!config.quiet);
    assert!(!config.verbose);
}
