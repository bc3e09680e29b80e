//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct
//! precedence: CLI arguments > Environment variables > Config file > Defaults

use farmgrid_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_configuration() {
    let config = LayeredConfig::with_defaults();

    assert_eq!(config.base_url.value, "http://localhost:3000");
    assert_eq!(config.base_url.source, ConfigSource::Default);
    assert_eq!(config.timeout_secs.value, 5);
    assert_eq!(config.timeout_secs.source, ConfigSource::Default);
    assert_eq!(config.dataset_path.value, PathBuf::from("datatest.json"));
    assert_eq!(config.dataset_path.source, ConfigSource::Default);
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
base_url = "http://farm.example:8080"
timeout_secs = 15
dataset_path = "fixtures/garden1.json"
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap();

    assert_eq!(config.base_url.value, "http://farm.example:8080");
    assert_eq!(config.base_url.source, ConfigSource::File);
    assert_eq!(config.timeout_secs.value, 15);
    assert_eq!(config.timeout_secs.source, ConfigSource::File);
    assert_eq!(config.dataset_path.value, PathBuf::from("fixtures/garden1.json"));
    assert_eq!(config.dataset_path.source, ConfigSource::File);
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"base_url = "http://farm.example:8080""#).unwrap();

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap();

    assert_eq!(config.base_url.source, ConfigSource::File);
    // Unset keys keep their defaults.
    assert_eq!(config.timeout_secs.value, 5);
    assert_eq!(config.timeout_secs.source, ConfigSource::Default);
    assert_eq!(config.dataset_path.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
base_url = "http://from-file:3000"
timeout_secs = 15
"#
    )
    .unwrap();

    env::set_var("FARMGRID_BASE_URL", "http://from-env:3000");
    env::set_var("FARMGRID_TIMEOUT_SECS", "20");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    env::remove_var("FARMGRID_BASE_URL");
    env::remove_var("FARMGRID_TIMEOUT_SECS");

    assert_eq!(config.base_url.value, "http://from-env:3000");
    assert_eq!(config.base_url.source, ConfigSource::Environment);
    assert_eq!(config.timeout_secs.value, 20);
    assert_eq!(config.timeout_secs.source, ConfigSource::Environment);
}

#[test]
#[serial]
fn test_invalid_environment_timeout_is_ignored() {
    env::set_var("FARMGRID_TIMEOUT_SECS", "not-a-number");

    let config = LayeredConfig::with_defaults().load_from_env();

    env::remove_var("FARMGRID_TIMEOUT_SECS");

    assert_eq!(config.timeout_secs.value, 5);
    assert_eq!(config.timeout_secs.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    env::set_var("FARMGRID_BASE_URL", "http://from-env:3000");

    let mut config = LayeredConfig::with_defaults().load_from_env();

    env::remove_var("FARMGRID_BASE_URL");

    config.update_from_cli(CliConfigOverrides {
        base_url: Some("http://from-cli:3000".to_string()),
        timeout_secs: None,
        dataset_path: Some(PathBuf::from("cli.json")),
    });

    assert_eq!(config.base_url.value, "http://from-cli:3000");
    assert_eq!(config.base_url.source, ConfigSource::Cli);
    assert_eq!(config.dataset_path.value, PathBuf::from("cli.json"));
    assert_eq!(config.dataset_path.source, ConfigSource::Cli);
    // Untouched by CLI, so still the default.
    assert_eq!(config.timeout_secs.source, ConfigSource::Default);
}
