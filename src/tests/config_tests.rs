//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, ExportConfig, LogConfig, Validate, WordTrieConfig};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordTrieConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.export.indent, 2);
    assert!(config.export.pretty);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = WordTrieConfig::default();

    config.log.level = "verbose".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log.level = "debug".to_string();
    config.export.indent = 64;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.export.indent = 0;
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "wordtrie.toml",
            r#"
            [export]
            indent = 4

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.export.indent, 4);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert!(config.export.pretty);
    assert!(!config.log.json);
}

/// Test loading configuration from JSON.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("wordtrie.json", r#"{ "export": { "pretty": false } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.export, ExportConfig::compact());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("wordtrie_env.toml", "[export]\nindent = 4\n")
        .unwrap();

    fixture.set_env("TEST_ENV__EXPORT__INDENT", "8");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.export.indent, 8);
    assert!(config.log.json);
}

/// Test that loading an invalid or missing configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let broken = fixture
        .create_file("invalid.toml", "[export\nindent = four\"\n")
        .unwrap();
    assert!(ConfigLoader::new(Some(&broken), "TEST_INVALID").load().is_err());

    let out_of_range = fixture
        .create_file("range.toml", "[export]\nindent = 99\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&out_of_range), "TEST_RANGE").load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    let missing = fixture.path("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_MISSING").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let unsupported = fixture.create_file("config.ini", "indent=2").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_UNSUPPORTED").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that the generated default configuration loads back unchanged.
#[test]
fn test_write_default_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let output = fixture.path("nested/dir/wordtrie.toml");

    ConfigLoader::write_default(&output).unwrap();
    let config = ConfigLoader::new(Some(&output), "TEST_DEFAULT").load().unwrap();

    assert_eq!(config, WordTrieConfig::default());
    assert_eq!(config.log, LogConfig::default());
}

/// Test that the default loader reads the built-in defaults.
#[test]
fn test_default_loader() {
    let config = ConfigLoader::default().load().unwrap();
    assert_eq!(config.export, ExportConfig::default());
    assert!(!crate::VERSION.is_empty());
}
