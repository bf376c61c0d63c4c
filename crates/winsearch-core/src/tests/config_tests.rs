//! Tests for configuration loading and defaults
//!
//! Tests the config system including:
//! - Config defaults
//! - Config serialization/deserialization
//! - Save/load round trips
//! - Prefix validation

use crate::Error;
use crate::config::{Config, Directories, WindowSearchConfig};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.window_search.enabled);
    assert!(config.window_search.commands_enabled);
    assert!(config.window_search.fuzzy_enabled);
    assert!(config.window_search.shift_moves_enabled);
    assert_eq!(config.window_search.prefix, "wq");
}

#[test]
fn test_config_parse_minimal() {
    let json = r"{}";
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_parse_partial() {
    let json = r#"{
        "windowSearch": {
            "fuzzyEnabled": false
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert!(!config.window_search.fuzzy_enabled);
    assert!(config.window_search.commands_enabled);
    assert_eq!(config.window_search.prefix, "wq");
}

#[test]
fn test_config_parse_full() {
    let json = r#"{
        "windowSearch": {
            "enabled": false,
            "commandsEnabled": false,
            "fuzzyEnabled": false,
            "shiftMovesEnabled": false,
            "prefix": "win:"
        }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(
        config.window_search,
        WindowSearchConfig {
            enabled: false,
            commands_enabled: false,
            fuzzy_enabled: false,
            shift_moves_enabled: false,
            prefix: "win:".to_string(),
        }
    );
}

#[test]
fn test_config_serializes_camel_case() {
    let json = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(json["windowSearch"]["shiftMovesEnabled"], true);
    assert_eq!(json["windowSearch"]["prefix"], "wq");
}

#[test]
fn test_config_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_save_load_round_trip() {
    let file = NamedTempFile::new().unwrap();
    let mut config = Config::default();
    config.window_search.commands_enabled = false;
    config.window_search.prefix = "w".to_string();

    config.save(file.path()).unwrap();
    let loaded = Config::load(file.path()).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_ignores_unknown_fields() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"{"windowSearch": {"prefix": "wq", "spaceKey": true}, "dash": {}}"#,
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.window_search.prefix, "wq");
}

#[test]
fn test_config_load_invalid_json() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_config_load_rejects_empty_prefix() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{"windowSearch": {"prefix": ":"}}"#).unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_prefix_validation() {
    let mut config = WindowSearchConfig::default();
    assert!(config.validate().is_ok());

    config.prefix = "win:".to_string();
    assert!(config.validate().is_ok());

    config.prefix = "two words".to_string();
    assert!(config.validate().is_err());

    config.prefix = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_directories_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let dirs = Directories::with_base(dir.path().join("winsearch"));
    dirs.ensure_exists().unwrap();

    Config::default().save(&dirs.config_file).unwrap();
    assert!(dirs.config_file.exists());
    assert_eq!(Config::load(&dirs.config_file).unwrap(), Config::default());
}
