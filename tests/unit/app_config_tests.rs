/*!
 * Tests for application configuration
 */

use std::str::FromStr;
use anyhow::Result;
use keynorm::app_config::{Config, LogLevel, NormalizeStrategy, OnErrorPolicy};

/// Test that the default configuration carries the historical fixed values
#[test]
fn test_default_withNoInput_shouldUseHistoricalValues() {
    let config = Config::default();

    assert_eq!(config.translations_dir, "assets/translations");
    assert_eq!(config.file_extension, "json");
    assert_eq!(config.strategy, NormalizeStrategy::Text);
    assert_eq!(config.on_error, OnErrorPolicy::Continue);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration passes validation
#[test]
fn test_validate_withDefaultConfig_shouldSucceed() {
    let config = Config::default();

    assert!(config.validate().is_ok());
}

/// Test that an empty target directory is rejected
#[test]
fn test_validate_withEmptyTranslationsDir_shouldFail() {
    let mut config = Config::default();
    config.translations_dir = "  ".to_string();

    assert!(config.validate().is_err());
}

/// Test that an empty file extension is rejected
#[test]
fn test_validate_withEmptyExtension_shouldFail() {
    let mut config = Config::default();
    config.file_extension = ".".to_string();

    assert!(config.validate().is_err());
}

/// Test that an extension containing a path separator is rejected
#[test]
fn test_validate_withPathSeparatorInExtension_shouldFail() {
    let mut config = Config::default();
    config.file_extension = "json/evil".to_string();

    assert!(config.validate().is_err());
}

/// Test that an empty JSON object deserializes to the default configuration
#[test]
fn test_deserialize_withEmptyObject_shouldApplyFieldDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;

    assert_eq!(config.translations_dir, "assets/translations");
    assert_eq!(config.file_extension, "json");
    assert_eq!(config.strategy, NormalizeStrategy::Text);

    Ok(())
}

/// Test that enum config values use lowercase identifiers on the wire
#[test]
fn test_deserialize_withLowercaseEnumValues_shouldParse() -> Result<()> {
    let json = r#"{
        "translations_dir": "web/translations",
        "strategy": "structured",
        "on_error": "abort",
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.translations_dir, "web/translations");
    assert_eq!(config.strategy, NormalizeStrategy::Structured);
    assert_eq!(config.on_error, OnErrorPolicy::Abort);
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test that a configuration survives a serialize/deserialize round trip
#[test]
fn test_serialize_withCustomConfig_shouldRoundTrip() -> Result<()> {
    let mut config = Config::default();
    config.translations_dir = "custom/dir".to_string();
    config.strategy = NormalizeStrategy::Structured;

    let json = serde_json::to_string_pretty(&config)?;
    let restored: Config = serde_json::from_str(&json)?;

    assert_eq!(restored.translations_dir, config.translations_dir);
    assert_eq!(restored.file_extension, config.file_extension);
    assert_eq!(restored.strategy, config.strategy);
    assert_eq!(restored.on_error, config.on_error);

    Ok(())
}

/// Test strategy parsing from its lowercase identifier
#[test]
fn test_strategy_from_str_withValidNames_shouldParse() {
    assert_eq!(NormalizeStrategy::from_str("text").unwrap(), NormalizeStrategy::Text);
    assert_eq!(NormalizeStrategy::from_str("Structured").unwrap(), NormalizeStrategy::Structured);
}

/// Test strategy parsing rejects unknown names
#[test]
fn test_strategy_from_str_withInvalidName_shouldFail() {
    assert!(NormalizeStrategy::from_str("yaml").is_err());
}

/// Test the display form of config enums
#[test]
fn test_display_withConfigEnums_shouldUseLowercase() {
    assert_eq!(NormalizeStrategy::Structured.to_string(), "structured");
    assert_eq!(OnErrorPolicy::Abort.to_string(), "abort");
}
