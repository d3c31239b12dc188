/*!
 * Tests for application configuration
 */

use fonetico::app_config::{Config, LogLevel};
use fonetico::transcription::StressStyle;
use std::str::FromStr;

/// Test default configuration values
#[test]
fn test_config_default_shouldUseVocabularyColumns() {
    let config = Config::default();
    assert_eq!(config.term_column, "term_italian");
    assert_eq!(config.pronunciation_column, "pronunciation");
    assert_eq!(config.stress_style, StressStyle::Uppercase);
    assert!(!config.overwrite_existing);
    assert_eq!(config.max_concurrent_files, 4);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test JSON round trip of the configuration
#[test]
fn test_config_withJsonRoundTrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.term_column = "parola".to_string();
    config.stress_style = StressStyle::Marker;
    config.max_concurrent_files = 8;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.term_column, "parola");
    assert_eq!(parsed.stress_style, StressStyle::Marker);
    assert_eq!(parsed.max_concurrent_files, 8);
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_withEmptyJson_shouldApplyDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.term_column, "term_italian");
    assert_eq!(parsed.pronunciation_column, "pronunciation");
    assert_eq!(parsed.max_concurrent_files, 4);
}

/// Test stress style serialization names
#[test]
fn test_stress_style_withSerde_shouldUseLowercaseNames() {
    assert_eq!(serde_json::to_string(&StressStyle::Uppercase).unwrap(), "\"uppercase\"");
    assert_eq!(serde_json::to_string(&StressStyle::Marker).unwrap(), "\"marker\"");

    let parsed: StressStyle = serde_json::from_str("\"marker\"").unwrap();
    assert_eq!(parsed, StressStyle::Marker);
}

/// Test stress style Display and FromStr
#[test]
fn test_stress_style_withFromStr_shouldParseKnownNames() {
    assert_eq!(StressStyle::from_str("uppercase").unwrap(), StressStyle::Uppercase);
    assert_eq!(StressStyle::from_str("MARKER").unwrap(), StressStyle::Marker);
    assert!(StressStyle::from_str("bold").is_err());
    assert_eq!(StressStyle::Marker.to_string(), "marker");
}

/// Test configuration validation
#[test]
fn test_config_validate_withBadValues_shouldFail() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    let mut config = Config::default();
    config.term_column = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.pronunciation_column = config.term_column.clone();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.max_concurrent_files = 0;
    assert!(config.validate().is_err());
}
