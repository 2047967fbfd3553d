use crate::config::{ClientConfig, HasagiConfig, LogConfig};
use crate::error::config::ConfigError;

use log::LevelFilter;

use std::time::Duration;

#[test]
fn given_defaults_when_validated_then_ok() {
    let config = HasagiConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.client.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.log.level_filter(), LevelFilter::Warn);
}

/// **VALUE**: Partial files only override what they name.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` making every key
/// mandatory, so a file with only `[log]` fails to parse.
#[test]
fn given_partial_toml_when_parsed_then_other_fields_default() {
    // GIVEN: A config with only a log level
    let toml_text = "[log]\nlevel = \"debug\"\n";

    // WHEN: Parsing
    let config: HasagiConfig = toml::from_str(toml_text).unwrap();

    // THEN: Client section is all defaults
    assert_eq!(config.log.level_filter(), LevelFilter::Debug);
    assert_eq!(config.client.retry_initial_interval_ms, 500);
    assert_eq!(config.client.retry_max_interval_ms, 5_000);
    assert!(config.client.lockfile.is_none());
}

#[test]
fn given_zero_timeout_when_validated_then_returns_validation_error() {
    let config = ClientConfig {
        request_timeout_secs: 0,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_max_interval_below_initial_when_validated_then_returns_validation_error() {
    let config = ClientConfig {
        retry_initial_interval_ms: 1_000,
        retry_max_interval_ms: 10,
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn given_unknown_log_level_when_validated_then_returns_validation_error() {
    let config = LogConfig {
        level: String::from("chatty"),
        file: None,
    };

    assert!(config.validate().is_err());
    assert_eq!(config.level_filter(), LevelFilter::Warn);
}
