use lcu_client::HasagiConfig;
use lcu_client::error::config::ConfigError;

use std::io::Write;
use std::time::Duration;

use log::LevelFilter;
use tempfile::{NamedTempFile, tempdir};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// **VALUE**: Verifies a complete config file is read into every section.
#[test]
fn given_full_config_file_when_loaded_then_all_sections_applied() {
    // GIVEN: A config file setting every key
    let file = config_file(
        r#"
[client]
lockfile = "/tmp/League of Legends/lockfile"
request_timeout_secs = 5
retry_initial_interval_ms = 100
retry_max_interval_ms = 1000

[log]
level = "debug"
file = "/tmp/hasagi.log"
"#,
    );

    // WHEN: Loading it explicitly
    let config = HasagiConfig::load(Some(file.path())).unwrap();

    // THEN: Every value is picked up
    assert_eq!(
        config.client.lockfile.as_deref(),
        Some(std::path::Path::new("/tmp/League of Legends/lockfile"))
    );
    assert_eq!(config.client.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.client.retry_initial_interval(), Duration::from_millis(100));
    assert_eq!(config.client.retry_max_interval(), Duration::from_secs(1));
    assert_eq!(config.log.level_filter(), LevelFilter::Debug);
    assert!(config.log.file.is_some());
}

/// **VALUE**: An explicitly named config file must exist.
///
/// **BUG THIS CATCHES**: Would catch a typo in `--config` being silently replaced by the
/// defaults, which makes the user's settings vanish without explanation.
#[test]
fn given_missing_explicit_path_when_loaded_then_read_error() {
    let dir = tempdir().unwrap();

    let result = HasagiConfig::load(Some(&dir.path().join("nope.toml")));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn given_invalid_toml_when_loaded_then_parse_error_names_file() {
    let file = config_file("[client\nlockfile = ");

    let result = HasagiConfig::load_from_path(file.path());

    match result {
        Err(e @ ConfigError::ParseError { .. }) => {
            assert!(e.to_string().contains(&file.path().display().to_string()));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn given_out_of_range_value_when_loaded_then_validation_error() {
    let file = config_file("[client]\nrequest_timeout_secs = 0\n");

    let result = HasagiConfig::load_from_path(file.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
