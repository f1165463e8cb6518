use nav_core::config::NavConfig;
use nav_core::error::config::ConfigError;

use models::Algorithm;

use std::time::Duration;

use tempfile::TempDir;

#[test]
fn given_missing_file_when_load_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = NavConfig::load(dir.path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.server.base_url, "http://127.0.0.1:8080/");
    assert_eq!(config.request_timeout(), Duration::from_millis(5000));
    assert_eq!(config.defaults.algorithm, Algorithm::Bfs);
    assert!(config.defaults.context.is_none());
}

/// **VALUE**: A saved config loads back with the same values.
///
/// **BUG THIS CATCHES**: Would catch if the atomic temp-file rename left the data in
/// `config.json.tmp`, or if a field lost its serde attributes.
#[test]
fn given_saved_config_when_loaded_then_values_survive() {
    // GIVEN: A customised config saved to a fresh directory
    let dir = TempDir::new().unwrap();
    let mut config = NavConfig::default();
    config.server.base_url = "https://nav.example.edu/".to_string();
    config.server.request_timeout_ms = 2500;
    config.defaults.algorithm = Algorithm::Dijkstra;
    config.defaults.context = Some("/outer/".to_string());

    // WHEN: Saving and loading
    config.save(dir.path()).unwrap();
    let loaded = NavConfig::load(dir.path()).unwrap();

    // THEN: Everything round-trips and no temp file is left behind
    assert_eq!(loaded.server.base_url, "https://nav.example.edu/");
    assert_eq!(loaded.request_timeout(), Duration::from_millis(2500));
    assert_eq!(loaded.defaults.algorithm, Algorithm::Dijkstra);
    assert_eq!(loaded.defaults.context.as_deref(), Some("/outer/"));
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_partial_file_when_load_then_missing_fields_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "server": { "base_url": "http://10.0.0.5:9000" } }"#,
    )
    .unwrap();

    let config = NavConfig::load(dir.path()).unwrap();

    assert_eq!(config.server.base_url, "http://10.0.0.5:9000");
    assert_eq!(config.server.request_timeout_ms, 5000);
}

#[test]
fn given_corrupt_file_when_load_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = NavConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn given_out_of_range_timeout_when_validated_then_returns_invalid_field() {
    let mut config = NavConfig::default();
    config.server.request_timeout_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "server.request_timeout_ms", .. })
    ));

    config.server.request_timeout_ms = 120_000;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "server.request_timeout_ms", .. })
    ));
}

#[test]
fn given_non_http_base_url_when_saved_then_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let mut config = NavConfig::default();
    config.server.base_url = "ftp://nav.example.edu".to_string();

    let result = config.save(dir.path());

    assert!(matches!(result, Err(ConfigError::Invalid { field: "server.base_url", .. })));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn given_future_version_when_loaded_then_returns_invalid_field() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "version": 7 }"#).unwrap();

    let result = NavConfig::load(dir.path());

    match result {
        Err(ConfigError::Invalid { field, message, .. }) => {
            assert_eq!(field, "version");
            assert!(message.contains('7'));
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
}
