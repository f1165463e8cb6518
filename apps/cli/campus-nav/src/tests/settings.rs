use crate::cli::Cli;
use crate::error::NavAppError;
use crate::settings::{load_config, log_dir};

use clap::Parser;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["campus-nav"];
    full.extend_from_slice(args);
    full.extend_from_slice(&["locations"]);
    Cli::try_parse_from(full).unwrap()
}

#[test]
fn given_empty_config_dir_when_loaded_then_defaults_apply() {
    let dir = TempDir::new().unwrap();
    let cli = cli(&["--config-dir", dir.path().to_str().unwrap()]);

    let config = load_config(&cli, None).unwrap();

    assert_eq!(config.server.base_url, "http://127.0.0.1:8080/");
}

/// **VALUE**: The flag beats the environment, which beats the file.
///
/// **WHY THIS MATTERS**: Operators point the CLI at staging with the env var; a one-off
/// `--base-url` must still win without editing the environment.
#[test]
fn given_flag_and_env_when_loaded_then_flag_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().to_str().unwrap();

    let from_env = load_config(
        &cli(&["--config-dir", path]),
        Some(String::from("http://env.example:9000")),
    )
    .unwrap();
    let from_flag = load_config(
        &cli(&["--config-dir", path, "--base-url", "http://flag.example:9001"]),
        Some(String::from("http://env.example:9000")),
    )
    .unwrap();

    assert_eq!(from_env.server.base_url, "http://env.example:9000");
    assert_eq!(from_flag.server.base_url, "http://flag.example:9001");
}

#[test]
fn given_invalid_override_when_loaded_then_returns_core_error() {
    let dir = TempDir::new().unwrap();
    let cli = cli(&["--config-dir", dir.path().to_str().unwrap()]);

    let result = load_config(&cli, Some(String::from("nav.example")));

    assert!(matches!(result, Err(NavAppError::Core { .. })));
}

#[test]
fn given_log_dir_flag_when_resolved_then_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let cli = cli(&["--log-dir", nested.to_str().unwrap()]);

    let resolved = log_dir(&cli).unwrap();

    assert_eq!(resolved, nested);
    assert!(nested.is_dir());
}
