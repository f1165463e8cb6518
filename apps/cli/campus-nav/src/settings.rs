//! Config resolution for one CLI invocation.
//!
//! Precedence: `--base-url` flag, then `CAMPUS_NAV_BASE_URL`, then config.json,
//! then built-in defaults.

use crate::cli::Cli;
use crate::error::NavAppError;

use nav_core::config::{NavConfig, default_config_dir};
use nav_core::error::CoreError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info};

pub const BASE_URL_ENV_VAR: &str = "CAMPUS_NAV_BASE_URL";
const LOG_DIR_NAME: &str = "campus-nav";

/// Load config and apply overrides.
///
/// `env_base_url` is the value of [`BASE_URL_ENV_VAR`], read by the caller.
pub fn load_config(cli: &Cli, env_base_url: Option<String>) -> Result<NavConfig, NavAppError> {
    let mut config = match config_dir(cli) {
        Some(dir) => NavConfig::load(&dir).map_err(CoreError::from)?,
        None => {
            info!("No config directory available, using defaults");
            NavConfig::default()
        }
    };

    if let Some(base_url) = cli.base_url.clone().or(env_base_url) {
        debug!("Overriding routing service base URL with {base_url}");
        config.server.base_url = base_url;
    }

    config.validate().map_err(CoreError::from)?;
    Ok(config)
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(default_config_dir)
}

/// Directory the log file goes into, created if missing.
pub fn log_dir(cli: &Cli) -> Result<PathBuf, NavAppError> {
    let dir = match cli.log_dir.clone() {
        Some(dir) => dir,
        None => dirs::data_local_dir()
            .map(|dir| dir.join(LOG_DIR_NAME).join("logs"))
            .ok_or_else(|| NavAppError::Startup {
                message: String::from("No local data directory for logs; pass --log-dir"),
                location: ErrorLocation::from(Location::caller()),
            })?,
    };

    std::fs::create_dir_all(&dir).map_err(|e| NavAppError::Startup {
        message: format!("Failed to create log directory {}: {e}", dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(dir)
}
