use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

/// Failures reading, writing or checking `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O Error: cannot {action} {path}: {source} {location}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Config Parse Error: {path}: {message} {location}")]
    Parse {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Config Serialize Error: {message} {location}")]
    Serialize {
        message: String,
        location: ErrorLocation,
    },

    /// A value parsed fine but is out of range or malformed.
    #[error("Invalid config `{field}`: {message} {location}")]
    Invalid {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}
