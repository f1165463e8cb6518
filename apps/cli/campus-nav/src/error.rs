use nav_core::error::CoreError;

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that abort a command before anything could be rendered.
///
/// Query and catalog failures are not errors at this level; they are
/// rendered outcomes. These cover startup and wiring problems only.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NavAppError {
    /// Logger, directories or other process setup
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// Error from nav-core (config, routing client construction)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for NavAppError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        NavAppError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
