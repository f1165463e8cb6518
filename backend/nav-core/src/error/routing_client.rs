use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RoutingClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connect Error: {message} {location}")]
    Connect {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl RoutingClientError {
    /// Short reason safe to show an end user, if the failure has one.
    ///
    /// Everything else about the error (URLs, bodies, locations) is for logs only.
    pub fn user_reason(&self) -> Option<&'static str> {
        match self {
            RoutingClientError::Timeout { .. } => Some("request timed out"),
            RoutingClientError::Connect { .. } => Some("could not reach the routing service"),
            _ => None,
        }
    }
}

impl From<url::ParseError> for RoutingClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RoutingClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RoutingClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        let location = ErrorLocation::from(Location::caller());

        if error.is_timeout() {
            RoutingClientError::Timeout { message, location }
        } else if error.is_connect() {
            RoutingClientError::Connect { message, location }
        } else {
            RoutingClientError::Http { message, location }
        }
    }
}

impl From<serde_json::Error> for RoutingClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RoutingClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
