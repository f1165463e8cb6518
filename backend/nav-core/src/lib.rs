pub mod campus;
pub mod cancellation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generation;
pub mod orchestrator;
pub mod render;
pub mod routing_client;
pub mod ui;
pub mod view;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub const ROUTING_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const ROUTING_SERVER_PORT: &str = "8080";
pub const ROUTING_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", ROUTING_SERVER_HOSTNAME, ":", ROUTING_SERVER_PORT, "/");

/// Upper bound for every catalog and path request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);
