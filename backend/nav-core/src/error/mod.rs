pub mod config;
pub mod routing_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    RoutingClient(#[from] routing_client::RoutingClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
