use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Unknown Algorithm Error: {value} {location}")]
    UnknownAlgorithm {
        value: String,
        location: ErrorLocation,
    },
}
