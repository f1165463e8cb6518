pub mod builder;

use crate::campus::Campus;
use crate::catalog::Location;

use serde::Serialize;
use thiserror::Error as ThisError;

/// A single path request, built fresh for every user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub source: Location,
    pub destination: Location,
    pub algorithm: String,
    pub campus: Campus,
}

/// Local validation failures. These never reach the network.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum QueryValidationError {
    #[error("Please select both source and destination.")]
    MissingSelection,

    #[error("Source and destination cannot be the same.")]
    SameSelection,
}
