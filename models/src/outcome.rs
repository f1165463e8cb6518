use crate::catalog::Location;
use crate::query::QueryValidationError;

/// Exactly one of these is produced per path query attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Ordered route, never empty.
    Path(Vec<Location>),
    /// Well-formed success response with no route.
    EmptyResult,
    /// Network unreachable, aborted or timed out.
    TransportError(String),
    /// Service reachable but rejected the query.
    ApplicationError(String),
    /// Aborted before completion, or superseded by a newer query.
    Cancelled,
    /// Rejected locally before any request was issued.
    Invalid(QueryValidationError),
}

impl QueryOutcome {
    pub fn is_error(&self) -> bool {
        !matches!(self, QueryOutcome::Path(_) | QueryOutcome::Cancelled)
    }
}
