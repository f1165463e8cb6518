use crate::{Location, QueryOutcome, QueryValidationError};

/// **VALUE**: Empty results are styled like errors; paths and cancellations are not.
///
/// **WHY THIS MATTERS**: The result area must highlight "No path found." the same way
/// it highlights failures, and a cancellation must only clear previous styling.
#[test]
fn given_each_outcome_when_checked_then_error_styling_matches_policy() {
    assert!(!QueryOutcome::Path(vec![Location::from("A")]).is_error());
    assert!(!QueryOutcome::Cancelled.is_error());
    assert!(QueryOutcome::EmptyResult.is_error());
    assert!(QueryOutcome::TransportError(String::from("x")).is_error());
    assert!(QueryOutcome::ApplicationError(String::from("x")).is_error());
    assert!(QueryOutcome::Invalid(QueryValidationError::SameSelection).is_error());
}
