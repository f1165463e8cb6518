use crate::{Campus, QueryBuilder, QueryValidationError};

/// **VALUE**: Verifies that a missing source is rejected before anything else is checked.
///
/// **WHY THIS MATTERS**: The orchestrator relies on the builder to short-circuit
/// before any network I/O. An empty selection must never turn into a request.
#[test]
fn given_empty_source_when_building_then_returns_missing_selection() {
    // GIVEN: Builder with an empty source
    let builder = QueryBuilder::default()
        .with_source("")
        .with_destination("Library")
        .with_algorithm("bfs");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should report the missing selection
    assert_eq!(result.unwrap_err(), QueryValidationError::MissingSelection);
}

#[test]
fn given_unset_destination_when_building_then_returns_missing_selection() {
    let result = QueryBuilder::default().with_source("Library").build();

    assert_eq!(result.unwrap_err(), QueryValidationError::MissingSelection);
}

/// **VALUE**: Both ends empty reports "select both", not "cannot be same".
///
/// **BUG THIS CATCHES**: Would catch if the equality check ran first, since two empty
/// strings are equal and the user would see the wrong message.
#[test]
fn given_both_empty_when_building_then_missing_selection_wins() {
    let result = QueryBuilder::default()
        .with_source("")
        .with_destination("")
        .build();

    assert_eq!(result.unwrap_err(), QueryValidationError::MissingSelection);
}

#[test]
fn given_identical_ends_when_building_then_returns_same_selection() {
    let result = QueryBuilder::default()
        .with_source("Library")
        .with_destination("Library")
        .build();

    assert_eq!(result.unwrap_err(), QueryValidationError::SameSelection);
}

#[test]
fn given_validation_errors_when_displayed_then_match_user_messages() {
    assert_eq!(
        QueryValidationError::MissingSelection.to_string(),
        "Please select both source and destination."
    );
    assert_eq!(
        QueryValidationError::SameSelection.to_string(),
        "Source and destination cannot be the same."
    );
}

#[test]
fn given_valid_selection_when_building_then_fields_are_carried_verbatim() {
    let query = QueryBuilder::default()
        .with_source("Main Gate")
        .with_destination("Block C")
        .with_algorithm("dijkstra")
        .with_campus(Campus::Outer)
        .build()
        .unwrap();

    assert_eq!(query.source.as_str(), "Main Gate");
    assert_eq!(query.destination.as_str(), "Block C");
    assert_eq!(query.algorithm, "dijkstra");
    assert_eq!(query.campus, Campus::Outer);
}

#[test]
fn given_no_algorithm_or_campus_when_building_then_defaults_apply() {
    let query = QueryBuilder::default()
        .with_source("A")
        .with_destination("B")
        .with_algorithm("")
        .build()
        .unwrap();

    assert_eq!(query.algorithm, "bfs");
    assert_eq!(query.campus, Campus::Deemed);
}

/// **VALUE**: Algorithm tokens the core does not know are forwarded untouched.
///
/// **WHY THIS MATTERS**: The routing service owns the list of algorithms; rejecting
/// unknown ones locally would hide the service's own error message.
#[test]
fn given_unknown_algorithm_token_when_building_then_passed_through() {
    let query = QueryBuilder::default()
        .with_source("A")
        .with_destination("B")
        .with_algorithm("astar")
        .build()
        .unwrap();

    assert_eq!(query.algorithm, "astar");
}
