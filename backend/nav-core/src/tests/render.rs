use crate::render::{render, render_text};
use crate::ui::{HeadlessUi, UiState};

use models::{Location, QueryOutcome, QueryValidationError};

fn path(names: &[&str]) -> QueryOutcome {
    QueryOutcome::Path(names.iter().copied().map(Location::from).collect())
}

#[test]
fn given_path_when_rendered_then_joined_with_arrow() {
    let rendered = render_text(&path(&["A", "B", "C"])).unwrap();

    assert_eq!(rendered.text, "Path: A → B → C");
    assert!(!rendered.is_error);
}

#[test]
fn given_single_location_path_when_rendered_then_no_separator() {
    assert_eq!(render_text(&path(&["Gate"])).unwrap().text, "Path: Gate");
}

/// **VALUE**: "No path found." is styled as an error, same as real failures.
///
/// **WHY THIS MATTERS**: Empty results are deliberately given error styling so users
/// notice them; changing that is a product decision, not a refactor.
#[test]
fn given_empty_result_when_rendered_then_error_styled_message() {
    let rendered = render_text(&QueryOutcome::EmptyResult).unwrap();

    assert_eq!(rendered.text, "No path found.");
    assert!(rendered.is_error);
}

#[test]
fn given_errors_when_rendered_then_prefixed() {
    let app = render_text(&QueryOutcome::ApplicationError("No route".into())).unwrap();
    let transport = render_text(&QueryOutcome::TransportError("request timed out".into())).unwrap();

    assert_eq!(app.text, "Error: No route");
    assert_eq!(transport.text, "Error: request timed out");
    assert!(app.is_error && transport.is_error);
}

#[test]
fn given_invalid_outcome_when_rendered_then_shows_validation_message() {
    let rendered =
        render_text(&QueryOutcome::Invalid(QueryValidationError::MissingSelection)).unwrap();

    assert_eq!(rendered.text, "Please select both source and destination.");
    assert!(rendered.is_error);
}

/// **VALUE**: Rendering a cancellation only clears error styling.
///
/// **BUG THIS CATCHES**: Would catch if cancelled attempts overwrote the result area,
/// wiping out the message the user is currently reading.
#[test]
fn given_cancelled_when_rendered_to_ui_then_message_kept_and_style_cleared() {
    // GIVEN: A UI showing an error from a previous attempt
    let ui = HeadlessUi::new();
    ui.set_message("Error: previous");
    ui.set_error_style(true);

    // WHEN: Rendering a cancellation
    render(&QueryOutcome::Cancelled, &ui);

    // THEN: Message untouched, styling cleared
    let snapshot = ui.snapshot();
    assert_eq!(snapshot.message, "Error: previous");
    assert!(!snapshot.error_style);
    assert!(render_text(&QueryOutcome::Cancelled).is_none());
}
