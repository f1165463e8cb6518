use crate::helpers::{
    SLOW, TEST_TIMEOUT, UNREACHABLE_BASE_URL, client_for, forbid_route_requests, headless_ui,
    json_response, mount_route,
};

use nav_core::orchestrator::PathQueryOrchestrator;
use nav_core::routing_client::RoutingClient;
use nav_core::ui::{HeadlessUi, UiState};

use models::{Campus, Location, QueryOutcome, QueryValidationError};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::MockServer;

fn orchestrator_for(server: &MockServer, ui: &Arc<HeadlessUi>) -> PathQueryOrchestrator<HeadlessUi> {
    PathQueryOrchestrator::new(client_for(server), Arc::clone(ui)).with_timeout(TEST_TIMEOUT)
}

// ----------------------------------------------------------------------------
// Validation (no network)
// ----------------------------------------------------------------------------

/// **VALUE**: An empty selection never reaches the routing service.
///
/// **WHY THIS MATTERS**: The service answers empty parameters with a 400 and a
/// cryptic message. The user should instead be told to pick both ends.
///
/// **BUG THIS CATCHES**: Would catch if validation moved after request issuance,
/// or if the empty check were dropped. The mock fails the test on drop if called.
#[tokio::test]
async fn given_empty_selection_when_submit_then_no_request_and_select_both_message() {
    // GIVEN: A routing service that must not be called
    let server = MockServer::start().await;
    forbid_route_requests(&server).await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    // WHEN: Submitting with missing source, then missing destination
    let missing_source = orchestrator.submit("", "Library", "bfs", Campus::Deemed).await;
    let missing_destination = orchestrator.submit("Library", "", "bfs", Campus::Deemed).await;

    // THEN: Both are rejected locally with the "select both" message
    let expected = QueryOutcome::Invalid(QueryValidationError::MissingSelection);
    assert_eq!(missing_source, expected);
    assert_eq!(missing_destination, expected);

    let snapshot = ui.snapshot();
    assert_eq!(snapshot.message, "Please select both source and destination.");
    assert!(snapshot.error_style);
}

#[tokio::test]
async fn given_same_selection_when_submit_then_no_request_and_cannot_be_same_message() {
    let server = MockServer::start().await;
    forbid_route_requests(&server).await;
    let ui = headless_ui();

    let outcome = orchestrator_for(&server, &ui)
        .submit("Library", "Library", "bfs", Campus::Hill)
        .await;

    assert_eq!(outcome, QueryOutcome::Invalid(QueryValidationError::SameSelection));
    assert_eq!(ui.snapshot().message, "Source and destination cannot be the same.");
    assert!(ui.snapshot().error_style);
}

// ----------------------------------------------------------------------------
// Classification and rendering
// ----------------------------------------------------------------------------

#[tokio::test]
async fn given_path_response_when_submit_then_renders_arrow_joined_path() {
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(200, json!(["A", "B", "C"]))).await;
    let ui = headless_ui();

    let outcome = orchestrator_for(&server, &ui)
        .submit("A", "C", "bfs", Campus::Deemed)
        .await;

    assert_eq!(
        outcome,
        QueryOutcome::Path(vec![Location::from("A"), Location::from("B"), Location::from("C")])
    );
    let snapshot = ui.snapshot();
    assert_eq!(snapshot.message, "Path: A → B → C");
    assert!(!snapshot.error_style);
}

#[tokio::test]
async fn given_empty_response_when_submit_then_renders_no_path_found_as_error() {
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(200, json!([]))).await;
    let ui = headless_ui();

    let outcome = orchestrator_for(&server, &ui)
        .submit("A", "Z", "dijkstra", Campus::Outer)
        .await;

    assert_eq!(outcome, QueryOutcome::EmptyResult);
    assert_eq!(ui.snapshot().message, "No path found.");
    assert!(ui.snapshot().error_style);
}

#[tokio::test]
async fn given_rejection_when_submit_then_renders_server_message() {
    let server = MockServer::start().await;
    mount_route(
        &server,
        "A",
        json_response(400, json!(["No route between selected points"])),
    )
    .await;
    let ui = headless_ui();

    let outcome = orchestrator_for(&server, &ui)
        .submit("A", "B", "bfs", Campus::Hill)
        .await;

    assert_eq!(
        outcome,
        QueryOutcome::ApplicationError("No route between selected points".to_string())
    );
    assert_eq!(ui.snapshot().message, "Error: No route between selected points");
    assert!(ui.snapshot().error_style);
}

#[tokio::test]
async fn given_unreachable_service_when_submit_then_renders_transport_error() {
    let ui = headless_ui();
    let client = RoutingClient::new(UNREACHABLE_BASE_URL).unwrap();
    let orchestrator = PathQueryOrchestrator::new(client, Arc::clone(&ui)).with_timeout(TEST_TIMEOUT);

    let outcome = orchestrator.submit("A", "B", "bfs", Campus::Deemed).await;

    assert!(matches!(outcome, QueryOutcome::TransportError(_)), "got {outcome:?}");
    assert!(ui.snapshot().message.starts_with("Error: "));
    assert!(ui.snapshot().error_style);
}

/// **VALUE**: Error styling from a failed attempt is cleared by the next successful one.
///
/// **BUG THIS CATCHES**: Would catch if the "clear styling at start of attempt" step
/// were removed and a successful path rendered in error colours.
#[tokio::test]
async fn given_previous_error_when_next_submit_succeeds_then_error_style_cleared() {
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(200, json!(["A", "B"]))).await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    orchestrator.submit("A", "A", "bfs", Campus::Deemed).await;
    assert!(ui.snapshot().error_style);

    orchestrator.submit("A", "B", "bfs", Campus::Deemed).await;

    let snapshot = ui.snapshot();
    assert_eq!(snapshot.message, "Path: A → B");
    assert!(!snapshot.error_style);
}

// ----------------------------------------------------------------------------
// Timeouts, cancellation and supersession
// ----------------------------------------------------------------------------

/// **VALUE**: A request that outlives the timeout is abandoned and reported as an error.
///
/// **WHY THIS MATTERS**: Without the bound, a hung routing service leaves the user
/// staring at a stale result forever. After the timeout nothing may touch the UI.
///
/// **BUG THIS CATCHES**: Would catch if the timeout were not applied, or if the
/// abandoned request still rendered when its delayed reply arrived.
#[tokio::test]
async fn given_slow_service_when_submit_then_times_out_and_stays_quiet() {
    // GIVEN: A service that answers long after the timeout
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(200, json!(["A", "B"])).set_delay(SLOW)).await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    // WHEN: Submitting
    let outcome = orchestrator.submit("A", "B", "bfs", Campus::Deemed).await;

    // THEN: A timeout error is rendered
    assert_eq!(
        outcome,
        QueryOutcome::TransportError(format!(
            "request timed out after {} ms",
            TEST_TIMEOUT.as_millis()
        ))
    );
    let after_timeout = ui.snapshot();
    assert_eq!(after_timeout.message, "Error: request timed out after 200 ms");
    assert!(after_timeout.error_style);

    // AND: Nothing changes once the slow reply would have arrived
    tokio::time::sleep(SLOW).await;
    assert_eq!(ui.snapshot(), after_timeout);
}

/// **VALUE**: Only the latest query is ever rendered when queries overlap.
///
/// **WHY THIS MATTERS**: Users often change a selection and resubmit while the first
/// query is still running. Showing the first route after the second was requested
/// would display a path between points the user no longer selected.
#[tokio::test]
async fn given_second_submit_before_first_resolves_when_first_is_slower_then_only_second_rendered() {
    // GIVEN: The first query is slow, the second is fast
    let server = MockServer::start().await;
    mount_route(
        &server,
        "A",
        json_response(200, json!(["A", "X", "B"])).set_delay(Duration::from_millis(150)),
    )
    .await;
    mount_route(&server, "C", json_response(200, json!(["C", "D"]))).await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    // WHEN: The second query is submitted while the first is in flight
    let first = orchestrator.submit("A", "B", "bfs", Campus::Hill);
    let second = async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        orchestrator.submit("C", "D", "bfs", Campus::Hill).await
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    // THEN: The first is dropped, the second is what the user sees
    assert_eq!(first_outcome, QueryOutcome::Cancelled);
    assert_eq!(
        second_outcome,
        QueryOutcome::Path(vec![Location::from("C"), Location::from("D")])
    );

    let rendered = ui.snapshot();
    assert_eq!(rendered.message, "Path: C → D");

    // AND: The first query's delayed reply never lands
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(ui.snapshot(), rendered);
}

#[tokio::test]
async fn given_second_submit_before_first_resolves_when_second_is_slower_then_only_second_rendered() {
    let server = MockServer::start().await;
    mount_route(
        &server,
        "A",
        json_response(200, json!(["A", "B"])).set_delay(Duration::from_millis(60)),
    )
    .await;
    mount_route(
        &server,
        "C",
        json_response(400, json!(["Invalid campus."])).set_delay(Duration::from_millis(120)),
    )
    .await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    let first = orchestrator.submit("A", "B", "bfs", Campus::Hill);
    let second = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        orchestrator.submit("C", "D", "bfs", Campus::Hill).await
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    assert_eq!(first_outcome, QueryOutcome::Cancelled);
    assert_eq!(
        second_outcome,
        QueryOutcome::ApplicationError("Invalid campus.".to_string())
    );
    assert_eq!(ui.snapshot().message, "Error: Invalid campus.");
}

/// **VALUE**: A locally rejected submit still supersedes the query in flight.
///
/// **WHY THIS MATTERS**: After the user picks the same point twice, the validation
/// message is the last thing they asked for. A slow route from the earlier
/// selection must not replace it.
///
/// **BUG THIS CATCHES**: Would catch if the validation path returned early without
/// cancelling the in-flight request or advancing the generation.
#[tokio::test]
async fn given_slow_query_in_flight_when_invalid_submit_follows_then_validation_message_stays() {
    // GIVEN: A first query whose reply is slow
    let server = MockServer::start().await;
    mount_route(
        &server,
        "A",
        json_response(200, json!(["A", "B"])).set_delay(Duration::from_millis(150)),
    )
    .await;
    let ui = headless_ui();
    let orchestrator = orchestrator_for(&server, &ui);

    // WHEN: An invalid query is submitted while the first is in flight
    let first = orchestrator.submit("A", "B", "bfs", Campus::Deemed);
    let second = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        orchestrator.submit("X", "X", "bfs", Campus::Deemed).await
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    // THEN: The first is dropped and the validation message is shown
    assert_eq!(first_outcome, QueryOutcome::Cancelled);
    assert_eq!(
        second_outcome,
        QueryOutcome::Invalid(QueryValidationError::SameSelection)
    );
    let rendered = ui.snapshot();
    assert_eq!(rendered.message, "Source and destination cannot be the same.");
    assert!(rendered.error_style);

    // AND: The slow reply never lands
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(ui.snapshot(), rendered);
}

#[tokio::test]
async fn given_in_flight_query_when_cancelled_then_only_error_style_is_cleared() {
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(200, json!(["A", "B"])).set_delay(SLOW)).await;
    let ui = headless_ui();
    ui.set_message("Error: earlier failure");
    ui.set_error_style(true);
    let orchestrator =
        PathQueryOrchestrator::new(client_for(&server), Arc::clone(&ui)).with_timeout(SLOW * 2);

    let submit = orchestrator.submit("A", "B", "bfs", Campus::Deemed);
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        orchestrator.cancel()
    };
    let (outcome, cancelled) = tokio::join!(submit, cancel);

    assert!(cancelled);
    assert_eq!(outcome, QueryOutcome::Cancelled);
    let snapshot = ui.snapshot();
    assert_eq!(snapshot.message, "Error: earlier failure");
    assert!(!snapshot.error_style);
}

#[tokio::test]
async fn given_nothing_in_flight_when_cancelled_then_returns_false() {
    let server = MockServer::start().await;
    let ui = headless_ui();

    assert!(!orchestrator_for(&server, &ui).cancel());
}
