// Unit tests for response classification.
// The end-to-end path through a real HTTP server is in integration_tests/orchestrator.rs.

use crate::error::routing_client::RoutingClientError;
use crate::orchestrator::{MALFORMED_RESPONSE_MESSAGE, UNKNOWN_ERROR_MESSAGE, classify};
use crate::routing_client::RouteResponse;

use common::{ErrorLocation, HttpStatusCode};
use models::{Location, QueryOutcome};

use std::panic::Location as PanicLocation;

use serde_json::json;

fn response(status: u16, body: serde_json::Value) -> Result<RouteResponse, RoutingClientError> {
    Ok(RouteResponse {
        status: HttpStatusCode(status),
        body: Some(body),
    })
}

#[test]
fn given_success_with_names_when_classified_then_path_in_order() {
    let outcome = classify(response(200, json!(["A", "B", "C"])));

    assert_eq!(
        outcome,
        QueryOutcome::Path(vec![Location::from("A"), Location::from("B"), Location::from("C")])
    );
}

#[test]
fn given_success_with_empty_array_when_classified_then_empty_result() {
    assert_eq!(classify(response(200, json!([]))), QueryOutcome::EmptyResult);
}

/// **VALUE**: A 200 whose body is JSON but not an array counts as "no path".
///
/// **WHY THIS MATTERS**: The routing service has been seen returning `{}` or `null`
/// for unreachable destinations; those must not crash or show as a path.
#[test]
fn given_success_with_non_array_when_classified_then_empty_result() {
    assert_eq!(classify(response(200, json!({"path": []}))), QueryOutcome::EmptyResult);
    assert_eq!(classify(response(200, json!(null))), QueryOutcome::EmptyResult);
}

#[test]
fn given_success_with_unparseable_body_when_classified_then_application_error() {
    let outcome = classify(Ok(RouteResponse {
        status: HttpStatusCode(200),
        body: None,
    }));

    assert_eq!(
        outcome,
        QueryOutcome::ApplicationError(MALFORMED_RESPONSE_MESSAGE.to_string())
    );
}

/// **VALUE**: The first element of a non-200 array body is shown to the user verbatim.
///
/// **BUG THIS CATCHES**: Would catch if the server's message were replaced with the
/// generic status text, hiding why the query was rejected.
#[test]
fn given_rejection_with_message_when_classified_then_application_error_uses_it() {
    let outcome = classify(response(400, json!(["No route between selected points", "extra"])));

    assert_eq!(
        outcome,
        QueryOutcome::ApplicationError("No route between selected points".to_string())
    );
}

/// **VALUE**: A falsy first element (`false`, `0`) counts as no message at all.
///
/// **BUG THIS CATCHES**: Would catch the user being shown a bare `false` or `0`
/// instead of the status fallback.
#[test]
fn given_rejection_with_falsy_first_element_when_classified_then_status_fallback() {
    let expected = QueryOutcome::ApplicationError("Network response was not ok: 400".to_string());

    assert_eq!(classify(response(400, json!([false]))), expected);
    assert_eq!(classify(response(400, json!([0]))), expected);
    assert_eq!(classify(response(400, json!([0.0]))), expected);
}

#[test]
fn given_rejection_with_truthy_non_string_when_classified_then_json_text_shown() {
    assert_eq!(
        classify(response(400, json!([42]))),
        QueryOutcome::ApplicationError("42".to_string())
    );
    assert_eq!(
        classify(response(400, json!([true]))),
        QueryOutcome::ApplicationError("true".to_string())
    );
}

#[test]
fn given_rejection_without_usable_message_when_classified_then_status_fallback() {
    let expected = QueryOutcome::ApplicationError("Network response was not ok: 500".to_string());

    assert_eq!(classify(response(500, json!([]))), expected);
    assert_eq!(classify(response(500, json!({"error": "x"}))), expected);
    assert_eq!(classify(response(500, json!([""]))), expected);
    assert_eq!(classify(response(500, json!([null]))), expected);
    assert_eq!(
        classify(Ok(RouteResponse {
            status: HttpStatusCode(500),
            body: None,
        })),
        expected
    );
}

#[test]
fn given_transport_timeout_when_classified_then_reason_is_user_safe() {
    let error = RoutingClientError::Timeout {
        message: "operation timed out for url http://10.0.0.1/api/navigate".to_string(),
        location: ErrorLocation::from(PanicLocation::caller()),
    };

    let outcome = classify(Err(error));

    assert_eq!(outcome, QueryOutcome::TransportError("request timed out".to_string()));
}

/// **VALUE**: Transport failures without a user-safe reason fall back to a generic message.
///
/// **WHY THIS MATTERS**: Raw error text contains URLs and source locations; those belong
/// in the log, not in the result area.
#[test]
fn given_other_transport_failure_when_classified_then_generic_fallback() {
    let error = RoutingClientError::Http {
        message: "error decoding response body".to_string(),
        location: ErrorLocation::from(PanicLocation::caller()),
    };

    let outcome = classify(Err(error));

    match outcome {
        QueryOutcome::TransportError(message) => {
            assert_eq!(message, UNKNOWN_ERROR_MESSAGE);
            assert!(!message.contains("decoding"));
        }
        other => panic!("Expected TransportError, got {other:?}"),
    }
}
