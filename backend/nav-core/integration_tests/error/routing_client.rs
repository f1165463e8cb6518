use nav_core::error::CoreError;
use nav_core::error::routing_client::RoutingClientError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies that `RoutingClientError::Server` shows status, body and location.
///
/// **WHY THIS MATTERS**: Catalog failures are collapsed into a single "error" placeholder
/// for users. The log line built from this error is the only place operators can see
/// which status the routing service returned and where it was handled.
#[test]
fn given_server_error_when_formatted_then_includes_status_and_location() {
    // GIVEN: A Server error with location
    let err = RoutingClientError::Server {
        status: HttpStatusCode(503),
        message: "maintenance".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting the error as string
    let error_string = err.to_string();

    // THEN: Should include error type, status, message, and file location
    assert!(error_string.contains("Server Error"));
    assert!(error_string.contains("HTTP 503"));
    assert!(error_string.contains("maintenance"));
    assert!(error_string.contains("routing_client.rs"));
}

#[test]
fn given_url_parse_failure_when_converted_then_location_points_at_conversion_site() {
    let parse_error = url::Url::parse("::").unwrap_err();

    let expected_line = line!() + 1;
    let err = RoutingClientError::from(parse_error);

    match err {
        RoutingClientError::UrlParse { location, .. } => {
            assert_eq!(location.line, expected_line);
            assert!(location.file.contains("routing_client.rs"));
        }
        other => panic!("Expected UrlParse, got {other:?}"),
    }
}

#[test]
fn given_timeout_and_connect_errors_when_asked_for_user_reason_then_short_text() {
    let location = ErrorLocation::from(Location::caller());
    let timeout = RoutingClientError::Timeout {
        message: "deadline".into(),
        location,
    };
    let connect = RoutingClientError::Connect {
        message: "refused".into(),
        location,
    };
    let json = RoutingClientError::Json {
        message: "expected array".into(),
        location,
    };

    assert_eq!(timeout.user_reason(), Some("request timed out"));
    assert_eq!(connect.user_reason(), Some("could not reach the routing service"));
    assert_eq!(json.user_reason(), None);
}

#[test]
fn given_routing_client_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let inner = RoutingClientError::Json {
        message: "bad body".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = inner.to_string();

    let core: CoreError = inner.into();

    assert_eq!(core.to_string(), expected);
}
