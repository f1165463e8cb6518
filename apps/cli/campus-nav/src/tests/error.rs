// Unit tests for error module
// Tests error serialization (used for --json output)

use crate::error::NavAppError;

use nav_core::error::CoreError;
use nav_core::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized for `--json` output.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a non-serializable field.
#[test]
fn given_nav_app_error_when_serialized_then_succeeds() {
    // GIVEN: A NavAppError
    let err = NavAppError::Startup {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let json = serde_json::to_string(&err).expect("Error should be serializable");

    // THEN: Should contain the tag and the message
    assert!(json.contains(r#""type":"Startup""#), "JSON should contain variant name");
    assert!(json.contains("Test"), "JSON should contain message");
}

#[test]
fn given_core_error_when_converted_then_message_is_preserved() {
    let core = CoreError::Config(ConfigError::Invalid {
        field: "server.base_url",
        message: String::from("ftp://x is not an http(s) URL"),
        location: ErrorLocation::from(Location::caller()),
    });

    let err = NavAppError::from(core);

    match err {
        NavAppError::Core { message, location } => {
            assert!(message.contains("server.base_url"));
            assert!(location.file.contains("error.rs"));
        }
        other => panic!("Expected Core, got {other:?}"),
    }
}
