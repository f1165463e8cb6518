// Unit tests for logger module initialization logic
// Tests focus on idempotence and error handling

use crate::logger::{LOG_FILE_NAME, build_dispatch, initialize};

use std::path::PathBuf;

use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Tests and embedding code may initialize logging from several
/// places. fern panics if a global logger is installed twice.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), false);
    let result2 = initialize(temp_dir.path(), true);

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

/// **VALUE**: Verifies that an unwritable log directory yields an error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` were unwrapped.
#[test]
fn given_invalid_log_dir_when_dispatch_built_then_returns_startup_error() {
    // GIVEN: A path under a file, which can never be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&invalid_dir, false);

    // THEN: Should return a Startup error
    let err = result.err().expect("Should return error for invalid log directory");
    let err_string = format!("{:?}", err);
    assert!(
        err_string.contains("Startup"),
        "Error should be NavAppError::Startup variant"
    );
}

#[test]
fn given_valid_log_dir_when_dispatch_built_then_log_file_is_created() {
    let temp_dir = TempDir::new().unwrap();

    let result = build_dispatch(temp_dir.path(), true);

    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
