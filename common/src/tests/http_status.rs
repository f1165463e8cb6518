use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_checked_then_success() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(302).is_success());
    assert!(!HttpStatusCode(400).is_success());
}

/// **VALUE**: The routing service signals rejected queries with 400 and crashes with 5xx.
///
/// **WHY THIS MATTERS**: Operator logs distinguish the two so a misconfigured campus
/// is not mistaken for an outage.
#[test]
fn given_error_codes_when_categorized_then_client_and_server_are_disjoint() {
    let bad_request = HttpStatusCode::from(400);
    let unavailable = HttpStatusCode::from(503);

    assert!(bad_request.is_client_error());
    assert!(!bad_request.is_server_error());
    assert!(unavailable.is_server_error());
    assert!(!unavailable.is_client_error());
}

#[test]
fn given_status_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode(404).to_string(), "404");
}
