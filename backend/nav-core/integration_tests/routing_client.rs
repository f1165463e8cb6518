use crate::helpers::{
    NODES_PATH, UNREACHABLE_BASE_URL, client_for, json_response, mount_nodes, mount_route,
};

use nav_core::error::routing_client::RoutingClientError;
use nav_core::routing_client::RoutingClient;

use common::HttpStatusCode;
use models::{Campus, Location, QueryBuilder};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// fetch_nodes()
// ============================================================================

/// **VALUE**: Verifies the catalog request bypasses every cache layer.
///
/// **WHY THIS MATTERS**: Location sets change between deployments. A cached response
/// would show locations that no longer exist, and queries on them would fail.
///
/// **BUG THIS CATCHES**: Would catch if the cache-busting parameter or the no-cache
/// headers were dropped during a refactor of request construction.
#[tokio::test]
async fn given_campus_when_fetch_nodes_then_request_is_cache_busted() {
    // GIVEN: A routing service with a catalog for the hill campus
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json_response(200, json!(["Library"]))).await;
    let client = client_for(&server);

    // WHEN: Fetching locations
    let locations = client.fetch_nodes(Campus::Hill).await.unwrap();

    // THEN: The body is returned and the request carried no-cache semantics
    assert_eq!(locations, vec![Location::from("Library")]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.headers.get("cache-control").unwrap(), "no-cache");
    assert_eq!(request.headers.get("pragma").unwrap(), "no-cache");
    assert!(
        request.url.query_pairs().any(|(key, value)| key == "_" && !value.is_empty()),
        "cache-busting parameter should be present"
    );
}

#[tokio::test]
async fn given_server_error_when_fetch_nodes_then_returns_server_error_with_status() {
    let server = MockServer::start().await;
    mount_nodes(&server, "outer", json_response(400, json!(["Invalid campus."]))).await;

    let result = client_for(&server).fetch_nodes(Campus::Outer).await;

    match result {
        Err(RoutingClientError::Server { status, message, .. }) => {
            assert_eq!(status, HttpStatusCode(400));
            assert!(message.contains("Invalid campus."));
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_array_body_when_fetch_nodes_then_returns_json_error() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json_response(200, json!({"nodes": []}))).await;

    let result = client_for(&server).fetch_nodes(Campus::Deemed).await;

    assert!(matches!(result, Err(RoutingClientError::Json { .. })));
}

#[tokio::test]
async fn given_base_url_with_path_when_fetch_nodes_then_endpoint_is_appended() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/campus{NODES_PATH}")))
        .respond_with(json_response(200, json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RoutingClient::new(&format!("{}/campus", server.uri())).unwrap();
    let locations = client.fetch_nodes(Campus::Deemed).await.unwrap();

    assert!(locations.is_empty());
}

// ============================================================================
// navigate()
// ============================================================================

/// **VALUE**: All four query parameters reach the service, URL-encoded.
///
/// **WHY THIS MATTERS**: Location names contain spaces and slashes. Unencoded names
/// would split the query string and the service would route between the wrong points.
#[tokio::test]
async fn given_query_when_navigate_then_parameters_are_encoded() {
    let server = MockServer::start().await;
    mount_route(&server, "Block A / Lab 1", json_response(200, json!(["Block A / Lab 1", "Gate"])))
        .await;

    let query = QueryBuilder::default()
        .with_source("Block A / Lab 1")
        .with_destination("Gate")
        .with_algorithm("dijkstra")
        .with_campus(Campus::Outer)
        .build()
        .unwrap();

    let response = client_for(&server).navigate(&query).await.unwrap();

    assert_eq!(response.status, HttpStatusCode(200));
    assert_eq!(response.body, Some(json!(["Block A / Lab 1", "Gate"])));

    let requests = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("to".into(), "Gate".into())));
    assert!(pairs.contains(&("algorithm".into(), "dijkstra".into())));
    assert!(pairs.contains(&("campus".into(), "outer".into())));
}

#[tokio::test]
async fn given_rejection_when_navigate_then_returns_response_not_error() {
    let server = MockServer::start().await;
    mount_route(&server, "A", json_response(400, json!(["Invalid algorithm."]))).await;

    let query = QueryBuilder::default()
        .with_source("A")
        .with_destination("B")
        .build()
        .unwrap();

    let response = client_for(&server).navigate(&query).await.unwrap();

    assert_eq!(response.status, HttpStatusCode(400));
    assert_eq!(response.body, Some(json!(["Invalid algorithm."])));
}

#[tokio::test]
async fn given_plain_text_body_when_navigate_then_body_is_none() {
    let server = MockServer::start().await;
    mount_route(
        &server,
        "A",
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let query = QueryBuilder::default()
        .with_source("A")
        .with_destination("B")
        .build()
        .unwrap();

    let response = client_for(&server).navigate(&query).await.unwrap();

    assert_eq!(response.status, HttpStatusCode(502));
    assert!(response.body.is_none());
}

#[tokio::test]
async fn given_unreachable_service_when_navigate_then_returns_transport_error() {
    let client = RoutingClient::new(UNREACHABLE_BASE_URL).unwrap();
    let query = QueryBuilder::default()
        .with_source("A")
        .with_destination("B")
        .build()
        .unwrap();

    let error = client.navigate(&query).await.unwrap_err();

    assert!(
        matches!(
            error,
            RoutingClientError::Connect { .. } | RoutingClientError::Http { .. }
        ),
        "unexpected error: {error:?}"
    );
}

#[test]
fn given_invalid_base_url_when_client_created_then_returns_url_parse_error() {
    let result = RoutingClient::new("not a url");

    assert!(matches!(result, Err(RoutingClientError::UrlParse { .. })));
}
