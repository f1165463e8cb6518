//! Test helpers for routing-service integration tests.
//!
//! Every test gets its own `wiremock` server standing in for the external
//! routing service, plus a headless UI to assert against.

use nav_core::routing_client::RoutingClient;
use nav_core::ui::HeadlessUi;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NODES_PATH: &str = "/api/nodes";
pub const NAVIGATE_PATH: &str = "/api/navigate";

/// Short bound so timeout tests finish quickly.
pub const TEST_TIMEOUT: Duration = Duration::from_millis(200);

/// Delay comfortably past [`TEST_TIMEOUT`].
pub const SLOW: Duration = Duration::from_millis(800);

pub fn client_for(server: &MockServer) -> RoutingClient {
    RoutingClient::new(&server.uri()).expect("mock server URI should parse")
}

pub fn headless_ui() -> Arc<HeadlessUi> {
    Arc::new(HeadlessUi::new())
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Mount a `/api/nodes` reply for one campus.
pub async fn mount_nodes(server: &MockServer, campus: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(NODES_PATH))
        .and(query_param("campus", campus))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mount a `/api/navigate` reply keyed on the `from` parameter.
pub async fn mount_route(server: &MockServer, from: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("from", from))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Fail the test on drop if `/api/navigate` is ever called.
pub async fn forbid_route_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Base URL on which nothing is listening.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";
