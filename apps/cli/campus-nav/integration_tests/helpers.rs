use nav_core::config::NavConfig;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NODES_PATH: &str = "/api/nodes";
pub const NAVIGATE_PATH: &str = "/api/navigate";

/// Config pointing at `server` with a short request timeout.
pub fn config_for(server: &MockServer) -> NavConfig {
    let mut config = NavConfig::default();
    config.server.base_url = server.uri();
    config.server.request_timeout_ms = 2_000;
    config
}

pub async fn mount_nodes(server: &MockServer, campus: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(NODES_PATH))
        .and(query_param("campus", campus))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_route(server: &MockServer, from: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("from", from))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
