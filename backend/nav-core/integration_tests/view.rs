use crate::helpers::{NAVIGATE_PATH, headless_ui, json_response, mount_nodes};

use nav_core::config::NavConfig;
use nav_core::error::CoreError;
use nav_core::ui::Widget;
use nav_core::view::NavigationView;

use models::{Campus, CatalogOutcome, QueryOutcome};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

fn config_for(server: &MockServer) -> NavConfig {
    let mut config = NavConfig::default();
    config.server.base_url = server.uri();
    config.server.request_timeout_ms = 500;
    config
}

/// **VALUE**: The campus resolved on activation drives both the catalog and later queries.
///
/// **WHY THIS MATTERS**: If queries used a different campus than the catalog, users
/// would pick locations from one graph and ask for a route on another.
#[tokio::test]
async fn given_hill_context_when_activated_then_catalog_and_queries_use_hill() {
    // GIVEN: A service that only answers for the hill campus
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json_response(200, json!(["Library", "Gate"]))).await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("campus", "hill"))
        .respond_with(json_response(200, json!(["Library", "Gate"])))
        .expect(1)
        .mount(&server)
        .await;
    let ui = headless_ui();
    let view = NavigationView::new(&config_for(&server), Arc::clone(&ui)).unwrap();

    // WHEN: Activating from a hill page and querying
    let loaded = view.activate("http://localhost:8080/HILL.html").await;
    let outcome = view.find_path("Library", "Gate", "bfs").await;

    // THEN: Everything ran against the hill campus
    assert_eq!(view.campus(), Campus::Hill);
    assert!(matches!(loaded, CatalogOutcome::Loaded(_)));
    assert!(matches!(outcome, QueryOutcome::Path(_)));
    let snapshot = ui.snapshot();
    assert_eq!(snapshot.options(Widget::Source).len(), 2);
    assert_eq!(snapshot.message, "Path: Library → Gate");
}

/// **VALUE**: A query fired before the catalog finishes does not disturb either flow.
///
/// **BUG THIS CATCHES**: Would catch if the two flows shared a generation counter or
/// cancel slot, in which case the query would cancel the catalog load or vice versa.
#[tokio::test]
async fn given_catalog_loading_when_query_submitted_then_both_complete() {
    let server = MockServer::start().await;
    mount_nodes(
        &server,
        "outer",
        json_response(200, json!(["Gate", "Hostel"])).set_delay(Duration::from_millis(120)),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .respond_with(json_response(200, json!(["Gate", "Hostel"])))
        .mount(&server)
        .await;
    let ui = headless_ui();
    let view = NavigationView::new(&config_for(&server), Arc::clone(&ui)).unwrap();

    let activate = view.activate("/outer/");
    let query = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        view.find_path("Gate", "Hostel", "dijkstra").await
    };
    let (loaded, outcome) = tokio::join!(activate, query);

    assert!(matches!(loaded, CatalogOutcome::Loaded(_)));
    assert!(matches!(outcome, QueryOutcome::Path(_)));
    let snapshot = ui.snapshot();
    assert_eq!(snapshot.options(Widget::Destination).len(), 2);
    assert_eq!(snapshot.message, "Path: Gate → Hostel");
}

#[tokio::test]
async fn given_unknown_context_when_activated_then_default_campus_is_loaded() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json_response(200, json!([]))).await;
    let ui = headless_ui();
    let view = NavigationView::new(&config_for(&server), Arc::clone(&ui)).unwrap();

    let loaded = view.activate("/index.html").await;

    assert_eq!(view.campus(), Campus::Deemed);
    assert_eq!(loaded, CatalogOutcome::Empty);
}

#[test]
fn given_unparseable_base_url_when_view_created_then_returns_routing_client_error() {
    let mut config = NavConfig::default();
    config.server.base_url = String::from("http://[::1");

    let result = NavigationView::new(&config, headless_ui());

    assert!(matches!(result, Err(CoreError::RoutingClient(_))));
}
