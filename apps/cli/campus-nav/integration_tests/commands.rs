//! End-to-end command tests against a mock routing service.

use crate::helpers::{NAVIGATE_PATH, config_for, mount_nodes, mount_route};

use campus_nav::cli::Command;
use campus_nav::commands::run;

use models::Campus;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn locations(context: &str) -> Command {
    Command::Locations {
        context: Some(context.to_string()),
    }
}

fn route(from: &str, to: &str, algorithm: Option<&str>, context: &str) -> Command {
    Command::Route {
        from: from.to_string(),
        to: to.to_string(),
        algorithm: algorithm.map(str::to_string),
        context: Some(context.to_string()),
    }
}

/// **VALUE**: `locations` resolves the campus from the context and lists the
/// catalog in service order.
///
/// **BUG THIS CATCHES**: Would catch if the context were ignored and the default
/// campus queried, or if the list were sorted.
#[tokio::test]
async fn given_hill_context_when_locations_run_then_lists_hill_catalog() {
    // GIVEN: A service with a hill catalog
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json!(["Zoology", "Admin Block"])).await;

    // WHEN: Listing locations from a hill page
    let report = run(&locations("https://campus.example/hill/map"), &config_for(&server))
        .await
        .unwrap();

    // THEN: The hill catalog is reported as-is
    assert_eq!(report.campus, Campus::Hill);
    assert_eq!(report.locations, vec!["Zoology", "Admin Block"]);
    assert!(!report.is_error);
}

#[tokio::test]
async fn given_empty_catalog_when_locations_run_then_reports_placeholder() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json!([])).await;

    let report = run(&locations("/"), &config_for(&server)).await.unwrap();

    assert!(report.locations.is_empty());
    assert_eq!(report.message.as_deref(), Some("No locations available"));
    assert!(!report.is_error);
}

#[tokio::test]
async fn given_failing_service_when_locations_run_then_reports_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = run(&locations("/outer/"), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(report.campus, Campus::Outer);
    assert_eq!(report.message.as_deref(), Some("Error loading locations"));
    assert!(report.is_error);
}

/// **VALUE**: `route` renders the path exactly as the page would.
///
/// **BUG THIS CATCHES**: Would catch a wrong separator or a missing `campus`
/// parameter on the navigate request.
#[tokio::test]
async fn given_valid_route_when_run_then_renders_path() {
    // GIVEN: A service that knows a path on the outer campus
    let server = MockServer::start().await;
    mount_nodes(&server, "outer", json!(["Gate", "Lab"])).await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("from", "Gate"))
        .and(query_param("to", "Lab"))
        .and(query_param("algorithm", "dijkstra"))
        .and(query_param("campus", "outer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Gate", "Quad", "Lab"])))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Routing with an explicit algorithm
    let report = run(
        &route("Gate", "Lab", Some("dijkstra"), "/outer/"),
        &config_for(&server),
    )
    .await
    .unwrap();

    // THEN: The path is rendered without error styling
    assert_eq!(report.message.as_deref(), Some("Path: Gate → Quad → Lab"));
    assert!(!report.is_error);
}

#[tokio::test]
async fn given_no_algorithm_when_route_run_then_config_default_is_sent() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json!(["A", "B"])).await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("algorithm", "bfs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["A", "B"])))
        .expect(1)
        .mount(&server)
        .await;

    let report = run(&route("A", "B", None, "/"), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(report.message.as_deref(), Some("Path: A → B"));
}

#[tokio::test]
async fn given_unknown_algorithm_when_route_run_then_token_is_forwarded() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json!(["A", "B"])).await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .and(query_param("algorithm", "astar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["A", "B"])))
        .expect(1)
        .mount(&server)
        .await;

    let report = run(&route("A", "B", Some("astar"), "/"), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(report.message.as_deref(), Some("Path: A → B"));
}

/// **VALUE**: Validation failures never reach the network.
///
/// **BUG THIS CATCHES**: Would catch if a query with a missing endpoint were
/// still sent and the service's error shown instead.
#[tokio::test]
async fn given_missing_destination_when_route_run_then_validation_message_shown() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json!(["A", "B"])).await;
    Mock::given(method("GET"))
        .and(path(NAVIGATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = run(&route("A", "", None, "/"), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(
        report.message.as_deref(),
        Some("Please select both source and destination.")
    );
    assert!(report.is_error);
}

#[tokio::test]
async fn given_service_rejection_when_route_run_then_error_message_shown() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json!(["A", "B"])).await;
    mount_route(&server, "A", 400, json!(["Unknown node: B"])).await;

    let report = run(&route("A", "B", None, "/"), &config_for(&server))
        .await
        .unwrap();

    assert_eq!(report.message.as_deref(), Some("Error: Unknown node: B"));
    assert!(report.is_error);
}

#[tokio::test]
async fn given_unparseable_base_url_when_run_then_returns_core_error() {
    let mut config = nav_core::config::NavConfig::default();
    config.server.base_url = String::from("http://[::1");

    let result = run(&locations("/"), &config).await;

    assert!(matches!(result, Err(campus_nav::error::NavAppError::Core { .. })));
}
