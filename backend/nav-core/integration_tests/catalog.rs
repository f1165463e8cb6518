use crate::helpers::{SLOW, TEST_TIMEOUT, client_for, headless_ui, json_response, mount_nodes};

use nav_core::catalog::{
    CatalogLoader, EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER, LOADING_PLACEHOLDER,
};
use nav_core::ui::{HeadlessUi, SelectOption, UiSnapshot, Widget};

use models::{Campus, CatalogOutcome, Location};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

fn loader_for(server: &MockServer, ui: &Arc<HeadlessUi>) -> CatalogLoader<HeadlessUi> {
    CatalogLoader::new(client_for(server), Arc::clone(ui)).with_timeout(TEST_TIMEOUT)
}

fn labels(snapshot: &UiSnapshot, widget: Widget) -> Vec<String> {
    snapshot
        .options(widget)
        .iter()
        .map(|option| option.label.clone())
        .collect()
}

fn assert_single_placeholder(snapshot: &UiSnapshot, label: &str) {
    for widget in Widget::BOTH {
        assert_eq!(
            snapshot.options(widget),
            &[SelectOption::placeholder(label)],
            "{widget:?} should show only the {label:?} placeholder"
        );
    }
}

/// **VALUE**: Both selectors end up with exactly the catalog, in service order.
///
/// **WHY THIS MATTERS**: The service sorts names for display. Re-ordering or
/// de-duplicating locally would make the two selectors disagree with the service.
#[tokio::test]
async fn given_catalog_when_load_then_both_widgets_show_it_in_order() {
    // GIVEN: A catalog for the hill campus
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json_response(200, json!(["Library", "Admin", "Canteen"])))
        .await;
    let ui = headless_ui();

    // WHEN: Loading
    let outcome = loader_for(&server, &ui).load(Campus::Hill).await;

    // THEN: Loaded, and both widgets carry the same enabled options
    match outcome {
        CatalogOutcome::Loaded(catalog) => {
            assert_eq!(catalog.campus(), Campus::Hill);
            assert_eq!(catalog.locations()[0], Location::from("Library"));
        }
        other => panic!("Expected Loaded, got {other:?}"),
    }

    let snapshot = ui.snapshot();
    for widget in Widget::BOTH {
        assert_eq!(labels(&snapshot, widget), vec!["Library", "Admin", "Canteen"]);
        assert!(snapshot.options(widget).iter().all(|option| !option.disabled));
    }
}

#[tokio::test]
async fn given_empty_catalog_when_load_then_no_locations_placeholder() {
    let server = MockServer::start().await;
    mount_nodes(&server, "outer", json_response(200, json!([]))).await;
    let ui = headless_ui();

    let outcome = loader_for(&server, &ui).load(Campus::Outer).await;

    assert_eq!(outcome, CatalogOutcome::Empty);
    assert_single_placeholder(&ui.snapshot(), EMPTY_PLACEHOLDER);
}

#[tokio::test]
async fn given_server_error_when_load_then_error_placeholder() {
    let server = MockServer::start().await;
    mount_nodes(&server, "deemed", json_response(500, json!(["boom"]))).await;
    let ui = headless_ui();

    let outcome = loader_for(&server, &ui).load(Campus::Deemed).await;

    assert_eq!(outcome, CatalogOutcome::Failed);
    assert_single_placeholder(&ui.snapshot(), ERROR_PLACEHOLDER);
}

#[tokio::test]
async fn given_malformed_body_when_load_then_error_placeholder() {
    let server = MockServer::start().await;
    mount_nodes(
        &server,
        "deemed",
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;
    let ui = headless_ui();

    assert_eq!(loader_for(&server, &ui).load(Campus::Deemed).await, CatalogOutcome::Failed);
    assert_single_placeholder(&ui.snapshot(), ERROR_PLACEHOLDER);
}

#[tokio::test]
async fn given_slow_service_when_load_then_times_out_to_error_placeholder() {
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json_response(200, json!(["Library"])).set_delay(SLOW)).await;
    let ui = headless_ui();

    let outcome = loader_for(&server, &ui).load(Campus::Hill).await;

    assert_eq!(outcome, CatalogOutcome::Failed);
    let after_timeout = ui.snapshot();
    assert_single_placeholder(&after_timeout, ERROR_PLACEHOLDER);

    tokio::time::sleep(SLOW).await;
    assert_eq!(ui.snapshot(), after_timeout, "late reply must not be applied");
}

/// **VALUE**: Stale options are hidden while a load is pending.
///
/// **BUG THIS CATCHES**: Would catch if the loading placeholder were skipped, which
/// would leave the previous campus's locations selectable during the request.
#[tokio::test]
async fn given_load_in_progress_when_observed_then_loading_placeholder_shown() {
    let server = MockServer::start().await;
    mount_nodes(
        &server,
        "outer",
        json_response(200, json!(["Gate"])).set_delay(Duration::from_millis(100)),
    )
    .await;
    let ui = headless_ui();
    let loader = loader_for(&server, &ui);

    let load = loader.load(Campus::Outer);
    let probe = async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        ui.snapshot()
    };
    let (outcome, during) = tokio::join!(load, probe);

    assert_single_placeholder(&during, LOADING_PLACEHOLDER);
    assert!(matches!(outcome, CatalogOutcome::Loaded(_)));
    assert_eq!(labels(&ui.snapshot(), Widget::Source), vec!["Gate"]);
}

/// **VALUE**: Two loads in quick succession leave only the later one's result.
///
/// **WHY THIS MATTERS**: Switching campuses quickly must never end with the first
/// campus's locations on screen just because its response was slower.
#[tokio::test]
async fn given_two_overlapping_loads_when_first_is_slower_then_later_wins() {
    // GIVEN: Hill is slow, Outer is fast
    let server = MockServer::start().await;
    mount_nodes(
        &server,
        "hill",
        json_response(200, json!(["Hill Library"])).set_delay(Duration::from_millis(150)),
    )
    .await;
    mount_nodes(&server, "outer", json_response(200, json!(["Outer Gate"]))).await;
    let ui = headless_ui();
    let loader = loader_for(&server, &ui);

    // WHEN: Outer is requested while Hill is still loading
    let first = loader.load(Campus::Hill);
    let second = async {
        tokio::time::sleep(Duration::from_millis(30)).await;
        loader.load(Campus::Outer).await
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    // THEN: Hill is superseded, Outer is displayed, and stays displayed
    assert_eq!(first_outcome, CatalogOutcome::Superseded);
    assert!(matches!(second_outcome, CatalogOutcome::Loaded(_)));

    let settled = ui.snapshot();
    for widget in Widget::BOTH {
        assert_eq!(labels(&settled, widget), vec!["Outer Gate"]);
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(ui.snapshot(), settled);
}

#[tokio::test]
async fn given_two_overlapping_loads_when_later_is_empty_then_empty_placeholder_wins() {
    let server = MockServer::start().await;
    mount_nodes(
        &server,
        "hill",
        json_response(200, json!(["Hill Library"])).set_delay(Duration::from_millis(40)),
    )
    .await;
    mount_nodes(
        &server,
        "deemed",
        json_response(200, json!([])).set_delay(Duration::from_millis(120)),
    )
    .await;
    let ui = headless_ui();
    let loader = loader_for(&server, &ui);

    let first = loader.load(Campus::Hill);
    let second = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        loader.load(Campus::Deemed).await
    };
    let (first_outcome, second_outcome) = tokio::join!(first, second);

    assert_eq!(first_outcome, CatalogOutcome::Superseded);
    assert_eq!(second_outcome, CatalogOutcome::Empty);
    assert_single_placeholder(&ui.snapshot(), EMPTY_PLACEHOLDER);
}

#[tokio::test]
async fn given_same_campus_loaded_twice_when_sequential_then_catalog_replaced_wholesale() {
    let server = MockServer::start().await;
    mount_nodes(&server, "hill", json_response(200, json!(["A", "B"]))).await;
    let ui = headless_ui();
    let loader = loader_for(&server, &ui);

    loader.load(Campus::Hill).await;
    loader.load(Campus::Hill).await;

    assert_eq!(labels(&ui.snapshot(), Widget::Destination), vec!["A", "B"]);
}
