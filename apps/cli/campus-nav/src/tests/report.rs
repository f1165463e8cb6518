use crate::report::CommandReport;

use nav_core::ui::{SelectOption, UiSnapshot};

use models::{Campus, Catalog, CatalogOutcome, Location};

fn snapshot_with(options: Vec<SelectOption>) -> UiSnapshot {
    UiSnapshot {
        source: options.clone(),
        destination: options,
        ..UiSnapshot::default()
    }
}

#[test]
fn given_loaded_catalog_when_reported_then_lists_locations_without_message() {
    let snapshot = snapshot_with(vec![SelectOption::new("Library"), SelectOption::new("Gate")]);
    let outcome = CatalogOutcome::Loaded(Catalog::new(
        Campus::Hill,
        vec![Location::from("Library"), Location::from("Gate")],
    ));

    let report = CommandReport::for_catalog(Campus::Hill, &outcome, &snapshot);

    assert_eq!(report.locations, vec!["Library", "Gate"]);
    assert!(report.message.is_none());
    assert!(!report.is_error);
    assert_eq!(report.to_string(), "Library\nGate\n");
}

/// **VALUE**: A failed load surfaces the placeholder text and is flagged as an error.
///
/// **BUG THIS CATCHES**: Would catch if the disabled placeholder were reported as a
/// selectable location, which would make `Error loading locations` look like a place.
#[test]
fn given_failed_catalog_when_reported_then_placeholder_is_message() {
    let snapshot = snapshot_with(vec![SelectOption::placeholder("Error loading locations")]);

    let report = CommandReport::for_catalog(Campus::Outer, &snapshot_outcome_failed(), &snapshot);

    assert!(report.locations.is_empty());
    assert_eq!(report.message.as_deref(), Some("Error loading locations"));
    assert!(report.is_error);
}

fn snapshot_outcome_failed() -> CatalogOutcome {
    CatalogOutcome::Failed
}

#[test]
fn given_route_snapshot_when_reported_then_uses_result_area() {
    let snapshot = UiSnapshot {
        message: String::from("No path found."),
        error_style: true,
        ..UiSnapshot::default()
    };

    let report = CommandReport::for_route(Campus::Deemed, &snapshot);

    assert_eq!(report.to_string(), "No path found.\n");
    assert!(report.is_error);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""campus":"deemed""#));
}
