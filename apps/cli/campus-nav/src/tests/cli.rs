use crate::cli::{Cli, Command};

use clap::{CommandFactory, Parser};

#[test]
fn given_cli_definition_when_debug_asserted_then_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_route_arguments_when_parsed_then_fields_are_populated() {
    let cli = Cli::try_parse_from([
        "campus-nav",
        "route",
        "--from",
        "Library",
        "--to",
        "Main Gate",
        "--algorithm",
        "dijkstra",
        "--context",
        "/hill/",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            context,
        } => {
            assert_eq!(from, "Library");
            assert_eq!(to, "Main Gate");
            assert_eq!(algorithm.as_deref(), Some("dijkstra"));
            assert_eq!(context.as_deref(), Some("/hill/"));
        }
        other => panic!("Expected Route, got {other:?}"),
    }
}

/// **VALUE**: Omitted endpoints parse as empty so the orchestrator can reject them.
///
/// **WHY THIS MATTERS**: The "select both" message should come from the same
/// validation path the page uses, not from a clap usage error.
#[test]
fn given_route_without_endpoints_when_parsed_then_defaults_to_empty() {
    let cli = Cli::try_parse_from(["campus-nav", "route"]).unwrap();

    match cli.command {
        Command::Route { from, to, .. } => {
            assert!(from.is_empty());
            assert!(to.is_empty());
        }
        other => panic!("Expected Route, got {other:?}"),
    }
}
