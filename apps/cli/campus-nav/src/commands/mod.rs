//! Command execution against the routing service.
//!
//! Each command builds a fresh navigation view over a headless UI, drives it
//! the way the page would, and reports what ended up on screen.

use crate::cli::Command;
use crate::error::NavAppError;
use crate::report::CommandReport;

use nav_core::config::NavConfig;
use nav_core::ui::HeadlessUi;
use nav_core::view::NavigationView;

use models::Algorithm;

use std::sync::Arc;

use log::{debug, warn};

/// Context used when neither the command nor the config names one.
const FALLBACK_CONTEXT: &str = "";

pub async fn run(command: &Command, config: &NavConfig) -> Result<CommandReport, NavAppError> {
    let ui = Arc::new(HeadlessUi::new());
    let view = NavigationView::new(config, Arc::clone(&ui))?;

    match command {
        Command::Locations { context } => {
            let context = pick_context(context.as_deref(), config);
            let outcome = view.activate(context).await;
            debug!("Catalog outcome: {outcome:?}");

            Ok(CommandReport::for_catalog(view.campus(), &outcome, &ui.snapshot()))
        }
        Command::Route {
            from,
            to,
            algorithm,
            context,
        } => {
            let context = pick_context(context.as_deref(), config);
            view.activate(context).await;

            let default_algorithm = config.defaults.algorithm.to_string();
            let algorithm = algorithm_token(algorithm.as_deref(), &default_algorithm);
            let outcome = view.find_path(from, to, algorithm).await;
            debug!("Query outcome: {outcome:?}");

            Ok(CommandReport::for_route(view.campus(), &ui.snapshot()))
        }
    }
}

fn pick_context<'a>(explicit: Option<&'a str>, config: &'a NavConfig) -> &'a str {
    explicit
        .or(config.defaults.context.as_deref())
        .unwrap_or(FALLBACK_CONTEXT)
}

/// Token sent as `algorithm=`: the explicit one, else the config default.
///
/// Tokens outside the known set are logged and forwarded unchanged; the
/// routing service has the final say.
pub(crate) fn algorithm_token<'a>(explicit: Option<&'a str>, default: &'a str) -> &'a str {
    let token = explicit.unwrap_or(default);

    if !token.trim().is_empty() {
        if let Err(e) = token.parse::<Algorithm>() {
            let known: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::as_str).collect();
            warn!("{e}; forwarding it anyway (known: {})", known.join(", "));
        }
    }

    token
}
