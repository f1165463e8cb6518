//! Location catalog loading.
//!
//! Keeps the source and destination selectors in sync with the catalog of the
//! active campus. Every load first blanks both selectors to a disabled
//! placeholder so options from a previous campus are never selectable while
//! the request is pending, then writes exactly one of: the catalog, an empty
//! placeholder, or an error placeholder.
//!
//! Overlapping loads are last-initiated-wins: starting a load cancels the
//! previous request, and a response that arrives after a newer load started
//! is discarded without touching the selectors.

use crate::DEFAULT_REQUEST_TIMEOUT;
use crate::cancellation::InFlight;
use crate::generation::Generation;
use crate::routing_client::RoutingClient;
use crate::ui::{SelectOption, UiState, Widget};

use models::{Campus, Catalog, CatalogOutcome};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

pub const LOADING_PLACEHOLDER: &str = "Loading locations...";
pub const EMPTY_PLACEHOLDER: &str = "No locations available";
pub const ERROR_PLACEHOLDER: &str = "Error loading locations";

pub struct CatalogLoader<U: UiState> {
    client: RoutingClient,
    ui: Arc<U>,
    timeout: Duration,
    generation: Generation,
    in_flight: InFlight,
}

impl<U: UiState> CatalogLoader<U> {
    pub fn new(client: RoutingClient, ui: Arc<U>) -> Self {
        Self {
            client,
            ui,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            generation: Generation::new(),
            in_flight: InFlight::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the catalog for `campus` into both selectors.
    ///
    /// Never fails: transport errors, bad statuses, malformed bodies and
    /// timeouts all end as [`CatalogOutcome::Failed`] with the error placeholder
    /// shown. The detail only goes to the log.
    ///
    /// Like [`PathQueryOrchestrator::submit`](crate::orchestrator::PathQueryOrchestrator::submit),
    /// overlapping loads are expected to be driven from a single task; the
    /// staleness check and the widget writes after it are not one atomic step.
    pub async fn load(&self, campus: Campus) -> CatalogOutcome {
        let token = self.generation.advance();
        let cancel = self.in_flight.begin(token);

        self.fill_placeholder(LOADING_PLACEHOLDER);
        debug!("Catalog load {token} started for campus {campus}");

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Catalog load {token} cancelled by a newer load");
                return CatalogOutcome::Superseded;
            }
            result = tokio::time::timeout(self.timeout, self.client.fetch_nodes(campus)) => result,
        };

        if !self.generation.is_current(token) {
            debug!("Discarding stale catalog response {token}");
            return CatalogOutcome::Superseded;
        }
        self.in_flight.finish(token);

        match result {
            Ok(Ok(locations)) if locations.is_empty() => {
                info!("No locations available for campus {campus}");
                self.fill_placeholder(EMPTY_PLACEHOLDER);
                CatalogOutcome::Empty
            }
            Ok(Ok(locations)) => {
                let catalog = Catalog::new(campus, locations);
                let options: Vec<SelectOption> = catalog
                    .iter()
                    .map(|location| SelectOption::new(location.as_str()))
                    .collect();

                for widget in Widget::BOTH {
                    self.ui.set_options(widget, options.clone());
                }

                info!("Loaded {} locations for campus {campus}", catalog.len());
                CatalogOutcome::Loaded(catalog)
            }
            Ok(Err(e)) => {
                warn!("Failed to load locations for campus {campus}: {e}");
                self.fill_placeholder(ERROR_PLACEHOLDER);
                CatalogOutcome::Failed
            }
            Err(_) => {
                warn!(
                    "Loading locations for campus {campus} timed out after {} ms",
                    self.timeout.as_millis()
                );
                self.fill_placeholder(ERROR_PLACEHOLDER);
                CatalogOutcome::Failed
            }
        }
    }

    fn fill_placeholder(&self, label: &str) {
        for widget in Widget::BOTH {
            self.ui
                .set_options(widget, vec![SelectOption::placeholder(label)]);
        }
    }
}
