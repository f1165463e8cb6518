//! Path query lifecycle.
//!
//! One `submit` is one user attempt: clear styling, validate, issue a single
//! cancellable time-bounded request, classify the reply, render it. A newer
//! `submit` cancels the older request, and the older call renders nothing even
//! if its reply slips in first.

mod classify;

pub use classify::{MALFORMED_RESPONSE_MESSAGE, UNKNOWN_ERROR_MESSAGE, classify};

use crate::DEFAULT_REQUEST_TIMEOUT;
use crate::cancellation::InFlight;
use crate::generation::Generation;
use crate::render::render;
use crate::routing_client::RoutingClient;
use crate::ui::UiState;

use models::{Campus, QueryBuilder, QueryOutcome};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

pub struct PathQueryOrchestrator<U: UiState> {
    client: RoutingClient,
    ui: Arc<U>,
    timeout: Duration,
    generation: Generation,
    in_flight: InFlight,
}

impl<U: UiState> PathQueryOrchestrator<U> {
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

    /// Run one path query attempt and render its outcome.
    ///
    /// Validation failures are rendered without any network I/O. A call that
    /// was superseded by a newer `submit` returns [`QueryOutcome::Cancelled`]
    /// and leaves the UI untouched.
    ///
    /// The staleness check and the render that follows it are not one atomic
    /// step. Concurrent `submit`s are expected to come from one task (one page),
    /// so no newer call can advance the generation in between.
    pub async fn submit(
        &self,
        source: &str,
        destination: &str,
        algorithm: &str,
        campus: Campus,
    ) -> QueryOutcome {
        let token = self.generation.advance();
        self.ui.set_error_style(false);

        let query = match QueryBuilder::default()
            .with_source(source)
            .with_destination(destination)
            .with_algorithm(algorithm)
            .with_campus(campus)
            .build()
        {
            Ok(query) => query,
            Err(reason) => {
                self.in_flight.cancel();
                debug!("Path query {token} rejected locally: {reason}");
                let outcome = QueryOutcome::Invalid(reason);
                render(&outcome, &*self.ui);
                return outcome;
            }
        };

        let cancel = self.in_flight.begin(token);
        info!(
            "Path query {token}: {} -> {} via {} on {}",
            query.source, query.destination, query.algorithm, query.campus
        );

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => QueryOutcome::Cancelled,
            result = tokio::time::timeout(self.timeout, self.client.navigate(&query)) => {
                match result {
                    Ok(response) => classify(response),
                    Err(_) => QueryOutcome::TransportError(format!(
                        "request timed out after {} ms",
                        self.timeout.as_millis()
                    )),
                }
            }
        };

        if !self.generation.is_current(token) {
            debug!("Discarding stale path query outcome {token}");
            return QueryOutcome::Cancelled;
        }
        self.in_flight.finish(token);

        debug!("Path query {token} finished: {outcome:?}");
        render(&outcome, &*self.ui);
        outcome
    }

    /// Abort the in-flight query without starting a new one.
    ///
    /// The aborted `submit` resolves to [`QueryOutcome::Cancelled`], which
    /// only clears error styling. Returns false when nothing was in flight.
    pub fn cancel(&self) -> bool {
        self.in_flight.cancel()
    }
}
