//! One navigation page: campus resolution, catalog loading and path queries
//! wired to a shared UI handle.
//!
//! The campus is resolved once per [`activate`](NavigationView::activate) and
//! is what every later query uses until the next activation. Queries may run
//! while the catalog is still loading; the two flows only share the UI.

use crate::campus;
use crate::catalog::CatalogLoader;
use crate::config::NavConfig;
use crate::error::CoreError;
use crate::orchestrator::PathQueryOrchestrator;
use crate::routing_client::RoutingClient;
use crate::ui::UiState;

use models::{Campus, CatalogOutcome, QueryOutcome};

use std::sync::{Arc, PoisonError, RwLock};

use log::info;

pub struct NavigationView<U: UiState> {
    campus: RwLock<Campus>,
    catalog: CatalogLoader<U>,
    orchestrator: PathQueryOrchestrator<U>,
}

impl<U: UiState> NavigationView<U> {
    /// Build a view talking to the routing service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RoutingClient`] if the base URL cannot be parsed
    /// or the HTTP client cannot be constructed.
    pub fn new(config: &NavConfig, ui: Arc<U>) -> Result<Self, CoreError> {
        let client = RoutingClient::new(&config.server.base_url)?;
        let timeout = config.request_timeout();

        Ok(Self {
            campus: RwLock::new(Campus::default()),
            catalog: CatalogLoader::new(client.clone(), Arc::clone(&ui)).with_timeout(timeout),
            orchestrator: PathQueryOrchestrator::new(client, ui).with_timeout(timeout),
        })
    }

    /// Enter the view: resolve the campus from `context` and load its catalog.
    pub async fn activate(&self, context: &str) -> CatalogOutcome {
        let resolved = campus::resolve(context);
        *self.campus.write().unwrap_or_else(PoisonError::into_inner) = resolved;

        info!("Navigation view activated for campus {resolved}");
        self.catalog.load(resolved).await
    }

    /// Campus resolved by the most recent activation.
    pub fn campus(&self) -> Campus {
        *self.campus.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit a path query on the active campus.
    pub async fn find_path(&self, source: &str, destination: &str, algorithm: &str) -> QueryOutcome {
        let campus = self.campus();
        self.orchestrator
            .submit(source, destination, algorithm, campus)
            .await
    }

    /// Abort the in-flight path query, if any.
    pub fn cancel_query(&self) -> bool {
        self.orchestrator.cancel()
    }
}
