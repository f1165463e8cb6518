use crate::error::routing_client::RoutingClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::{Campus, Location as CampusLocation, Query};

use std::panic::Location;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, trace};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use url::Url;

const NODES_ENDPOINT: &str = "api/nodes";
const NAVIGATE_ENDPOINT: &str = "api/navigate";
const CACHE_BUST_PARAM: &str = "_";
const NO_CACHE: &str = "no-cache";

/// Raw reply from `/api/navigate`.
///
/// Every HTTP response lands here, success or not; classification into a
/// user-facing outcome happens in the orchestrator. `body` is `None` when the
/// payload was not valid JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status: HttpStatusCode,
    pub body: Option<Value>,
}

/// HTTP client for the external routing service.
#[derive(Clone)]
pub struct RoutingClient {
    base_url: Url,
    client: Client,
}

impl RoutingClient {
    pub fn new(base_url_str: &str) -> Result<Self, RoutingClientError> {
        let mut base_url = Url::parse(base_url_str)?;

        // `Url::join` drops the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the location names for one campus.
    ///
    /// Always bypasses caches: a timestamp parameter is appended and no-cache
    /// headers are sent, since location sets change between deployments.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingClientError::Server`] on a non-success status and
    /// [`RoutingClientError::Json`] when the body is not an array of strings.
    pub async fn fetch_nodes(
        &self,
        campus: Campus,
    ) -> Result<Vec<CampusLocation>, RoutingClientError> {
        let mut url = self.base_url.join(NODES_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("campus", campus.as_str())
            .append_pair(CACHE_BUST_PARAM, &cache_bust_token());

        debug!("Fetching locations for campus {campus}");
        trace!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, NO_CACHE)
            .header(PRAGMA, NO_CACHE)
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            return Err(RoutingClientError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let text = response.text().await?;
        let locations: Vec<CampusLocation> = serde_json::from_str(&text)?;

        debug!("Received {} locations for campus {campus}", locations.len());
        Ok(locations)
    }

    /// Ask the routing service for a path.
    ///
    /// Only transport failures are errors here; any HTTP response, including
    /// 4xx/5xx, comes back as a [`RouteResponse`].
    pub async fn navigate(&self, query: &Query) -> Result<RouteResponse, RoutingClientError> {
        let mut url = self.base_url.join(NAVIGATE_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("from", query.source.as_str())
            .append_pair("to", query.destination.as_str())
            .append_pair("algorithm", &query.algorithm)
            .append_pair("campus", query.campus.as_str());

        trace!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = HttpStatusCode::from(response.status().as_u16());
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Route response (HTTP {status}) is not JSON: {e}");
                None
            }
        };

        Ok(RouteResponse { status, body })
    }
}

fn cache_bust_token() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
        .to_string()
}
