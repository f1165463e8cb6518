use crate::error::routing_client::RoutingClientError;
use crate::routing_client::RouteResponse;

use models::{Location, QueryOutcome};

use log::{debug, warn};
use serde_json::Value;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Malformed response from routing service";

/// Turn a finished `/api/navigate` call into exactly one outcome.
pub fn classify(result: Result<RouteResponse, RoutingClientError>) -> QueryOutcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warn!("Path query transport failure: {e}");
            let reason = e.user_reason().unwrap_or(UNKNOWN_ERROR_MESSAGE);
            return QueryOutcome::TransportError(reason.to_string());
        }
    };

    if !response.status.is_success() {
        let message = first_message(response.body.as_ref())
            .unwrap_or_else(|| format!("Network response was not ok: {}", response.status));
        if response.status.is_server_error() {
            warn!("Routing service failed with HTTP {}: {message}", response.status);
        } else if response.status.is_client_error() {
            debug!("Routing service rejected query with HTTP {}: {message}", response.status);
        } else {
            warn!("Unexpected HTTP {} from routing service: {message}", response.status);
        }
        return QueryOutcome::ApplicationError(message);
    }

    match response.body {
        Some(Value::Array(items)) if !items.is_empty() => {
            QueryOutcome::Path(items.into_iter().map(location_from_value).collect())
        }
        Some(_) => QueryOutcome::EmptyResult,
        None => {
            warn!("Routing service returned HTTP {} with a non-JSON body", response.status);
            QueryOutcome::ApplicationError(MALFORMED_RESPONSE_MESSAGE.to_string())
        }
    }
}

/// First element of an error payload array, unless it is absent or falsy
/// (`null`, `false`, `0`, `""`), in which case the status fallback applies.
fn first_message(body: Option<&Value>) -> Option<String> {
    let first = body?.as_array()?.first()?;
    if is_falsy(first) {
        return None;
    }

    match first {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn location_from_value(value: Value) -> Location {
    match value {
        Value::String(name) => Location::new(name),
        other => Location::new(other.to_string()),
    }
}
