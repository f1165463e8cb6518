use crate::campus::Campus;

use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// A selectable named point within a campus graph.
///
/// Opaque: the name is passed to the routing service exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Location {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered set of locations for one campus, as most recently loaded.
///
/// Catalogs are replaced wholesale; order is whatever the service returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    campus: Campus,
    locations: Vec<Location>,
}

impl Catalog {
    pub fn new(campus: Campus, locations: Vec<Location>) -> Self {
        Self { campus, locations }
    }

    pub fn campus(&self) -> Campus {
        self.campus
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Result of one catalog load, after the widgets have been reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// Non-empty catalog now shown in both selection widgets.
    Loaded(Catalog),
    /// The service returned an empty list.
    Empty,
    /// Transport error, non-success status, malformed body or timeout.
    Failed,
    /// A newer load was started before this one finished; nothing was applied.
    Superseded,
}
