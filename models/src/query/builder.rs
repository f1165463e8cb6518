use crate::algorithm::Algorithm;
use crate::campus::Campus;
use crate::catalog::Location;
use crate::query::{Query, QueryValidationError};

/// Builder for validated [`Query`] values.
///
/// Selection rules are checked in order: both ends present, then distinct.
/// Algorithm and campus fall back to their defaults when unset.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    source: Option<String>,
    destination: Option<String>,
    algorithm: Option<String>,
    campus: Option<Campus>,
}

impl QueryBuilder {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_campus(mut self, campus: Campus) -> Self {
        self.campus = Some(campus);
        self
    }

    pub fn build(self) -> Result<Query, QueryValidationError> {
        let source = self.source.unwrap_or_default();
        let destination = self.destination.unwrap_or_default();

        if source.is_empty() || destination.is_empty() {
            return Err(QueryValidationError::MissingSelection);
        }

        if source == destination {
            return Err(QueryValidationError::SameSelection);
        }

        let algorithm = match self.algorithm {
            Some(algorithm) if !algorithm.is_empty() => algorithm,
            _ => Algorithm::default().as_str().to_string(),
        };

        Ok(Query {
            source: Location::new(source),
            destination: Location::new(destination),
            algorithm,
            campus: self.campus.unwrap_or_default(),
        })
    }
}
