//! Domain models for campus navigation.
//!
//! Pure data: campuses, algorithms, locations, catalogs, queries and the
//! outcomes a query can resolve to. No I/O and no business logic beyond
//! construction-time validation.

pub mod algorithm;
pub mod campus;
pub mod catalog;
pub mod error;
pub mod outcome;
pub mod query;

pub use algorithm::Algorithm;
pub use campus::Campus;
pub use catalog::{Catalog, CatalogOutcome, Location};
pub use error::model_error::ModelError;
pub use outcome::QueryOutcome;
pub use query::builder::QueryBuilder;
pub use query::{Query, QueryValidationError};

#[cfg(test)]
mod tests;
