//! Shared plumbing for the campus navigation workspace.
//!
//! Everything here is domain-agnostic: error locations for the `thiserror`
//! enums in every other crate, and the HTTP status wrapper the routing client
//! uses to classify responses.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing and HTTP helpers
//! - **models**: Pure campus/route data structures
//! - **nav-core**: Catalog loading and path query lifecycle
//! - **campus-nav**: Command-line application wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
