//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or JSON types in any signature
//! - Adapters map their internal errors to port errors at the boundary

pub mod catalog;

pub use catalog::{CatalogError, CatalogPort, CatalogResult};

#[cfg(test)]
pub use catalog::MockCatalogPort;
