//! Movie catalog port definitions.
//!
//! This module defines the port trait and error taxonomy for reading the
//! remote movie catalog. The implementation lives in `marquee-yts`.

mod client;
mod error;

pub use client::CatalogPort;
#[cfg(test)]
pub use client::MockCatalogPort;
pub use error::{CatalogError, CatalogResult};
