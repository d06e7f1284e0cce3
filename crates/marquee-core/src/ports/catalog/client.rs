//! Catalog client port trait.

use async_trait::async_trait;

use super::error::CatalogResult;
use crate::domain::{CatalogPage, MovieDetail, MovieId, PageRequest};

/// Port trait for reading the remote movie catalog.
///
/// # Design
///
/// - Read-only: both operations are idempotent GETs upstream
/// - Returns `CatalogError` for all failures, with no retry
/// - Freshness caching is an adapter concern and invisible here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch one page of movie summaries.
    async fn fetch_page(&self, request: PageRequest) -> CatalogResult<CatalogPage>;

    /// Fetch the full record for one movie.
    ///
    /// Returns `CatalogError::NotFound` when the id does not exist upstream.
    async fn fetch_detail(&self, movie_id: MovieId) -> CatalogResult<MovieDetail>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn CatalogPort>) {}
}
