//! In-memory catalog for route tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use marquee_core::{
    CatalogError, CatalogPage, CatalogPort, CatalogResult, MovieDetail, MovieId, MovieSummary,
    PageRequest,
};

/// Catalog of `total` movies with ids `1..=total`, or a catalog that always fails.
pub struct FakeCatalog {
    total: u64,
    failure: Option<CatalogError>,
    calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn with_movies(total: u64) -> Self {
        Self {
            total,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self {
            total: 0,
            failure: Some(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn summary(id: MovieId) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            cover_image_url: format!("https://yts.mx/covers/{id}.jpg"),
            rating: 6.5,
            year: 2000,
        }
    }
}

#[async_trait]
impl CatalogPort for FakeCatalog {
    async fn fetch_page(&self, request: PageRequest) -> CatalogResult<CatalogPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let size = u64::from(request.page_size());
        let start = u64::from(request.page() - 1) * size + 1;
        let end = (start + size - 1).min(self.total);
        let items = (start..=end).map(Self::summary).collect();

        Ok(CatalogPage {
            page_number: request.page(),
            page_size: request.page_size(),
            items,
            total_item_count: self.total,
        })
    }

    async fn fetch_detail(&self, movie_id: MovieId) -> CatalogResult<MovieDetail> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if movie_id > self.total {
            return Err(CatalogError::NotFound { movie_id });
        }

        Ok(MovieDetail {
            summary: Self::summary(movie_id),
            large_cover_image_url: String::new(),
            runtime_minutes: 100,
            language: Some("en".to_string()),
            mpa_rating: None,
            genres: ["Drama".to_string()].into_iter().collect(),
            synopsis: Some("Something happens.".to_string()),
            trailer_code: None,
            downloads: Vec::new(),
        })
    }
}
