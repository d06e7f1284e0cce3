//! Port trait implementation for `YtsClient`.
//!
//! This module implements the core-owned `CatalogPort` trait for `YtsClient`,
//! mapping internal YTS errors onto the catalog error taxonomy.

use async_trait::async_trait;
use marquee_core::ports::{CatalogError, CatalogPort, CatalogResult};
use marquee_core::{CatalogPage, MovieDetail, MovieId, PageRequest};

use crate::client::YtsClient;
use crate::error::YtsError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `YtsError` to core `CatalogError`.
fn map_error(err: YtsError) -> CatalogError {
    match err {
        YtsError::ApiRequestFailed { status, url } => CatalogError::RemoteFetch {
            status: Some(status),
            message: format!("request to {url} failed"),
        },
        YtsError::ApiStatus { status, message } => CatalogError::RemoteFetch {
            status: None,
            message: format!("upstream reported '{status}': {message}"),
        },
        YtsError::InvalidResponse { message } => CatalogError::MalformedResponse { message },
        YtsError::JsonParse(e) => CatalogError::MalformedResponse {
            message: e.to_string(),
        },
        YtsError::MovieNotFound { movie_id } => CatalogError::NotFound { movie_id },
        YtsError::Network(e) => CatalogError::RemoteFetch {
            status: e.status().map(|status| status.as_u16()),
            message: e.to_string(),
        },
        YtsError::InsecureUrl { url } => CatalogError::InvalidRequest {
            message: format!("refusing non-https URL {url}"),
        },
        YtsError::InvalidUrl(e) => CatalogError::InvalidRequest {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogPort for YtsClient<B> {
    async fn fetch_page(&self, request: PageRequest) -> CatalogResult<CatalogPage> {
        self.list_movies(request.page(), request.page_size())
            .await
            .map_err(map_error)
    }

    async fn fetch_detail(&self, movie_id: MovieId) -> CatalogResult<MovieDetail> {
        if movie_id == 0 {
            return Err(CatalogError::InvalidRequest {
                message: "movie id must be positive".to_string(),
            });
        }
        self.movie_details(movie_id).await.map_err(map_error)
    }
}
