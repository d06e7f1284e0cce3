//! Axum-specific error types and mappings.
//!
//! Errors render as a full HTML page carrying a single error message, since
//! every route in this adapter serves HTML.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use marquee_core::{CatalogError, PaginationError};
use thiserror::Error;

use crate::views;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream catalog failed or answered with something unusable.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl HttpError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the user.
    fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Upstream(msg) => msg,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        }
        let body = views::error_page(status, self.message());
        (status, Html(body)).into_response()
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { movie_id } => {
                Self::NotFound(format!("Movie {movie_id} was not found"))
            }
            CatalogError::InvalidRequest { message } => Self::BadRequest(message),
            CatalogError::RemoteFetch { .. } | CatalogError::MalformedResponse { .. } => {
                Self::Upstream(format!("Failed to fetch movies: {err}"))
            }
        }
    }
}

impl From<PaginationError> for HttpError {
    fn from(err: PaginationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
