//! Error types for catalog port operations.

use thiserror::Error;

use crate::domain::MovieId;

/// Errors from catalog port operations.
///
/// These are domain-level errors that views can handle. Implementation
/// specific errors (HTTP, JSON) are mapped to these by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Upstream answered with a non-success status, or could not be reached.
    #[error("Failed to fetch from catalog: {message}")]
    RemoteFetch {
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Description of the failure
        message: String,
    },

    /// Upstream JSON lacked a required field or had the wrong shape.
    #[error("Malformed catalog response: {message}")]
    MalformedResponse {
        /// What was missing or invalid
        message: String,
    },

    /// The requested movie does not exist upstream.
    #[error("Movie {movie_id} not found")]
    NotFound {
        /// The id that was requested
        movie_id: MovieId,
    },

    /// The request was rejected before any I/O.
    #[error("Invalid catalog request: {message}")]
    InvalidRequest {
        /// Why the request was rejected
        message: String,
    },
}

impl CatalogError {
    /// Whether the error came from the upstream service rather than the caller.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::RemoteFetch { .. } | Self::MalformedResponse { .. }
        )
    }
}

/// Result type alias for catalog port operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
