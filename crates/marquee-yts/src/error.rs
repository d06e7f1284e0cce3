//! Internal error types for YTS operations.
//!
//! These errors are mapped to `CatalogError` at the port boundary.

use thiserror::Error;

/// Result type alias for YTS operations.
pub type YtsResult<T> = Result<T, YtsError>;

/// Errors related to YTS API operations.
#[derive(Debug, Error)]
pub enum YtsError {
    /// API request failed with an HTTP error status.
    #[error("YTS API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response envelope reported an error despite a successful status.
    #[error("YTS API returned status '{status}': {message}")]
    ApiStatus {
        /// Envelope `status` value
        status: String,
        /// Envelope `status_message` value
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from YTS API: {message}")]
    InvalidResponse {
        /// Description of what was invalid, including the field path
        message: String,
    },

    /// The requested movie does not exist upstream.
    #[error("Movie {movie_id} not found on YTS")]
    MovieNotFound {
        /// The id that was requested
        movie_id: u64,
    },

    /// The configured base URL does not use `https`.
    #[error("Refusing non-https API URL: {url}")]
    InsecureUrl {
        /// The rejected URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl YtsError {
    /// Shorthand for a missing or mistyped field.
    pub(crate) fn field(path: &str, expected: &str) -> Self {
        Self::InvalidResponse {
            message: format!("field '{path}' is missing or not {expected}"),
        }
    }
}
