//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CatalogError` to exit codes and user-facing messages.

use marquee_core::{CatalogError, PaginationError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog could not be reached or answered with bad data.
    #[error("Failed to fetch movies: {0}")]
    Upstream(String),

    /// The requested movie does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal closed, broken pipe, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2,
            Self::Upstream(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => Self::NotFound(err.to_string()),
            CatalogError::InvalidRequest { message } => Self::Arguments(message),
            CatalogError::RemoteFetch { .. } | CatalogError::MalformedResponse { .. } => {
                Self::Upstream(err.to_string())
            }
        }
    }
}

impl From<PaginationError> for CliError {
    fn from(err: PaginationError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
