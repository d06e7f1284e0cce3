//! Pagination errors.

use thiserror::Error;

/// Errors from page-state updates that violate the store's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers start at 1.
    #[error("Invalid page number {0}: pages start at 1")]
    InvalidPage(u32),

    /// A catalog always has at least one page.
    #[error("Invalid total page count {0}: must be at least 1")]
    InvalidTotal(u32),
}
