//! Catalog pages and page requests.

use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;
use crate::ports::catalog::{CatalogError, CatalogResult};

/// Number of pages needed to show `total_item_count` items, `page_size` at a time.
///
/// Never returns less than 1: an empty catalog still has one (empty) page.
#[must_use]
pub fn total_pages(total_item_count: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total_item_count.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// A validated request for one page of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request. Both values must be at least 1.
    pub fn new(page: u32, page_size: u32) -> CatalogResult<Self> {
        if page == 0 {
            return Err(CatalogError::InvalidRequest {
                message: "page number must be at least 1".to_string(),
            });
        }
        if page_size == 0 {
            return Err(CatalogError::InvalidRequest {
                message: "page size must be at least 1".to_string(),
            });
        }
        Ok(Self { page, page_size })
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Request for the following page with the same size.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            page_size: self.page_size,
        }
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// 1-based page number this batch belongs to
    pub page_number: u32,
    /// Page size the batch was requested with
    pub page_size: u32,
    /// Movies in upstream order
    pub items: Vec<MovieSummary>,
    /// Total number of movies in the catalog
    pub total_item_count: u64,
}

impl CatalogPage {
    /// Total pages implied by the item count and page size.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_item_count, self.page_size)
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_number.saturating_add(1) <= self.total_pages()
    }

    /// Whether this page was requested beyond the end of the catalog.
    #[must_use]
    pub fn is_past_end(&self) -> bool {
        self.page_number > self.total_pages()
    }

    /// Last movie on the page, used as the incremental-loading sentinel.
    #[must_use]
    pub fn last_item(&self) -> Option<&MovieSummary> {
        self.items.last()
    }

    /// Number of movies on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
