//! The page-state store.

use serde::{Deserialize, Serialize};

use super::DEFAULT_NEIGHBOR_WINDOW;
use super::controls::{PageLink, PageLinkKind, PaginationControls};
use super::error::PaginationError;
use crate::domain::CatalogPage;

/// Pagination state for one UI session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// 1-based page currently displayed
    pub current_page: u32,
    /// Total pages known so far (at least 1)
    pub total_pages: u32,
    /// Page links shown on each side of the current page
    pub neighbor_window: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            neighbor_window: DEFAULT_NEIGHBOR_WINDOW,
        }
    }
}

/// Single source of truth for [`PaginationState`] within a session.
///
/// Invariant: `1 <= current_page <= total_pages` after every operation.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    state: PaginationState,
    reconciled: bool,
}

impl PageStore {
    /// Create a store at page 1 of 1.
    #[must_use]
    pub const fn new(neighbor_window: u32) -> Self {
        Self {
            state: PaginationState {
                current_page: 1,
                total_pages: 1,
                neighbor_window,
            },
            reconciled: false,
        }
    }

    /// Create a store seeded directly from server-computed values.
    ///
    /// The store counts as reconciled, so a later [`Self::reconcile_initial`]
    /// is a no-op.
    pub fn seeded(
        current_page: u32,
        total_pages: u32,
        neighbor_window: u32,
    ) -> Result<Self, PaginationError> {
        let mut store = Self::new(neighbor_window);
        store.set_total_pages(total_pages)?;
        store.set_current_page(current_page)?;
        store.reconciled = true;
        Ok(store)
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> PaginationState {
        self.state
    }

    /// 1-based page currently displayed.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Total pages known so far.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.state.total_pages
    }

    /// Neighbor window size.
    #[must_use]
    pub const fn neighbor_window(&self) -> u32 {
        self.state.neighbor_window
    }

    /// Whether the current page is the first.
    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.state.current_page <= 1
    }

    /// Whether the current page is the last.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.state.current_page >= self.state.total_pages
    }

    /// Move to page `n`, clamped to the last page.
    ///
    /// Returns the page actually selected.
    pub fn set_current_page(&mut self, n: u32) -> Result<u32, PaginationError> {
        if n == 0 {
            return Err(PaginationError::InvalidPage(n));
        }
        let page = n.min(self.state.total_pages);
        if page != n {
            tracing::debug!(
                requested = n,
                total_pages = self.state.total_pages,
                "Clamped page request to last page"
            );
        }
        self.state.current_page = page;
        Ok(page)
    }

    /// Replace the total page count, pulling the current page back if needed.
    pub fn set_total_pages(&mut self, n: u32) -> Result<u32, PaginationError> {
        if n == 0 {
            return Err(PaginationError::InvalidTotal(n));
        }
        self.state.total_pages = n;
        if self.state.current_page > n {
            self.state.current_page = n;
        }
        Ok(n)
    }

    /// Apply the result of one successful page fetch.
    ///
    /// Total pages are recomputed from the item count first, so the fetched
    /// page number is never clamped against a stale total.
    pub fn record_fetch(&mut self, page: &CatalogPage) -> u32 {
        let total = page.total_pages();
        self.state.total_pages = total;
        self.state.current_page = page.page_number.clamp(1, total);
        self.state.current_page
    }

    /// Apply initial server-computed values, once per navigation.
    ///
    /// Returns `false` (and changes nothing) when the store was already
    /// seeded or reconciled, or when the values are invalid.
    pub fn reconcile_initial(&mut self, current_page: u32, total_pages: u32) -> bool {
        if self.reconciled {
            return false;
        }
        if total_pages == 0 || current_page == 0 {
            return false;
        }
        self.state.total_pages = total_pages;
        self.state.current_page = current_page.min(total_pages);
        self.reconciled = true;
        true
    }

    /// Page numbers to render as clickable neighbor links, ascending.
    ///
    /// Always within `[1, total_pages]` and always contains the current page.
    #[must_use]
    pub fn visible_page_window(&self) -> Vec<u32> {
        let PaginationState {
            current_page,
            total_pages,
            neighbor_window,
        } = self.state;
        let start = current_page.saturating_sub(neighbor_window).max(1);
        let end = current_page.saturating_add(neighbor_window).min(total_pages);
        (start..=end).collect()
    }

    /// Full set of pagination controls for the current state.
    #[must_use]
    pub fn controls(&self) -> PaginationControls {
        let current = self.state.current_page;
        let total = self.state.total_pages;
        let at_start = self.is_first_page();
        let at_end = self.is_last_page();

        PaginationControls {
            first: PageLink::edge(PageLinkKind::First, 1, at_start),
            previous: PageLink::edge(
                PageLinkKind::Previous,
                current.saturating_sub(1).max(1),
                at_start,
            ),
            pages: self
                .visible_page_window()
                .into_iter()
                .map(|page| PageLink::number(page, page == current))
                .collect(),
            next: PageLink::edge(PageLinkKind::Next, current.saturating_add(1).min(total), at_end),
            last: PageLink::edge(PageLinkKind::Last, total, at_end),
        }
    }
}
