//! The incremental loader state machine.

use super::sequence::{LoadedPageSequence, Sentinel};
use super::state::{FetchTicket, IgnoreReason, LoadDecision, LoaderState};
use crate::domain::{CatalogPage, MovieId, PageRequest};
use crate::ports::{CatalogPort, CatalogResult};

/// Event that asks the loader for more data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// Initial load of page 1.
    Start,
    /// The item with this id scrolled into view.
    SentinelVisible(MovieId),
    /// User asked to retry after a failure.
    Retry,
}

/// Sentinel-driven loader that appends catalog pages as the user reaches the
/// end of the list.
///
/// All transitions take `&mut self`, so a single owner drives the loader and
/// at most one fetch is ever in flight.
#[derive(Debug)]
pub struct IncrementalLoader {
    page_size: u32,
    state: LoaderState,
    pages: LoadedPageSequence,
    sentinel: Sentinel,
    has_next_page: bool,
    started: bool,
    torn_down: bool,
    generation: u64,
}

impl IncrementalLoader {
    /// Create an idle loader. A page size of 0 is treated as 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            state: LoaderState::Idle,
            pages: LoadedPageSequence::default(),
            sentinel: Sentinel::default(),
            has_next_page: true,
            started: false,
            torn_down: false,
            generation: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &LoaderState {
        &self.state
    }

    /// Pages loaded so far.
    #[must_use]
    pub const fn pages(&self) -> &LoadedPageSequence {
        &self.pages
    }

    /// Where the sentinel is attached.
    #[must_use]
    pub const fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    /// Whether the catalog has pages beyond the last loaded one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Current session generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin loading page 1.
    pub fn start(&mut self) -> LoadDecision {
        if self.torn_down {
            return LoadDecision::Ignored(IgnoreReason::TornDown);
        }
        if self.started {
            return LoadDecision::Ignored(IgnoreReason::AlreadyStarted);
        }
        self.started = true;
        self.begin_fetch(1)
    }

    /// Handle the sentinel item becoming visible.
    ///
    /// Starts a fetch only from `Idle`, when more pages exist and the event is
    /// for the currently attached sentinel. Events during a fetch are dropped,
    /// not queued.
    pub fn on_sentinel_visible(&mut self, item_id: MovieId) -> LoadDecision {
        if self.torn_down {
            return LoadDecision::Ignored(IgnoreReason::TornDown);
        }
        match self.state {
            LoaderState::FetchingNext { .. } => LoadDecision::Ignored(IgnoreReason::Busy),
            LoaderState::Exhausted => LoadDecision::Ignored(IgnoreReason::Exhausted),
            LoaderState::Failed { .. } => LoadDecision::Ignored(IgnoreReason::Failed),
            LoaderState::Idle => {
                if !self.has_next_page {
                    return LoadDecision::Ignored(IgnoreReason::Exhausted);
                }
                if !self.sentinel.is_on(item_id) {
                    return LoadDecision::Ignored(IgnoreReason::NotSentinel);
                }
                let page = self.pages.next_page_number();
                self.begin_fetch(page)
            }
        }
    }

    /// Re-arm after a failure and fetch the page that failed.
    pub fn retry(&mut self) -> LoadDecision {
        if self.torn_down {
            return LoadDecision::Ignored(IgnoreReason::TornDown);
        }
        match self.state {
            LoaderState::Failed { page, .. } => self.begin_fetch(page),
            _ => LoadDecision::Ignored(IgnoreReason::NothingToRetry),
        }
    }

    /// Apply the result of the fetch authorized by `ticket`.
    ///
    /// Returns `false` when the ticket is stale (from before a teardown, or
    /// not matching the in-flight page) and nothing changed.
    pub fn complete(&mut self, ticket: FetchTicket, result: CatalogResult<CatalogPage>) -> bool {
        if ticket.generation() != self.generation {
            tracing::debug!(
                page = ticket.page(),
                ticket_generation = ticket.generation(),
                generation = self.generation,
                "Dropping completion from torn-down session"
            );
            return false;
        }
        if self.state != (LoaderState::FetchingNext { page: ticket.page() }) {
            tracing::debug!(page = ticket.page(), state = %self.state, "Dropping unexpected completion");
            return false;
        }

        match result {
            Ok(page) => self.append(page),
            Err(error) => {
                tracing::debug!(page = ticket.page(), %error, "Page fetch failed");
                self.state = LoaderState::Failed {
                    page: ticket.page(),
                    error,
                };
            }
        }
        true
    }

    /// Detach the sentinel and invalidate all outstanding tickets.
    pub fn teardown(&mut self) {
        self.sentinel.detach();
        self.generation = self.generation.wrapping_add(1);
        self.torn_down = true;
        tracing::debug!(generation = self.generation, "Loader torn down");
    }

    /// Decide, fetch and complete in one step.
    ///
    /// Returns the decision taken; when it is `Fetch`, the port has already
    /// been awaited and the result applied.
    pub async fn load_next(&mut self, port: &dyn CatalogPort, trigger: LoadTrigger) -> LoadDecision {
        let decision = match trigger {
            LoadTrigger::Start => self.start(),
            LoadTrigger::SentinelVisible(item_id) => self.on_sentinel_visible(item_id),
            LoadTrigger::Retry => self.retry(),
        };
        let LoadDecision::Fetch(ticket) = decision else {
            return decision;
        };

        let result = match PageRequest::new(ticket.page(), self.page_size) {
            Ok(request) => port.fetch_page(request).await,
            Err(error) => Err(error),
        };
        self.complete(ticket, result);
        decision
    }

    fn begin_fetch(&mut self, page: u32) -> LoadDecision {
        self.state = LoaderState::FetchingNext { page };
        tracing::debug!(page, generation = self.generation, "Fetching next page");
        LoadDecision::Fetch(FetchTicket::new(page, self.generation))
    }

    fn append(&mut self, page: CatalogPage) {
        if page.is_empty() && page.is_past_end() {
            self.has_next_page = false;
            self.sentinel.detach();
            self.state = LoaderState::Exhausted;
            tracing::debug!(page = page.page_number, "Fetched page past the end");
            return;
        }

        self.has_next_page = page.has_next_page();
        let last_id = page.last_item().map(|movie| movie.id);
        self.pages.push(page);

        match last_id {
            Some(id) if self.has_next_page => {
                self.sentinel.attach(id);
                self.state = LoaderState::Idle;
            }
            _ => {
                self.has_next_page = false;
                self.sentinel.detach();
                self.state = LoaderState::Exhausted;
            }
        }
        tracing::debug!(
            pages = self.pages.len(),
            items = self.pages.item_count(),
            state = %self.state,
            "Appended page"
        );
    }
}
