//! Loader states and decisions.

use std::fmt;

use crate::ports::CatalogError;

/// Where the loader is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderState {
    /// Waiting for the sentinel to become visible.
    Idle,
    /// A fetch for `page` is in flight.
    FetchingNext { page: u32 },
    /// The last page has been loaded.
    Exhausted,
    /// Fetching `page` failed. Terminal until retried.
    Failed { page: u32, error: CatalogError },
}

impl LoaderState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        matches!(self, Self::FetchingNext { .. })
    }

    /// Whether no further fetches will happen without a retry.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed { .. })
    }

    /// The surfaced error, if the last fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&CatalogError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for LoaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::FetchingNext { page } => write!(f, "fetching page {page}"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::Failed { page, error } => write!(f, "failed on page {page}: {error}"),
        }
    }
}

/// Permission to run exactly one page fetch.
///
/// Carries the session generation it was issued in; completing a ticket from
/// an older generation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: u32,
    generation: u64,
}

impl FetchTicket {
    pub(crate) const fn new(page: u32, generation: u64) -> Self {
        Self { page, generation }
    }

    /// Page this ticket allows fetching.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Session generation the ticket belongs to.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why an event did not start a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A fetch is already in flight.
    Busy,
    /// No pages remain.
    Exhausted,
    /// The last fetch failed; only `retry` can resume.
    Failed,
    /// The event was not for the attached sentinel.
    NotSentinel,
    /// `start` was already called.
    AlreadyStarted,
    /// `retry` outside the failed state.
    NothingToRetry,
    /// The loader was torn down.
    TornDown,
}

/// Outcome of feeding an event to the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDecision {
    Fetch(FetchTicket),
    Ignored(IgnoreReason),
}

impl LoadDecision {
    /// The ticket, if a fetch should start.
    #[must_use]
    pub const fn ticket(self) -> Option<FetchTicket> {
        match self {
            Self::Fetch(ticket) => Some(ticket),
            Self::Ignored(_) => None,
        }
    }
}
