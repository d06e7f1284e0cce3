#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod loader;
pub mod pagination;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    CatalogPage, DownloadOption, MovieDetail, MovieId, MovieSummary, PageRequest, total_pages,
};
pub use loader::{
    FetchTicket, IgnoreReason, IncrementalLoader, LoadDecision, LoadTrigger, LoadedPageSequence,
    LoaderState, Sentinel,
};
pub use pagination::{
    DEFAULT_NEIGHBOR_WINDOW, PageLink, PageLinkKind, PageStore, PaginationControls,
    PaginationError, PaginationState, parse_page_jump,
};
pub use ports::{CatalogError, CatalogPort, CatalogResult};
