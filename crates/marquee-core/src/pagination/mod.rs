//! Page-state store and pagination controls.
//!
//! One [`PageStore`] exists per UI session (an HTTP request, a CLI
//! invocation). It is passed by reference to the list view and its controls
//! and is never shared across sessions.

mod controls;
mod error;
mod jump;
mod store;

pub use controls::{
    FIRST_GLYPH, LAST_GLYPH, NEXT_GLYPH, PREVIOUS_GLYPH, PageLink, PageLinkKind,
    PaginationControls,
};
pub use error::PaginationError;
pub use jump::parse_page_jump;
pub use store::{PageStore, PaginationState};

/// Default number of page links shown on each side of the current page.
pub const DEFAULT_NEIGHBOR_WINDOW: u32 = 2;
