//! Renderable pagination controls.

use serde::{Deserialize, Serialize};

/// Label for the jump-to-first control.
pub const FIRST_GLYPH: &str = "«";
/// Label for the previous-page control.
pub const PREVIOUS_GLYPH: &str = "‹";
/// Label for the next-page control.
pub const NEXT_GLYPH: &str = "›";
/// Label for the jump-to-last control.
pub const LAST_GLYPH: &str = "»";

/// Role of a link within the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLinkKind {
    First,
    Previous,
    Number,
    Next,
    Last,
}

/// One clickable (or disabled) element of the control bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub kind: PageLinkKind,
    /// Target page when activated
    pub page: u32,
    pub label: String,
    /// Rendered but not activatable
    pub disabled: bool,
    /// Marks the page currently displayed
    pub current: bool,
}

impl PageLink {
    pub(crate) fn edge(kind: PageLinkKind, page: u32, disabled: bool) -> Self {
        let label = match kind {
            PageLinkKind::First => FIRST_GLYPH,
            PageLinkKind::Previous => PREVIOUS_GLYPH,
            PageLinkKind::Next => NEXT_GLYPH,
            PageLinkKind::Last => LAST_GLYPH,
            PageLinkKind::Number => "",
        };
        Self {
            kind,
            page,
            label: label.to_string(),
            disabled,
            current: false,
        }
    }

    pub(crate) fn number(page: u32, current: bool) -> Self {
        Self {
            kind: PageLinkKind::Number,
            page,
            label: page.to_string(),
            disabled: false,
            current,
        }
    }

    /// Whether activating this link should navigate anywhere.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !self.disabled && !self.current
    }
}

/// The full control bar: `« ‹ [window] › »`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationControls {
    pub first: PageLink,
    pub previous: PageLink,
    pub pages: Vec<PageLink>,
    pub next: PageLink,
    pub last: PageLink,
}

impl PaginationControls {
    /// All links in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PageLink> {
        [&self.first, &self.previous]
            .into_iter()
            .chain(self.pages.iter())
            .chain([&self.next, &self.last])
    }
}
