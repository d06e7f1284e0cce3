//! Movie view models.
//!
//! These are the shapes the list and detail views consume. They are produced
//! by a catalog adapter's projection step and are immutable once fetched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Upstream identifier of a catalog entry. Always positive.
pub type MovieId = u64;

/// Base URL for embedded trailers.
const TRAILER_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// A movie as shown in the list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Unique catalog identifier
    pub id: MovieId,
    /// Display title
    pub title: String,
    /// Medium-size cover image URL (empty when unavailable or not allowed)
    pub cover_image_url: String,
    /// Rating in `[0, 10]`
    pub rating: f32,
    /// Release year
    pub year: i32,
}

impl MovieSummary {
    /// Whether a cover image can be rendered for this movie.
    #[must_use]
    pub fn has_cover(&self) -> bool {
        !self.cover_image_url.is_empty()
    }
}

/// A single download descriptor (torrent) for a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOption {
    /// Quality label, e.g. `1080p`
    pub quality: String,
    /// Release type, e.g. `bluray` or `web`
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable size, e.g. `1.95 GB`
    pub size_label: String,
    /// Seeder count
    pub seeds: u32,
    /// Peer count
    pub peers: u32,
    /// Download URL
    pub url: String,
    /// Upstream hash, used only as a list key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl DownloadOption {
    /// Stable key for rendering lists of options.
    ///
    /// Falls back to the URL when the upstream hash is missing.
    pub fn list_key(&self) -> &str {
        self.hash.as_deref().unwrap_or(&self.url)
    }
}

/// A movie as shown in the detail view.
///
/// Superset of [`MovieSummary`]. Optional sections are `None` (or empty) when
/// the upstream record lacks them, and the view omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Fields shared with the list view
    #[serde(flatten)]
    pub summary: MovieSummary,
    /// Large cover image URL (empty when unavailable or not allowed)
    pub large_cover_image_url: String,
    /// Runtime in minutes (0 when unknown)
    pub runtime_minutes: u32,
    /// Original language code
    pub language: Option<String>,
    /// MPA rating, e.g. `PG-13`
    pub mpa_rating: Option<String>,
    /// Genres; order is not meaningful
    pub genres: BTreeSet<String>,
    /// Full synopsis
    pub synopsis: Option<String>,
    /// YouTube trailer code
    pub trailer_code: Option<String>,
    /// Download options in upstream order
    pub downloads: Vec<DownloadOption>,
}

impl MovieDetail {
    /// Catalog identifier.
    #[must_use]
    pub const fn id(&self) -> MovieId {
        self.summary.id
    }

    /// Embed URL for the trailer, if one is known.
    pub fn trailer_url(&self) -> Option<String> {
        self.trailer_code
            .as_deref()
            .map(|code| format!("{TRAILER_EMBED_BASE}{code}"))
    }

    /// Language code upper-cased for display.
    pub fn language_label(&self) -> Option<String> {
        self.language.as_deref().map(str::to_uppercase)
    }
}
