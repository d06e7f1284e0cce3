//! Internal API response types for the YTS API.
//!
//! These types are internal to `marquee-yts` and are not exposed to consumers.
//! External consumers get the domain types defined in `marquee-core`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::{MAX_PAGE_SIZE, YtsClientConfig};
use crate::error::{YtsError, YtsResult};

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal, validated configuration for the YTS client.
#[derive(Debug, Clone)]
pub struct YtsConfig {
    /// API root, guaranteed `https`
    pub base_url: Url,
    /// Movies per list page, within `1..=MAX_PAGE_SIZE`
    pub page_size: u32,
    /// Hosts cover image URLs may point at
    pub allowed_image_hosts: Vec<String>,
}

impl YtsConfig {
    /// Validate the public configuration.
    pub fn from_public(config: &YtsClientConfig) -> YtsResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.scheme() != "https" {
            return Err(YtsError::InsecureUrl {
                url: config.base_url.clone(),
            });
        }
        Ok(Self {
            base_url,
            page_size: config.page_size.clamp(1, MAX_PAGE_SIZE),
            allowed_image_hosts: config.allowed_image_hosts.clone(),
        })
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Envelope every YTS response is wrapped in.
///
/// `status` is `"ok"` on success; on failure it is `"error"` and `data` is
/// usually absent.
#[derive(Debug, Clone, Deserialize)]
pub struct YtsEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl YtsEnvelope {
    /// Decode `body`, reject error envelopes and deserialize its `data`.
    ///
    /// A missing `status` is accepted. A missing or null `data` is `None`.
    pub fn decode<T: DeserializeOwned>(body: &Value) -> YtsResult<Option<T>> {
        let envelope: Self = serde_json::from_value(body.clone())?;

        if let Some(status) = envelope
            .status
            .as_deref()
            .filter(|status| !status.eq_ignore_ascii_case("ok"))
        {
            tracing::warn!(status, message = %envelope.status_message, "YTS returned an error envelope");
            return Err(YtsError::ApiStatus {
                status: status.to_string(),
                message: envelope.status_message,
            });
        }

        envelope
            .data
            .filter(|data| !data.is_null())
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }
}

/// `data` payload of `list_movies.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMoviesData {
    /// Total number of movies in the catalog
    pub movie_count: u64,
    /// Page number echoed back by the server
    pub page_number: u32,
    /// Movies on this page; omitted by YTS past the last page
    #[serde(default)]
    pub movies: Option<Vec<Value>>,
}

/// `data` payload of `movie_details.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsData {
    #[serde(default)]
    pub movie: Option<Value>,
}
