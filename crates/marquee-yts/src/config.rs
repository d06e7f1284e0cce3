//! Public configuration for the YTS client.
//!
//! This module provides a stable public API for configuring the YTS client.
//! The internal config is derived from this and validated on client creation.

use std::time::Duration;

/// Default YTS API root.
pub const DEFAULT_BASE_URL: &str = "https://yts.mx/api/v2";

/// Default number of movies per page.
pub const DEFAULT_PAGE_SIZE: u32 = 16;

/// Largest `limit` the YTS list endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

/// How long a successful response is served from cache.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(3600);

/// Maximum number of cached responses.
pub const DEFAULT_CACHE_CAPACITY: u64 = 512;

/// Hosts cover images may be loaded from.
pub const DEFAULT_IMAGE_HOSTS: &[&str] = &["yts.mx", "img.yts.mx"];

/// Configuration for the YTS client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use marquee_yts::YtsClientConfig;
/// use std::time::Duration;
///
/// let config = YtsClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_page_size(20);
/// assert_eq!(config.page_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct YtsClientConfig {
    /// Base URL for the YTS API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Movies per list page
    pub(crate) page_size: u32,
    /// Time-to-live of cached responses
    pub(crate) freshness: Duration,
    /// Maximum number of cached responses
    pub(crate) cache_capacity: u64,
    /// Hosts cover image URLs may point at
    pub(crate) allowed_image_hosts: Vec<String>,
}

impl Default for YtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("marquee-yts/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
            freshness: DEFAULT_FRESHNESS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            allowed_image_hosts: DEFAULT_IMAGE_HOSTS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl YtsClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the YTS API.
    ///
    /// Defaults to `https://yts.mx/api/v2`. Must use `https`; this is checked
    /// when the client is created.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of movies per page, clamped to `1..=50`.
    ///
    /// Defaults to 16.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set how long successful responses are served from cache.
    ///
    /// Defaults to one hour.
    #[must_use]
    pub const fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    /// Set the maximum number of cached responses.
    #[must_use]
    pub const fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Replace the cover image host allowlist.
    #[must_use]
    pub fn with_allowed_image_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_image_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Movies per list page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Configured API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
