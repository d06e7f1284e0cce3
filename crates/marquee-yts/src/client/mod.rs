//! YTS client for listing movies and fetching movie details.
//!
//! This module provides the main client interface for interacting with
//! the YTS API. All requests go through the freshness cache.

mod detail;
mod list;

use serde_json::Value;
use url::Url;

use crate::cache::ResponseCache;
use crate::config::YtsClientConfig;
use crate::error::YtsResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::YtsConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default YTS client using the reqwest HTTP backend.
pub type DefaultYtsClient = YtsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the YTS API.
///
/// Generic over an HTTP backend for testing. Use `DefaultYtsClient` in
/// production code and interact with it through `CatalogPort`.
pub struct YtsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: YtsConfig,
    pub(crate) cache: ResponseCache,
}

impl DefaultYtsClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `InsecureUrl` when the base URL is not `https`.
    pub fn new(config: &YtsClientConfig) -> YtsResult<Self> {
        let internal_config = YtsConfig::from_public(config)?;
        let backend = ReqwestBackend::new(config)?;
        tracing::debug!(
            base_url = %internal_config.base_url,
            page_size = internal_config.page_size,
            "Created YTS client"
        );
        Ok(Self {
            backend,
            config: internal_config,
            cache: ResponseCache::new(config.cache_capacity, config.freshness),
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> YtsResult<Self> {
        Self::new(&YtsClientConfig::default())
    }
}

impl<B: HttpBackend> YtsClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: &YtsClientConfig, backend: B) -> YtsResult<Self> {
        Ok(Self {
            backend,
            config: YtsConfig::from_public(config)?,
            cache: ResponseCache::new(config.cache_capacity, config.freshness),
        })
    }

    /// Movies per list page this client was configured with.
    pub const fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Drop every cached response.
    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all().await;
    }

    /// Fetch a response body and project it, serving it from cache while fresh.
    ///
    /// A body is cached only once `project` accepts it, so error envelopes
    /// and malformed records are fetched again on the next call.
    pub(crate) async fn fetch_projected<T, F>(&self, url: &Url, project: F) -> YtsResult<T>
    where
        F: FnOnce(&Value) -> YtsResult<T>,
    {
        let key = url.to_string();
        if let Some(body) = self.cache.get(&key).await {
            tracing::debug!(%url, "Cache hit");
            return project(&body);
        }
        tracing::debug!(%url, "Cache miss");

        let body: Value = self.backend.get_json(url).await?;
        let projected = project(&body)?;

        self.cache.insert(key, body).await;
        tracing::debug!(cached = self.cache.entry_count(), "Cached response");
        Ok(projected)
    }
}
