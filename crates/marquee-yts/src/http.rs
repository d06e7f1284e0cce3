//! HTTP backend abstraction for the YTS API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one attempt per request.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::YtsClientConfig;
use crate::error::{YtsError, YtsResult};

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `CatalogPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> YtsResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &YtsClientConfig) -> YtsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .https_only(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> YtsResult<T> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(YtsError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Decode separately so a bad body surfaces as a JSON error, not a
        // network error
        let body = response.bytes().await?;
        let data: T = serde_json::from_slice(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub struct CannedResponse {
        pub json: serde_json::Value,
        pub status: u16,
    }

    impl CannedResponse {
        /// A 200 response with the given body.
        pub fn ok(json: serde_json::Value) -> Self {
            Self { json, status: 200 }
        }

        /// A non-2xx response.
        pub fn failure(status: u16) -> Self {
            Self {
                json: serde_json::Value::Null,
                status,
            }
        }
    }

    /// A fake HTTP backend that returns canned responses and counts requests.
    ///
    /// Patterns are matched against the full URL in insertion order.
    pub struct FakeBackend {
        responses: Arc<Mutex<Vec<(String, CannedResponse)>>>,
        default_response: Option<CannedResponse>,
        requests: Arc<AtomicUsize>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(Vec::new())),
                default_response: None,
                requests: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push((url_contains.to_string(), response));
            self
        }

        /// Set a default response for URLs that don't match any pattern.
        pub fn with_default(mut self, response: CannedResponse) -> Self {
            self.default_response = Some(response);
            self
        }

        /// Shared handle to the request counter.
        pub fn request_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.requests)
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            {
                let responses = self.responses.lock().unwrap();
                for (pattern, response) in responses.iter() {
                    if url.contains(pattern.as_str()) {
                        return Some(response.clone());
                    }
                }
            }
            self.default_response.clone()
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> YtsResult<T> {
            self.requests.fetch_add(1, Ordering::SeqCst);

            let response =
                self.find_response(url.as_str())
                    .ok_or_else(|| YtsError::ApiRequestFailed {
                        status: 404,
                        url: url.to_string(),
                    })?;

            if !(200..300).contains(&response.status) {
                return Err(YtsError::ApiRequestFailed {
                    status: response.status,
                    url: url.to_string(),
                });
            }

            serde_json::from_value(response.json).map_err(Into::into)
        }
    }
}
