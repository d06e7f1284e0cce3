//! HTTP handlers.
//!
//! Handlers are thin: they validate input, call the catalog port and hand
//! view models to `views`.

pub mod movies;

/// Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}
