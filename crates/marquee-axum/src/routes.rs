//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers::{self, health_check};
use crate::state::AppState;

/// Create the main router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::movies::list))
        .route("/movie/{id}", get(handlers::movies::detail))
        .route("/health", get(health_check))
        .fallback(handlers::movies::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
