//! HTTP API server

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// Routes are matched exactly: no trailing-slash normalization and no case
/// folding, so `/repo/x/Resources` falls through to the `Invalid path`
/// fallback. Non-GET methods on a matched route get a plain-text 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/repos",
            get(handlers::list_repositories).fallback(handlers::method_not_allowed),
        )
        .route(
            "/repo/:id",
            get(handlers::get_repository).fallback(handlers::method_not_allowed),
        )
        .route(
            "/repo/:id/resources",
            get(handlers::list_resources).fallback(handlers::method_not_allowed),
        )
        .route(
            "/repo/:id/resource/:resource_id",
            get(handlers::get_resource).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::invalid_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
