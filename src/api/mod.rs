pub mod handlers;
pub mod models;
pub mod restaurants;
pub mod reviews;
pub mod stats;

// Re-exports
pub use models::*;

use crate::api::handlers::{health_handler, not_found_handler, root_handler};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application router with middleware attached
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(restaurants::routes())
        .merge(reviews::routes())
        .merge(stats::routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
