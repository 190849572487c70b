use crate::api::models::AppState;
use crate::api::stats::handlers::stats_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/stats", get(stats_handler))
}
