use crate::api::models::AppState;
use crate::api::restaurants::handlers::{get_restaurant_handler, list_restaurants_handler};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/restaurants", get(list_restaurants_handler))
        .route("/api/restaurants/{id}", get(get_restaurant_handler))
}
