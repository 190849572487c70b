use crate::api::models::*;
use axum::{http::StatusCode, response::IntoResponse, Json};

/// Service banner listing the public endpoints
pub async fn root_handler() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Restaurant Review API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            restaurants: "/api/restaurants".to_string(),
            reviews: "/api/reviews".to_string(),
            stats: "/api/stats".to_string(),
        },
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for every unmatched route
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: ROUTE_NOT_FOUND.to_string(),
        }),
    )
}
