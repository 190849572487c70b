use crate::api::models::*;
use crate::catalog::Stats;
use axum::{extract::State, Json};
use tracing::info;

pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Stats>>, AppError> {
    let snapshot = state
        .source
        .snapshot()
        .await
        .map_err(|e| AppError::storage("Failed to fetch statistics", e))?;

    let stats = Stats::compute(&snapshot.restaurants, &snapshot.reviews);
    info!(
        restaurants = stats.total_restaurants,
        reviews = stats.total_reviews,
        average = stats.average_rating,
        "Computed stats"
    );

    Ok(Json(ApiResponse::ok(stats)))
}
