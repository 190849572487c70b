use crate::api::models::*;
use crate::catalog;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::info;

pub async fn list_reviews_handler(
    State(state): State<AppState>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> Result<Json<ReviewListResponse>, AppError> {
    let Query(query) = query?;
    let restaurant_id = query.restaurant_id()?;

    let reviews = state
        .source
        .reviews()
        .await
        .map_err(|e| AppError::storage("Failed to fetch reviews", e))?;

    let data = catalog::list_reviews(&reviews, restaurant_id);
    info!(?restaurant_id, matched = data.len(), "Listed reviews");

    Ok(Json(ReviewListResponse {
        success: true,
        total: data.len(),
        data,
    }))
}
