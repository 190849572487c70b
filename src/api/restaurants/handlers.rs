use crate::api::models::*;
use crate::catalog::{self, RestaurantDetail, RestaurantFilter, RestaurantQuery};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::info;

pub async fn list_restaurants_handler(
    State(state): State<AppState>,
    query: Result<Query<RestaurantQuery>, QueryRejection>,
) -> Result<Json<RestaurantListResponse>, AppError> {
    let Query(query) = query?;
    let query = query.normalized();
    let filter = RestaurantFilter::parse(&query)?;

    let restaurants = state
        .source
        .restaurants()
        .await
        .map_err(|e| AppError::storage("Failed to fetch restaurants", e))?;

    let data = filter.apply(&restaurants);
    info!(matched = data.len(), of = restaurants.len(), "Listed restaurants");

    Ok(Json(RestaurantListResponse {
        success: true,
        total: data.len(),
        data,
        filters: query,
    }))
}

pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RestaurantDetail>>, AppError> {
    let snapshot = state
        .source
        .snapshot()
        .await
        .map_err(|e| AppError::storage("Failed to fetch restaurant", e))?;

    let detail = catalog::find_restaurant(&snapshot.restaurants, &snapshot.reviews, &id)?;
    info!(id = detail.restaurant.id, reviews = detail.reviews.len(), "Fetched restaurant");

    Ok(Json(ApiResponse::ok(detail)))
}
