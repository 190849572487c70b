use serde::Serialize;

use super::CatalogError;
use crate::storage::{Restaurant, Review};

/// A restaurant with its reviews attached under `reviews`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub reviews: Vec<Review>,
}

/// Reviews newest first, optionally limited to one restaurant.
/// Equal timestamps keep file order.
pub fn list_reviews(reviews: &[Review], restaurant_id: Option<i64>) -> Vec<Review> {
    let mut matching: Vec<Review> = reviews
        .iter()
        .filter(|r| restaurant_id.is_none_or(|id| r.restaurant_id == id))
        .cloned()
        .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matching
}

pub fn reviews_for(reviews: &[Review], restaurant_id: i64) -> Vec<Review> {
    list_reviews(reviews, Some(restaurant_id))
}

/// Look a restaurant up by the textual id from the request path.
///
/// An id that is not an integer can never match, so it is reported as
/// not found rather than as a bad request.
pub fn find_restaurant(
    restaurants: &[Restaurant],
    reviews: &[Review],
    id: &str,
) -> Result<RestaurantDetail, CatalogError> {
    let not_found = || CatalogError::NotFound { id: id.to_string() };

    let id_num = id.trim().parse::<i64>().map_err(|_| not_found())?;
    let restaurant = restaurants
        .iter()
        .find(|r| r.id == id_num)
        .cloned()
        .ok_or_else(not_found)?;

    Ok(RestaurantDetail {
        restaurant,
        reviews: reviews_for(reviews, id_num),
    })
}
