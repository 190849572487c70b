use serde::Serialize;

use crate::storage::{Restaurant, Review};

pub const TOP_RATED_LIMIT: usize = 5;

/// Aggregate figures for `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_restaurants: usize,
    pub total_reviews: usize,
    /// Mean of the stored per-restaurant averages, one decimal place
    pub average_rating: f64,
    pub top_rated_restaurants: Vec<Restaurant>,
}

impl Stats {
    pub fn compute(restaurants: &[Restaurant], reviews: &[Review]) -> Self {
        let total_restaurants = restaurants.len();

        let average_rating = if total_restaurants == 0 {
            0.0
        } else {
            let sum: f64 = restaurants.iter().map(|r| r.average_rating).sum();
            round_one_decimal(sum / total_restaurants as f64)
        };

        // sort_by is stable, so ties stay in file order
        let mut top_rated_restaurants = restaurants.to_vec();
        top_rated_restaurants.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        top_rated_restaurants.truncate(TOP_RATED_LIMIT);

        Self {
            total_restaurants,
            total_reviews: reviews.len(),
            average_rating,
            top_rated_restaurants,
        }
    }
}

/// Round to one decimal using the exact binary value of `value`, so a mean
/// stored as 1.4499999... goes down even though `value * 10.0` lands on 14.5.
/// Exact ties go up.
fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    // error introduced by the multiplication, computed exactly with fma
    let residue = value.mul_add(10.0, -scaled);
    let floor = scaled.floor();
    let frac = scaled - floor;

    let round_up = if frac == 0.5 { residue >= 0.0 } else { frac > 0.5 };
    let tenths = if round_up { floor + 1.0 } else { floor };
    tenths / 10.0
}
