use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A restaurant as stored in `restaurants.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Pre-computed average, not derived from reviews
    pub average_rating: f64,
    pub price_range: i64,
}

/// A review as stored in `reviews.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Review {
    pub id: i64,
    pub restaurant_id: i64,
    pub created_at: DateTime<Utc>,
    pub rating: u8,
    pub text: String,
}
