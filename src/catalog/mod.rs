//! Pure query functions over in-memory collections.
//!
//! Nothing in here touches the filesystem; callers hand in whatever
//! snapshot the storage layer produced.

pub mod filter;
pub mod lookup;
pub mod stats;

use thiserror::Error;

pub use filter::{RestaurantFilter, RestaurantQuery};
pub use lookup::{find_restaurant, list_reviews, RestaurantDetail};
pub use stats::Stats;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("restaurant {id} not found")]
    NotFound { id: String },

    #[error("Invalid value for {param}: {value}")]
    InvalidFilter { param: &'static str, value: String },
}
