use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::storage::Restaurant;

/// Query string of `GET /api/restaurants`, kept as raw strings so it can be
/// echoed back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<String>,
    pub price_range: Option<String>,
}

impl RestaurantQuery {
    /// Same query with empty values replaced by `None`
    pub fn normalized(&self) -> Self {
        Self {
            search: non_empty(&self.search),
            category: non_empty(&self.category),
            min_rating: non_empty(&self.min_rating),
            price_range: non_empty(&self.price_range),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

/// Parsed restaurant filters; every `None` imposes no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    /// Lowercased needle matched against name or description
    pub search: Option<String>,
    /// Lowercased category, exact match
    pub category: Option<String>,
    pub min_rating: Option<f64>,
    pub price_range: Option<i64>,
}

impl RestaurantFilter {
    pub fn parse(query: &RestaurantQuery) -> Result<Self, CatalogError> {
        let query = query.normalized();

        let min_rating = query
            .min_rating
            .map(|raw| {
                let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
                parsed.ok_or(CatalogError::InvalidFilter {
                    param: "minRating",
                    value: raw,
                })
            })
            .transpose()?;

        let price_range = query
            .price_range
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| CatalogError::InvalidFilter {
                    param: "priceRange",
                    value: raw,
                })
            })
            .transpose()?;

        Ok(Self {
            search: query.search.map(|s| s.to_lowercase()),
            category: query.category.map(|c| c.to_lowercase()),
            min_rating,
            price_range,
        })
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(needle) = &self.search {
            let in_name = restaurant.name.to_lowercase().contains(needle.as_str());
            if !in_name && !restaurant.description.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if restaurant.category.to_lowercase() != *category {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if restaurant.average_rating < min {
                return false;
            }
        }

        if let Some(price) = self.price_range {
            if restaurant.price_range != price {
                return false;
            }
        }

        true
    }

    /// Matching restaurants in file order
    pub fn apply(&self, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        restaurants
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: i64, name: &str, category: &str, rating: f64, price: i64) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            category: category.to_string(),
            average_rating: rating,
            price_range: price,
        }
    }

    fn sample() -> Vec<Restaurant> {
        vec![
            restaurant(1, "Pizza Palace", "Italian", 4.5, 2),
            restaurant(2, "Sushi Bar", "Japanese", 4.8, 3),
            restaurant(3, "Taco Stand", "Mexican", 3.2, 1),
            restaurant(4, "Pasta Corner", "Italian", 4.4, 2),
        ]
    }

    fn query(pairs: &[(&str, &str)]) -> RestaurantQuery {
        let mut q = RestaurantQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "search" => q.search = value,
                "category" => q.category = value,
                "minRating" => q.min_rating = value,
                "priceRange" => q.price_range = value,
                _ => unreachable!(),
            }
        }
        q
    }

    fn ids(restaurants: &[Restaurant]) -> Vec<i64> {
        restaurants.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let filter = RestaurantFilter::parse(&RestaurantQuery::default()).unwrap();
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = RestaurantFilter::parse(&query(&[("search", "pizza")])).unwrap();
        assert_eq!(ids(&filter.apply(&sample())), vec![1]);
    }

    #[test]
    fn test_search_matches_description() {
        let mut restaurants = sample();
        restaurants[2].description = "Street food with PIZZA on Fridays".to_string();

        let filter = RestaurantFilter::parse(&query(&[("search", "Pizza")])).unwrap();
        assert_eq!(ids(&filter.apply(&restaurants)), vec![1, 3]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let filter = RestaurantFilter::parse(&query(&[("category", "ITALIAN")])).unwrap();
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 4]);

        let filter = RestaurantFilter::parse(&query(&[("category", "Ital")])).unwrap();
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let filter = RestaurantFilter::parse(&query(&[("minRating", "4.5")])).unwrap();
        let result = filter.apply(&sample());

        assert_eq!(ids(&result), vec![1, 2]);
        assert!(result.iter().all(|r| r.average_rating >= 4.5));
    }

    #[test]
    fn test_price_range_exact() {
        let filter = RestaurantFilter::parse(&query(&[("priceRange", "2")])).unwrap();
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 4]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filter = RestaurantFilter::parse(&query(&[
            ("category", "italian"),
            ("minRating", "4.45"),
            ("priceRange", "2"),
        ]))
        .unwrap();
        assert_eq!(ids(&filter.apply(&sample())), vec![1]);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let filter = RestaurantFilter::parse(&query(&[
            ("search", ""),
            ("minRating", ""),
            ("priceRange", ""),
        ]))
        .unwrap();
        assert_eq!(filter, RestaurantFilter::default());
    }

    #[test]
    fn test_non_numeric_filters_are_rejected() {
        let err = RestaurantFilter::parse(&query(&[("minRating", "abc")])).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidFilter {
                param: "minRating",
                value: "abc".to_string()
            }
        );

        assert!(RestaurantFilter::parse(&query(&[("minRating", "NaN")])).is_err());
        assert!(RestaurantFilter::parse(&query(&[("priceRange", "2.5")])).is_err());
        assert!(RestaurantFilter::parse(&query(&[("priceRange", "cheap")])).is_err());
    }

    #[test]
    fn test_result_is_subset_and_idempotent() {
        let all = sample();
        let combos = [
            query(&[]),
            query(&[("search", "a")]),
            query(&[("category", "italian"), ("minRating", "4")]),
            query(&[("priceRange", "3")]),
            query(&[("search", "zzz")]),
        ];

        for q in &combos {
            let filter = RestaurantFilter::parse(q).unwrap();
            let once = filter.apply(&all);
            assert!(once.iter().all(|r| all.contains(r)));
            assert_eq!(filter.apply(&once), once);
        }
    }
}
