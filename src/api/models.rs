use crate::catalog::{CatalogError, RestaurantQuery};
use crate::storage::{DataSource, Restaurant, Review, StoreError};
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

pub const ROUTE_NOT_FOUND: &str = "API endpoint not found";
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const MALFORMED_DATA: &str = "Data files are malformed";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<DataSource>,
}

/// Success envelope: `{ success: true, data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Response of `GET /api/restaurants`
#[derive(Debug, Serialize)]
pub struct RestaurantListResponse {
    pub success: bool,
    pub data: Vec<Restaurant>,
    pub total: usize,
    /// Filters as received, `null` when absent
    pub filters: RestaurantQuery,
}

/// Query string of `GET /api/reviews`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub restaurant_id: Option<String>,
}

impl ReviewQuery {
    /// Parsed `restaurantId`; empty counts as absent
    pub fn restaurant_id(&self) -> Result<Option<i64>, AppError> {
        match self.restaurant_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Invalid value for restaurantId: {raw}"))),
        }
    }
}

/// Response of `GET /api/reviews`
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub success: bool,
    pub data: Vec<Review>,
    pub total: usize,
}

/// Service banner served at `/`
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub restaurants: String,
    pub reviews: String,
    pub stats: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Failure envelope: `{ success: false, message }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Application error type
#[derive(Debug, PartialEq)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    MalformedData,
    Internal(String),
}

impl AppError {
    /// Log a storage failure and reduce it to a client-safe error.
    /// `context` is what the client sees for I/O failures.
    pub fn storage(context: &str, err: StoreError) -> Self {
        error!(error = %err, "{}", context);
        if err.is_malformed() {
            AppError::MalformedData
        } else {
            AppError::Internal(context.to_string())
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()),
            CatalogError::InvalidFilter { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MalformedData => (StatusCode::INTERNAL_SERVER_ERROR, MALFORMED_DATA.to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse {
            success: false,
            message,
        }))
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_catalog_errors_map_to_status() {
        let not_found: AppError = CatalogError::NotFound { id: "9".to_string() }.into();
        assert_eq!(not_found, AppError::NotFound(RESTAURANT_NOT_FOUND.to_string()));

        let bad: AppError = CatalogError::InvalidFilter {
            param: "priceRange",
            value: "x".to_string(),
        }
        .into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let io = StoreError::Io {
            path: PathBuf::from("/secret/restaurants.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(
            AppError::storage("Failed to fetch restaurants", io),
            AppError::Internal("Failed to fetch restaurants".to_string())
        );

        let shape = StoreError::NotAList {
            path: PathBuf::from("reviews.json"),
        };
        assert_eq!(AppError::storage("Failed to fetch statistics", shape), AppError::MalformedData);
    }

    #[test]
    fn test_review_query_parsing() {
        let empty = ReviewQuery {
            restaurant_id: Some(String::new()),
        };
        assert_eq!(empty.restaurant_id(), Ok(None));

        let valid = ReviewQuery {
            restaurant_id: Some("12".to_string()),
        };
        assert_eq!(valid.restaurant_id(), Ok(Some(12)));

        let invalid = ReviewQuery {
            restaurant_id: Some("twelve".to_string()),
        };
        assert!(matches!(invalid.restaurant_id(), Err(AppError::BadRequest(_))));
    }
}
