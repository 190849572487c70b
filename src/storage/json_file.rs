use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::records::{Restaurant, Review};

/// Failure while loading a collection file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path:?} as JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{path:?} does not contain a JSON array")]
    NotAList { path: PathBuf },

    #[error("invalid record #{index} in {path:?}: {source}")]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// The file was readable JSON but its shape is wrong
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::NotAList { .. } | Self::InvalidRecord { .. })
    }
}

/// Both collections, loaded together and never mutated
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub restaurants: Arc<[Restaurant]>,
    pub reviews: Arc<[Review]>,
}

/// Flat-file "database": one JSON array per collection
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    restaurants_file: String,
    reviews_file: String,
}

impl JsonFileStore {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        restaurants_file: impl Into<String>,
        reviews_file: impl Into<String>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            restaurants_file: restaurants_file.into(),
            reviews_file: reviews_file.into(),
        }
    }

    /// Read a whole file and decode it as a list of `T`
    pub async fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.data_dir.join(file);

        let bytes = tokio::fs::read(&path).await.map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        let Value::Array(items) = value else {
            return Err(StoreError::NotAList { path });
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|source| StoreError::InvalidRecord {
                    path: path.clone(),
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<T>, _>>()?;

        debug!(path = ?path, count = records.len(), "Loaded collection");
        Ok(records)
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, StoreError> {
        self.read_collection(&self.restaurants_file).await
    }

    pub async fn reviews(&self) -> Result<Vec<Review>, StoreError> {
        self.read_collection(&self.reviews_file).await
    }

    pub async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            restaurants: self.restaurants().await?.into(),
            reviews: self.reviews().await?.into(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    pub(crate) const RESTAURANTS: &str = r#"[
        {"id": 1, "name": "Pizza Palace", "description": "Wood-fired pizza", "category": "Italian", "averageRating": 4.5, "priceRange": 2},
        {"id": 2, "name": "Sushi Bar", "description": "Fresh nigiri", "category": "Japanese", "averageRating": 4.8, "priceRange": 3},
        {"id": 3, "name": "Noodle House", "description": "Hand-pulled noodles and pizza-style flatbread", "category": "Chinese", "averageRating": 3.9, "priceRange": 1}
    ]"#;

    pub(crate) const REVIEWS: &str = r#"[
        {"id": 10, "restaurantId": 1, "createdAt": "2024-01-05T12:00:00Z", "rating": 4, "text": "Solid crust"},
        {"id": 11, "restaurantId": 1, "createdAt": "2024-02-10T18:30:00Z", "rating": 5, "text": "Best in town"},
        {"id": 12, "restaurantId": 2, "createdAt": "2024-01-20T08:00:00Z", "rating": 5, "text": "Very fresh"}
    ]"#;

    /// Temp data dir holding the two fixture files
    pub(crate) fn fixture_dir(restaurants: &str, reviews: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("restaurants.json"), restaurants).unwrap();
        fs::write(dir.path().join("reviews.json"), reviews).unwrap();
        dir
    }

    fn store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path(), "restaurants.json", "reviews.json")
    }

    #[tokio::test]
    async fn test_snapshot_loads_both_files() {
        let dir = fixture_dir(RESTAURANTS, REVIEWS);
        let snapshot = store(&dir).snapshot().await.unwrap();

        assert_eq!(snapshot.restaurants.len(), 3);
        assert_eq!(snapshot.reviews.len(), 3);
        assert_eq!(snapshot.restaurants[0].name, "Pizza Palace");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = store(&dir).restaurants().await.unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!err.is_malformed());
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = fixture_dir("[{", REVIEWS);
        let err = store(&dir).restaurants().await.unwrap_err();

        assert!(matches!(err, StoreError::Parse { .. }));
        assert!(!err.is_malformed());
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_malformed() {
        let dir = fixture_dir(r#"{"restaurants": []}"#, REVIEWS);
        let err = store(&dir).restaurants().await.unwrap_err();

        assert!(matches!(err, StoreError::NotAList { .. }));
        assert!(err.is_malformed());
    }

    #[tokio::test]
    async fn test_bad_record_reports_index() {
        let reviews = r#"[
            {"id": 1, "restaurantId": 1, "createdAt": "2024-01-01T00:00:00Z", "rating": 5, "text": "ok"},
            {"id": 2, "restaurantId": "one", "createdAt": "2024-01-01T00:00:00Z", "rating": 5, "text": "bad"}
        ]"#;
        let dir = fixture_dir(RESTAURANTS, reviews);
        let err = store(&dir).reviews().await.unwrap_err();

        match err {
            StoreError::InvalidRecord { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_array_is_valid() {
        let dir = fixture_dir("[]", "[]");
        let snapshot = store(&dir).snapshot().await.unwrap();

        assert!(snapshot.restaurants.is_empty());
        assert!(snapshot.reviews.is_empty());
    }
}
