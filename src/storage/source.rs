use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use super::json_file::{JsonFileStore, Snapshot, StoreError};
use super::records::{Restaurant, Review};

/// When the JSON files are (re)read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Every request reads the files it needs
    #[default]
    PerRequest,
    /// Files are read once at boot and shared for the life of the process
    OnStartup,
}

impl fmt::Display for ReloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerRequest => f.write_str("per_request"),
            Self::OnStartup => f.write_str("on_startup"),
        }
    }
}

impl FromStr for ReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_request" | "per-request" => Ok(Self::PerRequest),
            "on_startup" | "on-startup" | "startup" => Ok(Self::OnStartup),
            other => Err(format!("unknown reload policy: {other}")),
        }
    }
}

/// Read-only access to the collections, honouring a [`ReloadPolicy`].
///
/// Handlers only ever see immutable views; nothing here is written back.
#[derive(Debug)]
pub enum DataSource {
    PerRequest(JsonFileStore),
    Cached(Snapshot),
}

impl DataSource {
    /// Build a source; `OnStartup` loads the snapshot immediately.
    pub async fn open(store: JsonFileStore, policy: ReloadPolicy) -> Result<Self, StoreError> {
        match policy {
            ReloadPolicy::PerRequest => Ok(Self::PerRequest(store)),
            ReloadPolicy::OnStartup => {
                let snapshot = store.snapshot().await?;
                info!(
                    restaurants = snapshot.restaurants.len(),
                    reviews = snapshot.reviews.len(),
                    "Snapshot loaded"
                );
                Ok(Self::Cached(snapshot))
            }
        }
    }

    pub fn policy(&self) -> ReloadPolicy {
        match self {
            Self::PerRequest(_) => ReloadPolicy::PerRequest,
            Self::Cached(_) => ReloadPolicy::OnStartup,
        }
    }

    pub async fn restaurants(&self) -> Result<Arc<[Restaurant]>, StoreError> {
        match self {
            Self::PerRequest(store) => Ok(store.restaurants().await?.into()),
            Self::Cached(snapshot) => Ok(snapshot.restaurants.clone()),
        }
    }

    pub async fn reviews(&self) -> Result<Arc<[Review]>, StoreError> {
        match self {
            Self::PerRequest(store) => Ok(store.reviews().await?.into()),
            Self::Cached(snapshot) => Ok(snapshot.reviews.clone()),
        }
    }

    pub async fn snapshot(&self) -> Result<Snapshot, StoreError> {
        match self {
            Self::PerRequest(store) => store.snapshot().await,
            Self::Cached(snapshot) => Ok(snapshot.clone()),
        }
    }
}
