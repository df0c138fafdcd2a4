// src/cache.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::trip::Trip;

pub const CACHE_KEY: &str = "trip-planner.v1";
pub const CACHE_VERSION: u32 = 1;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct CacheDocument {
    version: u32,
    #[serde(default)]
    recent_trip: Option<Trip>,
    #[serde(default)]
    trips: Vec<Trip>,
}

/// Shared cache for trips handed between views.
///
/// Everything lives under the single versioned key [`CACHE_KEY`]. A file
/// written with another version is ignored rather than migrated. Writes
/// go to memory and then through to disk; last writer wins.
#[derive(Clone)]
pub struct TripCache {
    path: Option<PathBuf>,
    doc: Arc<RwLock<CacheDocument>>,
}

impl TripCache {
    pub async fn open(dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{CACHE_KEY}.json"));

        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<CacheDocument>(&bytes) {
                Ok(doc) if doc.version == CACHE_VERSION => doc,
                Ok(doc) => {
                    tracing::warn!(found = doc.version, expected = CACHE_VERSION, "Ignoring cache with unknown version");
                    CacheDocument::default()
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable cache");
                    CacheDocument::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheDocument::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            doc: Arc::new(RwLock::new(doc)),
        })
    }

    /// Cache that never touches disk.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            doc: Arc::new(RwLock::new(CacheDocument::default())),
        }
    }

    pub async fn recent_trip(&self) -> Option<Trip> {
        self.doc.read().await.recent_trip.clone()
    }

    pub async fn store_recent_trip(&self, trip: &Trip) -> Result<(), AppError> {
        self.update(|doc| doc.recent_trip = Some(trip.clone())).await
    }

    pub async fn trips(&self) -> Vec<Trip> {
        self.doc.read().await.trips.clone()
    }

    pub async fn store_trips(&self, trips: &[Trip]) -> Result<(), AppError> {
        self.update(|doc| doc.trips = trips.to_vec()).await
    }

    /// Applies `change` to a copy, writes it out, then publishes it. A
    /// failed write leaves the cache as it was.
    async fn update(&self, change: impl FnOnce(&mut CacheDocument)) -> Result<(), AppError> {
        let mut doc = self.doc.write().await;
        let mut next = doc.clone();
        change(&mut next);
        // Held guard keeps disk order in step with memory order.
        self.persist(&mut next).await?;
        *doc = next;
        Ok(())
    }

    async fn persist(&self, doc: &mut CacheDocument) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        doc.version = CACHE_VERSION;
        let bytes = serde_json::to_vec(&*doc)?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        tracing::debug!(path = %path.display(), trips = doc.trips.len(), "Cache written");
        Ok(())
    }
}
