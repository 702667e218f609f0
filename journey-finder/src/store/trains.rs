//! In-memory train store with optional JSON file persistence.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::Train;
use crate::planner::TrainProvider;

use super::error::StoreError;

/// Thread-safe store of every known train.
///
/// Reads hand out a snapshot clone, so a search never observes a write
/// that lands halfway through it. When opened on a file, every write is
/// persisted before it becomes visible.
#[derive(Debug, Clone, Default)]
pub struct TrainStore {
    trains: Arc<RwLock<Vec<Train>>>,
    path: Option<PathBuf>,
}

impl TrainStore {
    /// Create an empty store held only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Create an in-memory store holding the given trains.
    pub fn with_trains(trains: Vec<Train>) -> Self {
        Self {
            trains: Arc::new(RwLock::new(trains)),
            path: None,
        }
    }

    /// Open a store backed by a JSON file.
    ///
    /// A missing file gives an empty store; the file is created on the
    /// first write. An unreadable or invalid file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let trains: Vec<Train> = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Malformed {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no train file yet, starting empty");
                Vec::new()
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        info!(path = %path.display(), count = trains.len(), "opened train store");

        Ok(Self {
            trains: Arc::new(RwLock::new(trains)),
            path: Some(path),
        })
    }

    /// Returns a snapshot of every train, in insertion order.
    pub async fn fetch_all(&self) -> Vec<Train> {
        self.trains.read().await.clone()
    }

    /// Store a train, replacing any existing train with the same id.
    pub async fn save(&self, train: Train) -> Result<(), StoreError> {
        let mut guard = self.trains.write().await;

        let mut updated = guard.clone();
        match updated.iter_mut().find(|t| t.id() == train.id()) {
            Some(existing) => *existing = train,
            None => updated.push(train),
        }

        self.persist(&updated).await?;
        *guard = updated;
        Ok(())
    }

    /// Replace every stored train.
    ///
    /// Returns the number of trains now stored.
    pub async fn replace_all(&self, trains: Vec<Train>) -> Result<usize, StoreError> {
        let mut guard = self.trains.write().await;
        self.persist(&trains).await?;
        *guard = trains;
        Ok(guard.len())
    }

    /// Get the number of stored trains.
    pub async fn len(&self) -> usize {
        self.trains.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.trains.read().await.is_empty()
    }

    /// Get the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the train list to the backing file, if there is one.
    ///
    /// Creates parent directories if they don't exist.
    async fn persist(&self, trains: &[Train]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(trains).map_err(|e| StoreError::Malformed {
            path: path.clone(),
            message: format!("failed to serialize trains: {e}"),
        })?;

        tokio::fs::write(path, json)
            .await
            .map_err(|e| StoreError::io(path, e))?;

        debug!(path = %path.display(), count = trains.len(), "persisted trains");
        Ok(())
    }
}

impl TrainProvider for TrainStore {
    async fn fetch_all_trains(&self) -> Result<Vec<Train>, StoreError> {
        Ok(self.fetch_all().await)
    }
}
