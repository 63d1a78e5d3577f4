//! Persistence boundary for the editing session.
//!
//! The core never persists directly — the session saves whatever the
//! history currently holds, on its own debounce schedule, through the
//! `DocumentStore` trait. `InMemoryStore` is the reference implementation:
//! an append-only version log per key, never updated in place.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::Resume;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored document parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where documents live between sessions. Implementations are swappable;
/// the session holds this as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the latest saved document under `key`, or `None` if the key
    /// has never been saved.
    async fn load(&self, key: &str) -> Result<Option<Resume>, StoreError>;

    /// Appends a new version of the document under `key`.
    async fn save(&self, key: &str, document: &Resume) -> Result<(), StoreError>;
}

/// One saved version of a document.
#[derive(Debug, Clone)]
pub struct StoredVersion {
    pub data: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

type VersionMap = HashMap<String, Vec<StoredVersion>>;

fn lock_entries(entries: &Mutex<VersionMap>) -> Result<MutexGuard<'_, VersionMap>, StoreError> {
    entries
        .lock()
        .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
}

/// In-memory `DocumentStore` keeping every saved version per key.
/// Versions are stored as JSON values, the shape a real backend would hold.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<VersionMap>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every version ever saved under `key`, oldest first.
    pub fn versions(&self, key: &str) -> Vec<StoredVersion> {
        match lock_entries(&self.entries) {
            Ok(entries) => entries.get(key).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Resume>, StoreError> {
        let entries = lock_entries(&self.entries)?;
        match entries.get(key).and_then(|versions| versions.last()) {
            Some(version) => {
                let document = serde_json::from_value(version.data.clone())?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, document: &Resume) -> Result<(), StoreError> {
        let data = serde_json::to_value(document)?;
        let mut entries = lock_entries(&self.entries)?;
        entries.entry(key.to_string()).or_default().push(StoredVersion {
            data,
            saved_at: Utc::now(),
        });
        Ok(())
    }
}
