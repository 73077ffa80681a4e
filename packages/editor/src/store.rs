//! # Document Stores
//!
//! Persistence boundary for page documents. A store moves the flattened
//! section shape (`{ "sections": [...] }`) in and out of external storage;
//! turning it into a [`Document`](pageforge_document::Document) is the
//! session's job.
//!
//! Saves are last-write-wins. No store checks versions, so two sessions
//! saving the same key overwrite each other.

use crate::errors::StoreError;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

pub trait DocumentStore {
    fn load(&self, key: &str) -> impl Future<Output = Result<Value, StoreError>> + Send;

    fn save(&self, key: &str, document: Value) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory store, mostly for tests and previews
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Value>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backend going away: every call fails until back online
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub async fn insert(&self, key: impl Into<String>, document: Value) {
        self.documents.write().await.insert(key.into(), document);
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.documents.read().await.get(key).cloned()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

impl DocumentStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Value, StoreError> {
        self.check_online()?;
        self.documents
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    async fn save(&self, key: &str, document: Value) -> Result<(), StoreError> {
        self.check_online()?;
        self.documents.write().await.insert(key.to_string(), document);
        Ok(())
    }
}

/// One `<key>.json` file per document inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for `key`. Keys may not escape the store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl DocumentStore for FileStore {
    async fn load(&self, key: &str) -> Result<Value, StoreError> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "loading document");

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(key.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&text)?)
    }

    async fn save(&self, key: &str, document: Value) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let text = serde_json::to_string_pretty(&document)?;

        tokio::fs::create_dir_all(&self.root).await?;

        // Write then rename, so a failed write never truncates the old copy
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, text).await?;
        tokio::fs::rename(&tmp, &path).await?;

        info!(path = %path.display(), "document saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.save("home", json!({ "sections": [] })).await.unwrap();
        assert_eq!(store.load("home").await.unwrap(), json!({ "sections": [] }));
    }

    #[tokio::test]
    async fn test_memory_store_missing_and_offline() {
        let store = MemoryStore::new();
        assert!(matches!(store.load("nope").await, Err(StoreError::NotFound(_))));

        store.set_offline(true);
        assert!(matches!(
            store.save("home", json!({})).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.get("home").await.is_none());
    }

    #[test]
    fn test_file_store_rejects_escaping_keys() {
        let store = FileStore::new("/tmp/pages");
        assert!(store.path_for("home").is_ok());
        assert!(store.path_for("summer-sale_2").is_ok());
        assert!(matches!(store.path_for("../etc/passwd"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.path_for("a/b"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.path_for(""), Err(StoreError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("pages"));

        let doc = json!({ "sections": [{ "type": "hero", "title": "Hi" }] });
        store.save("home", doc.clone()).await.unwrap();

        assert_eq!(store.load("home").await.unwrap(), doc);
        assert!(matches!(store.load("other").await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_store_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let store = FileStore::new(dir.path());
        assert!(matches!(store.load("broken").await, Err(StoreError::Serialization(_))));
    }
}
