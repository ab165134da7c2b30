//! File-backed store: one JSON file per document
//!
//! Layout under the root directory:
//!
//! ```text
//! root/
//! ├── .lock              # advisory lock file
//! ├── tasks/
//! │   └── {id}.json
//! ├── columns/
//! │   └── {id}.json
//! └── ...                # one directory per collection
//! ```
//!
//! Writes go through a temp file and rename so a crashed process never
//! leaves a half-written document behind.

use crate::document::{reject_nulls, Document, Fields};
use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::EntityStore;
use async_trait::async_trait;
use fs2::FileExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use ulid::Ulid;

/// File-per-document store rooted at a directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{}.json", id))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Try to acquire an exclusive lock (non-blocking)
    pub async fn lock(&self) -> Result<StoreLock> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StoreLock { file }),
            Err(_) => Err(StoreError::LockBusy),
        }
    }

    async fn read_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let path = self.document_path(collection, id);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).await?;
        let fields: Fields = serde_json::from_str(&content)?;
        Ok(Some(Document::new(id, fields)))
    }

    async fn write_document(&self, collection: &str, id: &str, fields: &Fields) -> Result<()> {
        let path = self.document_path(collection, id);
        let content = serde_json::to_string_pretty(fields)?;
        atomic_write(&path, content.as_bytes()).await
    }
}

#[async_trait]
impl EntityStore for FileStore {
    async fn create(&self, collection: &str, fields: Fields) -> Result<String> {
        reject_nulls(&fields)?;
        let id = Ulid::new().to_string();
        self.write_document(collection, &id, &fields).await?;
        tracing::debug!(collection, id = %id, "created document file");
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.read_document(collection, id).await
    }

    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<Document>> {
        let dir = self.collection_dir(collection);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).await?;
            let fields: Fields = serde_json::from_str(&content)?;
            if filter.is_none_or(|f| f.matches(&fields)) {
                documents.push(Document::new(id, fields));
            }
        }

        Ok(documents)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        reject_nulls(&fields)?;

        let Some(mut doc) = self.read_document(collection, id).await? else {
            return Err(StoreError::not_found(collection, id));
        };

        for (name, value) in fields {
            doc.fields.insert(name, value);
        }
        self.write_document(collection, id, &doc.fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let path = self.document_path(collection, id);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }
}

/// RAII lock guard - releases on drop
pub struct StoreLock {
    file: std::fs::File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;

    // Rename (atomic on same filesystem)
    fs::rename(&temp_path, path).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join(".fluxo"));
        (temp, store)
    }

    fn fields(pairs: &[(&str, serde_json::Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (_temp, store) = setup();

        let id = store
            .create("tasks", fields(&[("title", json!("A")), ("position", json!(0))]))
            .await
            .unwrap();

        let doc = store.get("tasks", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("title"), Some(&json!("A")));
        assert_eq!(doc.field("position"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn test_list_ignores_temp_files() {
        let (_temp, store) = setup();
        store
            .create("tasks", fields(&[("columnId", json!("c1"))]))
            .await
            .unwrap();

        // A leftover temp file from a crashed write must not surface
        std::fs::write(store.root().join("tasks").join("orphan.tmp"), b"{").unwrap();

        let docs = store.list("tasks", None).await.unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let (_temp, store) = setup();
        store
            .create("tasks", fields(&[("columnId", json!("c1"))]))
            .await
            .unwrap();
        store
            .create("tasks", fields(&[("columnId", json!("c2"))]))
            .await
            .unwrap();

        let filter = Filter::eq("columnId", "c2");
        let docs = store.list("tasks", Some(&filter)).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].field("columnId"), Some(&json!("c2")));
    }

    #[tokio::test]
    async fn test_list_missing_collection() {
        let (_temp, store) = setup();
        assert!(store.list("tasks", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges() {
        let (_temp, store) = setup();
        let id = store
            .create("tasks", fields(&[("title", json!("A")), ("position", json!(1))]))
            .await
            .unwrap();

        store
            .update("tasks", &id, fields(&[("position", json!(4))]))
            .await
            .unwrap();

        let doc = store.get("tasks", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("position"), Some(&json!(4)));
        assert_eq!(doc.field("title"), Some(&json!("A")));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let (_temp, store) = setup();
        let result = store.update("tasks", "nope", Fields::new()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_idempotent() {
        let (_temp, store) = setup();
        let id = store
            .create("tasks", fields(&[("title", json!("A"))]))
            .await
            .unwrap();

        store.delete("tasks", &id).await.unwrap();
        store.delete("tasks", &id).await.unwrap();
        assert!(store.get("tasks", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lock_exclusive() {
        let (_temp, store) = setup();

        let guard = store.lock().await.unwrap();
        assert!(matches!(store.lock().await, Err(StoreError::LockBusy)));

        drop(guard);
        assert!(store.lock().await.is_ok());
    }
}
