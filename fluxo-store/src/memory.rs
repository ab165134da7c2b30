//! In-memory store backend

use crate::document::{reject_nulls, Document, Fields};
use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::EntityStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use ulid::Ulid;

/// `HashMap`-backed store. Collections spring into existence on first write.
///
/// Iteration order of `list` is arbitrary, matching the contract that the
/// store gives no ordering guarantee.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, Fields>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection (test convenience)
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|c| c.len())
            .unwrap_or(0)
    }

    /// True if a collection has no documents
    pub async fn is_empty(&self, collection: &str) -> bool {
        self.len(collection).await == 0
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn create(&self, collection: &str, fields: Fields) -> Result<String> {
        reject_nulls(&fields)?;
        let id = Ulid::new().to_string();

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);

        tracing::debug!(collection, id = %id, "created document");
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|&(_, fields)| filter.is_none_or(|f| f.matches(fields)))
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        reject_nulls(&fields)?;

        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|c| c.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        for (name, value) in fields {
            doc.insert(name, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_fields(title: &str, column: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("title".into(), json!(title));
        fields.insert("columnId".into(), json!(column));
        fields
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryStore::new();
        let id = store.create("tasks", task_fields("A", "c1")).await.unwrap();

        let doc = store.get("tasks", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("title"), Some(&json!("A")));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.get("tasks", "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let store = MemoryStore::new();
        store.create("tasks", task_fields("A", "c1")).await.unwrap();
        store.create("tasks", task_fields("B", "c2")).await.unwrap();
        store.create("tasks", task_fields("C", "c1")).await.unwrap();

        let filter = Filter::eq("columnId", "c1");
        let docs = store.list("tasks", Some(&filter)).await.unwrap();
        assert_eq!(docs.len(), 2);

        let all = store.list("tasks", None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_update_merges_only_given_fields() {
        let store = MemoryStore::new();
        let id = store.create("tasks", task_fields("A", "c1")).await.unwrap();

        let mut patch = Fields::new();
        patch.insert("columnId".into(), json!("c2"));
        store.update("tasks", &id, patch).await.unwrap();

        let doc = store.get("tasks", &id).await.unwrap().unwrap();
        assert_eq!(doc.field("columnId"), Some(&json!("c2")));
        assert_eq!(doc.field("title"), Some(&json!("A")));
    }

    #[tokio::test]
    async fn test_update_missing_errors() {
        let store = MemoryStore::new();
        let result = store.update("tasks", "nope", Fields::new()).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_rejects_null() {
        let store = MemoryStore::new();
        let id = store.create("tasks", task_fields("A", "c1")).await.unwrap();

        let mut patch = Fields::new();
        patch.insert("description".into(), serde_json::Value::Null);
        let result = store.update("tasks", &id, patch).await;
        assert!(matches!(result, Err(StoreError::NullField { .. })));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let id = store.create("tasks", task_fields("A", "c1")).await.unwrap();

        store.delete("tasks", &id).await.unwrap();
        store.delete("tasks", &id).await.unwrap();
        assert!(store.is_empty("tasks").await);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryStore::new();
        let a = store.create("tasks", task_fields("A", "c1")).await.unwrap();
        store.delete("tasks", &a).await.unwrap();
        let b = store.create("tasks", task_fields("B", "c1")).await.unwrap();
        assert_ne!(a, b);
    }
}
