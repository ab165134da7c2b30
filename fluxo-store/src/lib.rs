//! Async document store abstraction for Fluxo
//!
//! The board engine treats persistence as an opaque document store: five
//! operations (create/get/list/update/delete) on schemaless JSON documents
//! grouped into named collections. There are no cross-document transactions
//! and `list` gives no ordering guarantee, so callers sort client-side.
//!
//! ## Backends
//!
//! - [`MemoryStore`] - `HashMap`-backed, for tests and in-process use
//! - [`FileStore`] - file-per-document JSON under a root directory, with
//!   atomic writes and an advisory lock for concurrent process safety
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use fluxo_store::{EntityStore, Fields, Filter, MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//!
//! let mut fields = Fields::new();
//! fields.insert("title".into(), "Write the docs".into());
//! fields.insert("columnId".into(), "col-1".into());
//! let id = store.create("tasks", fields).await?;
//!
//! let in_column = store
//!     .list("tasks", Some(&Filter::eq("columnId", "col-1")))
//!     .await?;
//! assert_eq!(in_column.len(), 1);
//! assert_eq!(in_column[0].id, id);
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod file;
mod filter;
mod memory;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use document::{reject_nulls, Document, Fields};
pub use error::{Result, StoreError};
pub use file::{FileStore, StoreLock};
pub use filter::Filter;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// The five operations every backend provides.
///
/// `update` merges only the given fields into the document; callers must
/// strip fields they do not intend to touch before the call (a JSON `null`
/// is rejected, it is not a no-op). `delete` of a missing document succeeds,
/// which keeps cascades safe to retry.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Create a document, assigning and returning a fresh identifier.
    async fn create(&self, collection: &str, fields: Fields) -> Result<String>;

    /// Fetch a document by id, `None` if absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// List documents, optionally filtered by a single equality predicate.
    /// No ordering guarantee.
    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<Document>>;

    /// Merge the given fields into an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Delete a document. Deleting a missing document is a no-op.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}
