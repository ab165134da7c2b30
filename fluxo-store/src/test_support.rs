//! Test helpers behind the `test-support` feature
//!
//! [`FlakyStore`] wraps any backend and injects failures per
//! (operation, collection), which is how the persistence-failure paths of
//! the board engine get exercised without a real flaky network.

use crate::document::{Document, Fields};
use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::EntityStore;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// The five store operations, for failure arming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Create,
    Get,
    List,
    Update,
    Delete,
}

/// Wrapper that fails armed calls with [`StoreError::Unavailable`].
///
/// `arm` queues a single failure for the next matching call; `arm_always`
/// fails every matching call until `disarm_all`.
pub struct FlakyStore<S> {
    inner: S,
    one_shot: Mutex<Vec<(StoreOp, String)>>,
    always: Mutex<HashSet<(StoreOp, String)>>,
}

impl<S: EntityStore> FlakyStore<S> {
    /// Wrap a backend
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            one_shot: Mutex::new(Vec::new()),
            always: Mutex::new(HashSet::new()),
        }
    }

    /// Access the wrapped backend
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Fail the next matching call
    pub fn arm(&self, op: StoreOp, collection: &str) {
        self.one_shot
            .lock()
            .expect("flaky store poisoned")
            .push((op, collection.to_string()));
    }

    /// Fail every matching call
    pub fn arm_always(&self, op: StoreOp, collection: &str) {
        self.always
            .lock()
            .expect("flaky store poisoned")
            .insert((op, collection.to_string()));
    }

    /// Clear all armed failures
    pub fn disarm_all(&self) {
        self.one_shot.lock().expect("flaky store poisoned").clear();
        self.always.lock().expect("flaky store poisoned").clear();
    }

    fn check(&self, op: StoreOp, collection: &str) -> Result<()> {
        let key = (op, collection.to_string());

        let mut one_shot = self.one_shot.lock().expect("flaky store poisoned");
        if let Some(pos) = one_shot.iter().position(|armed| armed == &key) {
            one_shot.remove(pos);
            return Err(StoreError::unavailable(format!(
                "injected failure: {:?} {}",
                op, collection
            )));
        }
        drop(one_shot);

        if self
            .always
            .lock()
            .expect("flaky store poisoned")
            .contains(&key)
        {
            return Err(StoreError::unavailable(format!(
                "injected failure: {:?} {}",
                op, collection
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<S: EntityStore> EntityStore for FlakyStore<S> {
    async fn create(&self, collection: &str, fields: Fields) -> Result<String> {
        self.check(StoreOp::Create, collection)?;
        self.inner.create(collection, fields).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.check(StoreOp::Get, collection)?;
        self.inner.get(collection, id).await
    }

    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<Document>> {
        self.check(StoreOp::List, collection)?;
        self.inner.list(collection, filter).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        self.check(StoreOp::Update, collection)?;
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.check(StoreOp::Delete, collection)?;
        self.inner.delete(collection, id).await
    }
}
