//! MoveTask command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{ColumnId, TaskId};
use crate::Execute;
use async_trait::async_trait;
use chrono::Utc;
use fluxo_store::{Fields, StoreError};
use serde_json::json;

/// Persist a task's new placement.
///
/// Scoped to the moved task's own `columnId`/`position` - never a bulk
/// rewrite of renumbered siblings. Persistence calls for concurrent moves
/// can complete in any order; a single-task payload keeps a late or failed
/// call from clobbering siblings with stale positions, at the accepted
/// cost that stored sibling positions drift until the next full reload.
#[derive(Debug, Clone)]
pub struct MoveTask {
    /// The task that moved
    pub id: TaskId,
    /// Destination column
    pub column_id: ColumnId,
    /// Destination position within the column
    pub position: usize,
}

impl MoveTask {
    /// Create the command
    pub fn new(id: impl Into<TaskId>, column_id: impl Into<ColumnId>, position: usize) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            position,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    type Output = ();

    async fn execute(&self, ctx: &BoardContext) -> Result<()> {
        let mut fields = Fields::new();
        fields.insert("columnId".into(), json!(self.column_id));
        fields.insert("position".into(), json!(self.position));
        fields.insert("updatedAt".into(), json!(Utc::now()));

        match ctx
            .store()
            .update(collections::TASKS, self.id.as_str(), fields)
            .await
        {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound { .. }) => Err(BoardError::task_not_found(&self.id)),
            Err(e) => Err(e.into()),
        }
    }
}
