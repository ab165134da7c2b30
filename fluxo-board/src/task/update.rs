//! UpdateTask command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Task, TaskId, TaskPatch};
use crate::Execute;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

/// Persist a partial task update. Only the fields present in the patch are
/// written; the store merges them into the document.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// The task to update
    pub id: TaskId,
    /// The fields to change
    pub patch: TaskPatch,
}

impl UpdateTask {
    /// Create the command
    pub fn new(id: impl Into<TaskId>, patch: TaskPatch) -> Self {
        Self {
            id: id.into(),
            patch,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        let mut task = ctx.read_task(&self.id).await?;

        if self.patch.is_empty() {
            return Ok(task);
        }

        let now = Utc::now();
        let mut fields = BoardContext::fields_of(&self.patch)?;
        fields.insert("updatedAt".into(), json!(now));

        ctx.store()
            .update(collections::TASKS, self.id.as_str(), fields)
            .await?;

        self.patch.apply_to(&mut task);
        task.updated_at = now;
        Ok(task)
    }
}
