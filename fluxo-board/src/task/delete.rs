//! DeleteTask command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::TaskId;
use crate::Execute;
use async_trait::async_trait;

/// Delete a task document. Stored sibling positions keep their gap until
/// the next full reload normalizes them; the in-memory model closes the
/// gap immediately.
#[derive(Debug, Clone)]
pub struct DeleteTask {
    /// The task to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create the command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTask {
    type Output = ();

    async fn execute(&self, ctx: &BoardContext) -> Result<()> {
        ctx.store()
            .delete(collections::TASKS, self.id.as_str())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::column::AddColumn;
    use crate::task::AddTask;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_task() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();
        let column = AddColumn::new(board.id.clone(), "To Do")
            .execute(&ctx)
            .await
            .unwrap();
        let task = AddTask::new(board.id, column.id, "Task")
            .execute(&ctx)
            .await
            .unwrap();

        DeleteTask::new(task.id.clone()).execute(&ctx).await.unwrap();
        assert!(matches!(
            ctx.read_task(&task.id).await,
            Err(BoardError::TaskNotFound { .. })
        ));

        // Idempotent, like the store delete underneath
        DeleteTask::new(task.id).execute(&ctx).await.unwrap();
    }
}
