//! DeleteColumn command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::ColumnId;
use crate::Execute;
use async_trait::async_trait;

/// What a cascade delete removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedColumn {
    pub id: ColumnId,
    pub tasks_deleted: usize,
}

/// Delete a column and every task in it.
///
/// The store has no multi-document transaction, so the cascade is a
/// sequence of independent deletes: tasks first, then the column. If a
/// task delete fails the command stops and returns the error - the column
/// document is still there, already-deleted tasks stay gone, and rerunning
/// the command resumes the cascade (deletes are idempotent). Tasks are
/// never orphaned by removing the column first.
#[derive(Debug, Clone)]
pub struct DeleteColumn {
    /// The column to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    /// Create the command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteColumn {
    type Output = DeletedColumn;

    async fn execute(&self, ctx: &BoardContext) -> Result<DeletedColumn> {
        // Validate the target before deleting anything
        ctx.read_column(&self.id).await?;

        let tasks = ctx.list_tasks_in_column(&self.id).await?;
        let mut tasks_deleted = 0usize;
        for task in &tasks {
            ctx.store()
                .delete(collections::TASKS, task.id.as_str())
                .await?;
            tasks_deleted += 1;
        }

        ctx.store()
            .delete(collections::COLUMNS, self.id.as_str())
            .await?;

        tracing::debug!(column = %self.id, tasks_deleted, "deleted column cascade");
        Ok(DeletedColumn {
            id: self.id.clone(),
            tasks_deleted,
        })
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
    async fn test_cascade_deletes_only_own_tasks() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();
        let doomed = AddColumn::new(board.id.clone(), "Doomed")
            .execute(&ctx)
            .await
            .unwrap();
        let kept = AddColumn::new(board.id.clone(), "Kept")
            .execute(&ctx)
            .await
            .unwrap();

        for title in ["a", "b"] {
            AddTask::new(board.id.clone(), doomed.id.clone(), title)
                .execute(&ctx)
                .await
                .unwrap();
        }
        let survivor = AddTask::new(board.id.clone(), kept.id.clone(), "c")
            .execute(&ctx)
            .await
            .unwrap();

        let deleted = DeleteColumn::new(doomed.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(deleted.tasks_deleted, 2);

        assert!(ctx.list_tasks_in_column(&doomed.id).await.unwrap().is_empty());
        let remaining = ctx.list_tasks_in_column(&kept.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor.id);
        assert!(matches!(
            ctx.read_column(&doomed.id).await,
            Err(BoardError::ColumnNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_column() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let result = DeleteColumn::new("ghost").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
