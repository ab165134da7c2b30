//! AddTask command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::position;
use crate::types::{BoardId, ColumnId, Task, TaskId};
use crate::Execute;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Create a task at the tail of a column
#[derive(Debug, Clone)]
pub struct AddTask {
    /// Owning board
    pub board_id: BoardId,
    /// Destination column
    pub column_id: ColumnId,
    /// The task title (required)
    pub title: String,
    /// Detailed description
    pub description: Option<String>,
    /// Scheduled start
    pub start_date: Option<NaiveDate>,
    /// Scheduled end
    pub end_date: Option<NaiveDate>,
}

impl AddTask {
    /// Create the command
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            title: title.into(),
            description: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the schedule
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        // The column must exist and belong to the claimed board
        let column = ctx.read_column(&self.column_id).await?;
        if column.board_id != self.board_id {
            return Err(BoardError::column_not_found(&self.column_id));
        }

        let siblings = ctx.list_tasks_in_column(&self.column_id).await?;
        let mut task = Task::new(
            &self.title,
            self.column_id.clone(),
            self.board_id.clone(),
            position::append(siblings.len()),
        )
        .with_dates(self.start_date, self.end_date);
        if let Some(description) = &self.description {
            task.description = description.clone();
        }

        let fields = BoardContext::fields_of(&task)?;
        let id = ctx.store().create(collections::TASKS, fields).await?;
        task.id = TaskId::from_string(id);
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::column::AddColumn;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    async fn setup() -> (BoardContext, BoardId, ColumnId) {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();
        let column = AddColumn::new(board.id.clone(), "To Do")
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, board.id, column.id)
    }

    #[tokio::test]
    async fn test_tasks_append_at_tail() {
        let (ctx, board_id, column_id) = setup().await;

        let first = AddTask::new(board_id.clone(), column_id.clone(), "First")
            .execute(&ctx)
            .await
            .unwrap();
        let second = AddTask::new(board_id, column_id, "Second")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
    }

    #[tokio::test]
    async fn test_add_task_missing_column() {
        let (ctx, board_id, _) = setup().await;
        let result = AddTask::new(board_id, "ghost", "Task").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
    }
}
