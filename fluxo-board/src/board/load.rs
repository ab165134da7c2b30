//! FetchBoardData command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{Board, BoardId, Column, Task};
use crate::Execute;
use async_trait::async_trait;

/// Everything the board view needs, fetched in one command
#[derive(Debug, Clone)]
pub struct BoardData {
    pub board: Board,
    /// Sorted ascending by position
    pub columns: Vec<Column>,
    /// Store order; the state model normalizes per-column positions on load
    pub tasks: Vec<Task>,
}

/// Fetch a board with its columns and tasks.
///
/// Three independent reads - the store has no multi-document snapshot, so
/// a concurrent writer can interleave; the state model converges on the
/// next refresh.
#[derive(Debug, Clone)]
pub struct FetchBoardData {
    /// The board to load
    pub board_id: BoardId,
}

impl FetchBoardData {
    /// Create the command
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for FetchBoardData {
    type Output = BoardData;

    async fn execute(&self, ctx: &BoardContext) -> Result<BoardData> {
        let board = ctx.read_board(&self.board_id).await?;
        let mut columns = ctx.list_columns(&self.board_id).await?;
        columns.sort_by_key(|c| c.position);
        let tasks = ctx.list_tasks(&self.board_id).await?;

        Ok(BoardData {
            board,
            columns,
            tasks,
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
    async fn test_fetch_board_data() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();

        let todo = AddColumn::new(board.id.clone(), "To Do")
            .execute(&ctx)
            .await
            .unwrap();
        let doing = AddColumn::new(board.id.clone(), "Doing")
            .execute(&ctx)
            .await
            .unwrap();
        AddTask::new(board.id.clone(), todo.id.clone(), "First")
            .execute(&ctx)
            .await
            .unwrap();

        let data = FetchBoardData::new(board.id).execute(&ctx).await.unwrap();
        assert_eq!(data.board.name, "Sprint");
        assert_eq!(data.columns.len(), 2);
        assert_eq!(data.columns[0].id, todo.id);
        assert_eq!(data.columns[1].id, doing.id);
        assert_eq!(data.tasks.len(), 1);
    }
}
