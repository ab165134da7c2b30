//! AddColumn command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::position;
use crate::types::{BoardId, Column, ColumnId};
use crate::Execute;
use async_trait::async_trait;

/// Add a column at the right edge of the board
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// Owning board
    pub board_id: BoardId,
    /// Display name
    pub name: String,
}

impl AddColumn {
    /// Create the command
    pub fn new(board_id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> Result<Column> {
        ctx.read_board(&self.board_id).await?;

        let existing = ctx.list_columns(&self.board_id).await?;
        let mut column = Column::new(
            &self.name,
            position::append(existing.len()),
            self.board_id.clone(),
        );

        let fields = BoardContext::fields_of(&column)?;
        let id = ctx.store().create(collections::COLUMNS, fields).await?;
        column.id = ColumnId::from_string(id);
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_columns_appends() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();

        let first = AddColumn::new(board.id.clone(), "To Do")
            .execute(&ctx)
            .await
            .unwrap();
        let second = AddColumn::new(board.id.clone(), "Done")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
    }

    #[tokio::test]
    async fn test_add_column_missing_board() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let result = AddColumn::new("ghost", "To Do").execute(&ctx).await;
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
    }
}
