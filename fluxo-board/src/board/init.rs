//! InitBoard command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Board, BoardId, ProjectId};
use crate::Execute;
use async_trait::async_trait;

/// Create the board for a project. A project gets exactly one board, and
/// the board is immutable after creation.
#[derive(Debug, Clone)]
pub struct InitBoard {
    /// Owning project
    pub project_id: ProjectId,
    /// Display name
    pub name: String,
}

impl InitBoard {
    /// Create the command
    pub fn new(project_id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for InitBoard {
    type Output = Board;

    async fn execute(&self, ctx: &BoardContext) -> Result<Board> {
        if ctx.find_project_board(&self.project_id).await?.is_some() {
            return Err(BoardError::BoardAlreadyExists {
                project_id: self.project_id.to_string(),
            });
        }

        let mut board = Board::new(&self.name, self.project_id.clone());
        let fields = BoardContext::fields_of(&board)?;
        let id = ctx.store().create(collections::BOARDS, fields).await?;
        board.id = BoardId::from_string(id);
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_init_board_once_per_project() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));

        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();
        assert_eq!(board.name, "Sprint");

        let second = InitBoard::new("p1", "Again").execute(&ctx).await;
        assert!(matches!(second, Err(BoardError::BoardAlreadyExists { .. })));
    }
}
