//! GetBoard command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{Board, BoardId};
use crate::Execute;
use async_trait::async_trait;

/// Fetch a board's metadata
#[derive(Debug, Clone)]
pub struct GetBoard {
    /// The board to fetch
    pub id: BoardId,
}

impl GetBoard {
    /// Create the command
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoard {
    type Output = Board;

    async fn execute(&self, ctx: &BoardContext) -> Result<Board> {
        ctx.read_board(&self.id).await
    }
}
