//! UpdateColumn command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Column, ColumnId};
use crate::Execute;
use async_trait::async_trait;
use fluxo_store::Fields;
use serde_json::json;

/// Rename a column
#[derive(Debug, Clone)]
pub struct UpdateColumn {
    /// The column to rename
    pub id: ColumnId,
    /// New display name
    pub name: String,
}

impl UpdateColumn {
    /// Create the command
    pub fn new(id: impl Into<ColumnId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> Result<Column> {
        let mut fields = Fields::new();
        fields.insert("name".into(), json!(self.name));

        ctx.store()
            .update(collections::COLUMNS, self.id.as_str(), fields)
            .await?;
        ctx.read_column(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::column::AddColumn;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_rename_column() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let board = InitBoard::new("p1", "Sprint").execute(&ctx).await.unwrap();
        let column = AddColumn::new(board.id, "To Do")
            .execute(&ctx)
            .await
            .unwrap();

        let renamed = UpdateColumn::new(column.id, "Backlog")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(renamed.name, "Backlog");
        assert_eq!(renamed.position, 0);
    }
}
