//! DeleteWorkspace command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::WorkspaceId;
use crate::Execute;
use async_trait::async_trait;

/// Delete a workspace document
#[derive(Debug, Clone)]
pub struct DeleteWorkspace {
    /// The workspace to delete
    pub id: WorkspaceId,
}

impl DeleteWorkspace {
    /// Create the command
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteWorkspace {
    type Output = ();

    async fn execute(&self, ctx: &BoardContext) -> Result<()> {
        ctx.store()
            .delete(collections::WORKSPACES, self.id.as_str())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::CreateWorkspace;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_workspace() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let workspace = CreateWorkspace::new("Acme", "#ff0066", "user-1")
            .execute(&ctx)
            .await
            .unwrap();

        DeleteWorkspace::new(workspace.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let result = ctx.read_workspace(&workspace.id).await;
        assert!(matches!(result, Err(BoardError::WorkspaceNotFound { .. })));
    }
}
