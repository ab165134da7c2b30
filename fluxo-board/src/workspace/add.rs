//! CreateWorkspace command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Workspace, WorkspaceId};
use crate::Execute;
use async_trait::async_trait;

/// Create a new workspace
#[derive(Debug, Clone)]
pub struct CreateWorkspace {
    /// Display name
    pub name: String,
    /// Accent color (hex string)
    pub color: String,
    /// Owning user
    pub owner_id: String,
}

impl CreateWorkspace {
    /// Create the command
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            owner_id: owner_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CreateWorkspace {
    type Output = Workspace;

    async fn execute(&self, ctx: &BoardContext) -> Result<Workspace> {
        let mut workspace = Workspace::new(&self.name, &self.color, &self.owner_id);
        let fields = BoardContext::fields_of(&workspace)?;
        let id = ctx.store().create(collections::WORKSPACES, fields).await?;
        workspace.id = WorkspaceId::from_string(id);
        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_workspace() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));

        let workspace = CreateWorkspace::new("Acme", "#ff0066", "user-1")
            .execute(&ctx)
            .await
            .unwrap();

        let read = ctx.read_workspace(&workspace.id).await.unwrap();
        assert_eq!(read.name, "Acme");
        assert_eq!(read.owner_id, "user-1");
    }
}
