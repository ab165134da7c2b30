//! DeleteProject command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::ProjectId;
use crate::Execute;
use async_trait::async_trait;

/// Delete a project document. Its board, columns and tasks are left for the
/// board-level cascade; the UI removes the project entry point first.
#[derive(Debug, Clone)]
pub struct DeleteProject {
    /// The project to delete
    pub id: ProjectId,
}

impl DeleteProject {
    /// Create the command
    pub fn new(id: impl Into<ProjectId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteProject {
    type Output = ();

    async fn execute(&self, ctx: &BoardContext) -> Result<()> {
        ctx.store()
            .delete(collections::PROJECTS, self.id.as_str())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::CreateProject;
    use crate::workspace::CreateWorkspace;
    use fluxo_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_project() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let workspace = CreateWorkspace::new("Acme", "#ff0066", "user-1")
            .execute(&ctx)
            .await
            .unwrap();
        let project = CreateProject::new("Site", workspace.id)
            .execute(&ctx)
            .await
            .unwrap();

        DeleteProject::new(project.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        assert!(matches!(
            ctx.read_project(&project.id).await,
            Err(BoardError::ProjectNotFound { .. })
        ));
    }
}
