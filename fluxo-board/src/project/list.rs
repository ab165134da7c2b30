//! ListProjects command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::{Project, WorkspaceId};
use crate::Execute;
use async_trait::async_trait;

/// List the projects of a workspace, newest first
#[derive(Debug, Clone)]
pub struct ListProjects {
    /// Owning workspace
    pub workspace_id: WorkspaceId,
}

impl ListProjects {
    /// Create the command
    pub fn new(workspace_id: impl Into<WorkspaceId>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListProjects {
    type Output = Vec<Project>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Project>> {
        let mut projects = ctx.list_projects(&self.workspace_id).await?;
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
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
    async fn test_list_projects() {
        let ctx = BoardContext::new(Arc::new(MemoryStore::new()));
        let workspace = CreateWorkspace::new("Acme", "#ff0066", "user-1")
            .execute(&ctx)
            .await
            .unwrap();

        CreateProject::new("One", workspace.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        CreateProject::new("Two", workspace.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let projects = ListProjects::new(workspace.id).execute(&ctx).await.unwrap();
        assert_eq!(projects.len(), 2);
    }
}
