//! CreateProject command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Project, ProjectId, WorkspaceId};
use crate::Execute;
use async_trait::async_trait;

/// Create a new project in a workspace
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional icon name
    pub icon: Option<String>,
    /// Owning workspace
    pub workspace_id: WorkspaceId,
}

impl CreateProject {
    /// Create the command
    pub fn new(name: impl Into<String>, workspace_id: impl Into<WorkspaceId>) -> Self {
        Self {
            name: name.into(),
            description: None,
            icon: None,
            workspace_id: workspace_id.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CreateProject {
    type Output = Project;

    async fn execute(&self, ctx: &BoardContext) -> Result<Project> {
        // Reject dangling workspace references before writing anything
        ctx.read_workspace(&self.workspace_id).await?;

        let mut project = Project::new(&self.name, self.workspace_id.clone());
        project.description = self.description.clone();
        project.icon = self.icon.clone();

        let fields = BoardContext::fields_of(&project)?;
        let id = ctx.store().create(collections::PROJECTS, fields).await?;
        project.id = ProjectId::from_string(id);
        Ok(project)
    }
}
