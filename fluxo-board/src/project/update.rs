//! UpdateProject command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Project, ProjectId};
use crate::Execute;
use async_trait::async_trait;
use chrono::Utc;
use fluxo_store::Fields;
use serde_json::json;

/// Update a project's display properties
#[derive(Debug, Clone)]
pub struct UpdateProject {
    /// The project to update
    pub id: ProjectId,
    /// New name
    pub name: Option<String>,
    /// New description (empty string clears)
    pub description: Option<String>,
    /// New icon (empty string clears)
    pub icon: Option<String>,
}

impl UpdateProject {
    /// Create the command
    pub fn new(id: impl Into<ProjectId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            icon: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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
impl Execute<BoardContext, BoardError> for UpdateProject {
    type Output = Project;

    async fn execute(&self, ctx: &BoardContext) -> Result<Project> {
        let mut fields = Fields::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), json!(name));
        }
        if let Some(description) = &self.description {
            fields.insert("description".into(), json!(description));
        }
        if let Some(icon) = &self.icon {
            fields.insert("icon".into(), json!(icon));
        }
        fields.insert("updatedAt".into(), json!(Utc::now()));

        ctx.store()
            .update(collections::PROJECTS, self.id.as_str(), fields)
            .await?;
        ctx.read_project(&self.id).await
    }
}
