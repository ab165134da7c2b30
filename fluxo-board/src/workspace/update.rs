//! UpdateWorkspace command

use crate::context::{collections, BoardContext};
use crate::error::{BoardError, Result};
use crate::types::{Workspace, WorkspaceId};
use crate::Execute;
use async_trait::async_trait;
use chrono::Utc;
use fluxo_store::Fields;
use serde_json::json;

/// Rename or recolor a workspace
#[derive(Debug, Clone)]
pub struct UpdateWorkspace {
    /// The workspace to update
    pub id: WorkspaceId,
    /// New name
    pub name: Option<String>,
    /// New accent color
    pub color: Option<String>,
}

impl UpdateWorkspace {
    /// Create the command
    pub fn new(id: impl Into<WorkspaceId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            color: None,
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateWorkspace {
    type Output = Workspace;

    async fn execute(&self, ctx: &BoardContext) -> Result<Workspace> {
        // Touch only the given fields; absent ones never reach the store
        let mut fields = Fields::new();
        if let Some(name) = &self.name {
            fields.insert("name".into(), json!(name));
        }
        if let Some(color) = &self.color {
            fields.insert("color".into(), json!(color));
        }
        fields.insert("updatedAt".into(), json!(Utc::now()));

        ctx.store()
            .update(collections::WORKSPACES, self.id.as_str(), fields)
            .await?;
        ctx.read_workspace(&self.id).await
    }
}
