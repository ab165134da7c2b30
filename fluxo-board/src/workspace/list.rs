//! ListWorkspaces command

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::types::Workspace;
use crate::Execute;
use async_trait::async_trait;

/// List a user's workspaces, newest first
#[derive(Debug, Clone)]
pub struct ListWorkspaces {
    /// Owning user
    pub owner_id: String,
}

impl ListWorkspaces {
    /// Create the command
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListWorkspaces {
    type Output = Vec<Workspace>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Workspace>> {
        // The store gives no ordering guarantee; sort client-side
        let mut workspaces = ctx.list_workspaces(&self.owner_id).await?;
        workspaces.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workspaces)
    }
}
