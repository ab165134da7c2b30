//! Workspace type

use super::ids::WorkspaceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A workspace groups projects for one owner.
///
/// The id lives outside the serialized field map - the store's document id
/// is the identity, restored after deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(skip)]
    pub id: WorkspaceId,
    pub name: String,
    pub color: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    /// Create a new workspace
    pub fn new(name: impl Into<String>, color: impl Into<String>, owner_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            color: color.into(),
            owner_id: owner_id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
