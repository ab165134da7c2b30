//! Board-level types: Board, Column

use super::ids::{BoardId, ColumnId, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kanban board - display metadata only. Columns and tasks are separate
/// documents keyed back to the board. Created once per project; immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(skip)]
    pub id: BoardId,
    pub name: String,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board for a project
    pub fn new(name: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            project_id,
            created_at: Utc::now(),
        }
    }
}

/// A column defines a workflow stage. `position` is dense within the board:
/// the set of positions is exactly `{0..n-1}`, ascending left-to-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(skip)]
    pub id: ColumnId,
    pub name: String,
    pub position: usize,
    pub board_id: BoardId,
    pub created_at: DateTime<Utc>,
}

impl Column {
    /// Create a new column at the given position
    pub fn new(name: impl Into<String>, position: usize, board_id: BoardId) -> Self {
        Self {
            id: ColumnId::new(),
            name: name.into(),
            position,
            board_id,
            created_at: Utc::now(),
        }
    }
}
