//! Error types for the board engine

use fluxo_store::StoreError;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Workspace not found
    #[error("workspace not found: {id}")]
    WorkspaceNotFound { id: String },

    /// Project not found
    #[error("project not found: {id}")]
    ProjectNotFound { id: String },

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// A project already has its board (boards are created once per project)
    #[error("project '{project_id}' already has a board")]
    BoardAlreadyExists { project_id: String },

    /// Store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Document decode failure
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a task-not-found error
    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    /// Create a column-not-found error
    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// True if retrying the same operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_retryable())
    }
}
