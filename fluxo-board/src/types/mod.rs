//! Core types for the board engine

mod board;
mod ids;
mod project;
mod task;
mod workspace;

// Re-export all types
pub use board::{Board, Column};
pub use ids::{BoardId, ColumnId, ProjectId, TaskId, WorkspaceId};
pub use project::Project;
pub use task::{Task, TaskPatch, TaskStatus};
pub use workspace::Workspace;
