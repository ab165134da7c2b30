//! Kanban board engine for Fluxo
//!
//! This crate implements the board-side core of the Fluxo project
//! management tool: the in-memory model of one open board (columns plus
//! tasks), the position allocator that keeps per-column ordinals dense, and
//! the drag coordinator that turns a drag-and-drop gesture into an
//! optimistic local transition plus a best-effort persistence call.
//!
//! Persistence is an opaque async document store (see `fluxo-store`): five
//! CRUD-ish operations, single-equality filters, no cross-document
//! transactions. The in-memory snapshot is the source of truth for
//! rendering; the durable copy is the source of truth for reload.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fluxo_board::{board::InitBoard, BoardContext, Execute};
//! use fluxo_board::drag::{DragCoordinator, DragEnd};
//! use fluxo_board::state::BoardModel;
//! use fluxo_store::MemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = Arc::new(BoardContext::new(Arc::new(MemoryStore::new())));
//!
//! let board = InitBoard::new("project-1", "Sprint board").execute(&ctx).await?;
//! let model = Arc::new(BoardModel::new());
//! let drag = DragCoordinator::new(Arc::clone(&model), Arc::clone(&ctx));
//!
//! drag.load_board(&board.id).await;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod ops;
pub mod position;
pub mod state;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod drag;
pub mod project;
pub mod task;
pub mod workspace;

pub use context::{collections, BoardContext};
pub use error::{BoardError, Result};
pub use ops::Execute;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Column, ColumnId, Project, ProjectId, Task, TaskId, TaskPatch, TaskStatus,
    Workspace, WorkspaceId,
};
