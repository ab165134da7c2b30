//! Drag coordinator
//!
//! Bridges a drag-end gesture to the board state model and the store:
//! optimistic local update with best-effort sync. The local transition
//! applies synchronously so the dropped card lands before any network
//! round-trip; persistence happens on a spawned task and is fire-and-forget
//! from the gesture's point of view. A failed persist sets the model's
//! error flag and deliberately does NOT roll the optimistic state back -
//! local and durable state diverge until the next full reload, a trade of
//! responsiveness for eventual consistency. What happens after a failure
//! is the coordinator's [`ReconcilePolicy`].

use crate::board::FetchBoardData;
use crate::context::BoardContext;
use crate::state::{BoardAction, BoardModel};
use crate::task::MoveTask;
use crate::types::{BoardId, ColumnId, TaskId};
use crate::Execute;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A drag-end gesture from the view layer. `dest_index` means "insert
/// before the task currently at that index" in the destination column
/// (equal to the column length for a drop at the tail).
#[derive(Debug, Clone)]
pub struct DragEnd {
    pub task_id: TaskId,
    pub source_column: ColumnId,
    pub dest_column: ColumnId,
    pub dest_index: usize,
}

/// When to reconcile local state with the store after a failed persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcilePolicy {
    /// Diverged state stands until the next explicit reload
    #[default]
    Manual,
    /// A failed persist triggers a full board reload
    ReloadAfterPersistFailure,
}

/// What a drag handler call did. `persist` completes when the background
/// store call settles - the gesture never waits on it, tests and shells
/// can.
#[derive(Debug)]
pub struct DragOutcome {
    pub applied: bool,
    pub persist: Option<JoinHandle<()>>,
}

impl DragOutcome {
    fn noop() -> Self {
        Self {
            applied: false,
            persist: None,
        }
    }
}

/// Maps drag gestures onto one open board
pub struct DragCoordinator {
    model: Arc<BoardModel>,
    ctx: Arc<BoardContext>,
    policy: ReconcilePolicy,
}

impl DragCoordinator {
    /// Create a coordinator with the default (manual) reconcile policy
    pub fn new(model: Arc<BoardModel>, ctx: Arc<BoardContext>) -> Self {
        Self::with_policy(model, ctx, ReconcilePolicy::default())
    }

    /// Create a coordinator with an explicit reconcile policy
    pub fn with_policy(
        model: Arc<BoardModel>,
        ctx: Arc<BoardContext>,
        policy: ReconcilePolicy,
    ) -> Self {
        Self { model, ctx, policy }
    }

    /// Load (or reload) the board into the model. Fetch failures land in
    /// the `Errored` phase with the entity arrays frozen at the last good
    /// snapshot.
    pub async fn load_board(&self, board_id: &BoardId) {
        self.model.dispatch(BoardAction::SetLoading(true)).await;
        load_into(&self.model, &self.ctx, board_id).await;
    }

    /// Handle a drag-end gesture.
    ///
    /// Applies the move to the model synchronously, then spawns the store
    /// update for the moved task's own fields and returns without waiting
    /// on it.
    pub async fn handle_drag_end(&self, event: DragEnd) -> DragOutcome {
        let snapshot = self.model.snapshot().await;
        let Some(task) = snapshot.find_task(&event.task_id) else {
            tracing::debug!(task = %event.task_id, "dragged task no longer present");
            return DragOutcome::noop();
        };

        // Resolve "insert before the task currently at dest_index": within
        // the same column the slots past the dragged task shift down once
        // it is plucked out.
        let same_column = task.column_id == event.dest_column;
        let new_position = if same_column && event.dest_index > task.position {
            event.dest_index - 1
        } else {
            event.dest_index
        };

        if same_column && new_position == task.position {
            tracing::debug!(task = %event.task_id, "dropped on own slot");
            return DragOutcome::noop();
        }

        let outcome = self
            .model
            .dispatch(BoardAction::MoveTask {
                task_id: event.task_id.clone(),
                from_column: event.source_column.clone(),
                to_column: event.dest_column.clone(),
                new_position,
            })
            .await;
        if !outcome.is_applied() {
            return DragOutcome::noop();
        }

        let model = Arc::clone(&self.model);
        let ctx = Arc::clone(&self.ctx);
        let policy = self.policy;
        let task_id = event.task_id;
        let dest_column = event.dest_column;

        let handle = tokio::spawn(async move {
            let command = MoveTask::new(task_id.clone(), dest_column, new_position);
            match command.execute(ctx.as_ref()).await {
                Ok(()) => {
                    tracing::debug!(task = %task_id, position = new_position, "move persisted");
                }
                Err(e) => {
                    tracing::warn!(task = %task_id, error = %e, "move persist failed");
                    model
                        .dispatch(BoardAction::SetError(Some(format!(
                            "failed to save move: {e}"
                        ))))
                        .await;

                    if policy == ReconcilePolicy::ReloadAfterPersistFailure {
                        let board_id = model
                            .snapshot()
                            .await
                            .board
                            .as_ref()
                            .map(|b| b.id.clone());
                        if let Some(board_id) = board_id {
                            load_into(&model, &ctx, &board_id).await;
                        }
                    }
                }
            }
        });

        DragOutcome {
            applied: true,
            persist: Some(handle),
        }
    }
}

async fn load_into(model: &BoardModel, ctx: &BoardContext, board_id: &BoardId) {
    match FetchBoardData::new(board_id.clone()).execute(ctx).await {
        Ok(data) => {
            model
                .dispatch(BoardAction::LoadBoardData {
                    board: data.board,
                    columns: data.columns,
                    tasks: data.tasks,
                })
                .await;
        }
        Err(e) => {
            tracing::error!(board = %board_id, error = %e, "board load failed");
            model
                .dispatch(BoardAction::SetError(Some(e.to_string())))
                .await;
        }
    }
}
