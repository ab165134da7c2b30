//! Board state model
//!
//! The authoritative in-memory snapshot of one open board, and the pure
//! transition function over it. Every mutation produces a fresh
//! [`BoardState`] - no shared-array mutation - and either fully applies or
//! is reported as an ignored no-op through [`ApplyOutcome`]; there is no
//! partial application.
//!
//! The model moves through three coarse phases: `Loading` (initial, entity
//! arrays empty or stale), `Ready` (arrays valid, density invariants hold),
//! and `Errored` (last fetch or persist failed; arrays keep the last
//! known-good snapshot). Entity mutations are ignored while `Loading`.

use crate::position;
use crate::types::{Board, Column, ColumnId, Task, TaskId, TaskPatch};
use tokio::sync::RwLock;

/// Coarse lifecycle phase of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Errored,
}

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The transition fully applied
    Applied,
    /// The transition was a no-op; the state is unchanged
    Ignored(IgnoreReason),
}

impl ApplyOutcome {
    /// True if the transition applied
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a transition was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The referenced task is no longer present locally (stale gesture;
    /// the next load re-renders). Not an error.
    TaskMissing,
    /// The destination column does not exist; rejected before any mutation
    ColumnMissing,
    /// Entity mutations are not permitted while loading
    NotReady,
}

/// Dispatchable intents, mirroring what the view layer can ask for
#[derive(Debug, Clone)]
pub enum BoardAction {
    /// Replace the entire snapshot (board open or explicit refresh)
    LoadBoardData {
        board: Board,
        columns: Vec<Column>,
        tasks: Vec<Task>,
    },
    /// Reposition a task, recomputing every affected sibling in one step
    MoveTask {
        task_id: TaskId,
        from_column: ColumnId,
        to_column: ColumnId,
        new_position: usize,
    },
    /// Merge a partial update into a task
    EditTask { task_id: TaskId, patch: TaskPatch },
    /// Remove a task and close the position gap in its column
    DeleteTask { task_id: TaskId },
    /// Remove a column and all of its tasks, closing the column gap
    DeleteColumn { column_id: ColumnId },
    /// Orthogonal status flag; does not touch entity data
    SetLoading(bool),
    /// Orthogonal status flag; does not touch entity data
    SetError(Option<String>),
}

/// Immutable snapshot of one open board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub board: Option<Board>,
    /// Sorted ascending by `position`
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
    pub phase: Phase,
    pub error: Option<String>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// The initial (loading, empty) state
    pub fn new() -> Self {
        Self {
            board: None,
            columns: Vec::new(),
            tasks: Vec::new(),
            phase: Phase::Loading,
            error: None,
        }
    }

    /// True while the first load (or a retry) is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// True if the last fetch or persist failed
    pub fn is_error(&self) -> bool {
        self.phase == Phase::Errored
    }

    /// Find a task by id
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Tasks of one column, sorted by position
    pub fn tasks_in_column(&self, column_id: &ColumnId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| &t.column_id == column_id)
            .collect();
        tasks.sort_by_key(|t| t.position);
        tasks
    }

    /// Apply an action, returning the next state and whether it applied.
    ///
    /// Pure: `self` is never mutated. An `Ignored` outcome returns a state
    /// structurally equal to `self`.
    pub fn apply(&self, action: BoardAction) -> (BoardState, ApplyOutcome) {
        match action {
            BoardAction::LoadBoardData {
                board,
                columns,
                tasks,
            } => (self.load(board, columns, tasks), ApplyOutcome::Applied),

            BoardAction::SetLoading(loading) => {
                let mut next = self.clone();
                next.phase = if loading {
                    Phase::Loading
                } else if next.error.is_some() {
                    Phase::Errored
                } else {
                    Phase::Ready
                };
                (next, ApplyOutcome::Applied)
            }

            BoardAction::SetError(error) => {
                let mut next = self.clone();
                match error {
                    Some(message) => {
                        next.error = Some(message);
                        next.phase = Phase::Errored;
                    }
                    None => {
                        next.error = None;
                        if next.phase == Phase::Errored {
                            next.phase = if next.board.is_some() {
                                Phase::Ready
                            } else {
                                Phase::Loading
                            };
                        }
                    }
                }
                (next, ApplyOutcome::Applied)
            }

            BoardAction::MoveTask {
                task_id,
                from_column,
                to_column,
                new_position,
            } => self.mutate(|state| state.move_task(&task_id, &from_column, &to_column, new_position)),

            BoardAction::EditTask { task_id, patch } => {
                self.mutate(|state| state.edit_task(&task_id, &patch))
            }

            BoardAction::DeleteTask { task_id } => {
                self.mutate(|state| state.delete_task(&task_id))
            }

            BoardAction::DeleteColumn { column_id } => {
                self.mutate(|state| state.delete_column(&column_id))
            }
        }
    }

    /// Gate entity mutations on the phase machine: ignored while `Loading`,
    /// allowed in `Ready` and `Errored` (a failed persist leaves the board
    /// interactive with the error flag set).
    fn mutate(
        &self,
        transition: impl FnOnce(&Self) -> (BoardState, ApplyOutcome),
    ) -> (BoardState, ApplyOutcome) {
        if self.phase == Phase::Loading {
            tracing::warn!("entity mutation ignored while board is loading");
            return (self.clone(), ApplyOutcome::Ignored(IgnoreReason::NotReady));
        }
        transition(self)
    }

    /// Full snapshot replacement. Columns are sorted ascending by position;
    /// task positions are renormalized to dense `{0..n-1}` per column, since
    /// stored positions may carry drift from moves persisted one task at a
    /// time (stored order, id as tie-break).
    fn load(&self, board: Board, mut columns: Vec<Column>, mut tasks: Vec<Task>) -> BoardState {
        columns.sort_by_key(|c| c.position);

        tasks.sort_by(|a, b| {
            a.column_id
                .cmp(&b.column_id)
                .then(a.position.cmp(&b.position))
                .then(a.id.cmp(&b.id))
        });
        let mut previous_column: Option<ColumnId> = None;
        let mut next_position = 0usize;
        for task in &mut tasks {
            if previous_column.as_ref() != Some(&task.column_id) {
                previous_column = Some(task.column_id.clone());
                next_position = 0;
            }
            task.position = next_position;
            next_position += 1;
        }

        BoardState {
            board: Some(board),
            columns,
            tasks,
            phase: Phase::Ready,
            error: None,
        }
    }

    fn move_task(
        &self,
        task_id: &TaskId,
        from_column: &ColumnId,
        to_column: &ColumnId,
        new_position: usize,
    ) -> (BoardState, ApplyOutcome) {
        let Some(task) = self.find_task(task_id) else {
            tracing::debug!(task = %task_id, "move target no longer present, ignoring");
            return (self.clone(), ApplyOutcome::Ignored(IgnoreReason::TaskMissing));
        };
        if self.find_column(to_column).is_none() {
            tracing::debug!(column = %to_column, "move destination missing, ignoring");
            return (
                self.clone(),
                ApplyOutcome::Ignored(IgnoreReason::ColumnMissing),
            );
        }

        // The task's own column is authoritative; a stale source in the
        // event means the gesture raced a newer move.
        let source_column = task.column_id.clone();
        if &source_column != from_column {
            tracing::warn!(
                task = %task_id,
                claimed = %from_column,
                actual = %source_column,
                "drag event carries stale source column"
            );
        }

        let old_position = task.position;
        let same_column = &source_column == to_column;
        let destination_len = self
            .tasks
            .iter()
            .filter(|t| &t.column_id == to_column && &t.id != task_id)
            .count();
        position::assert_insertable(new_position, destination_len);

        let tasks = self
            .tasks
            .iter()
            .map(|t| {
                let mut t = t.clone();
                if &t.id == task_id {
                    t.column_id = to_column.clone();
                    t.position = new_position;
                } else if same_column && &t.column_id == to_column {
                    t.position = position::reorder_shift(t.position, old_position, new_position);
                } else if t.column_id == source_column {
                    t.position = position::close_gap(t.position, old_position);
                } else if &t.column_id == to_column {
                    t.position = position::open_gap(t.position, new_position);
                }
                t
            })
            .collect();

        let mut next = self.clone();
        next.tasks = tasks;
        (next, ApplyOutcome::Applied)
    }

    fn edit_task(&self, task_id: &TaskId, patch: &TaskPatch) -> (BoardState, ApplyOutcome) {
        if self.find_task(task_id).is_none() {
            tracing::debug!(task = %task_id, "edit target no longer present, ignoring");
            return (self.clone(), ApplyOutcome::Ignored(IgnoreReason::TaskMissing));
        }

        let mut next = self.clone();
        for task in &mut next.tasks {
            if &task.id == task_id {
                patch.apply_to(task);
            }
        }
        (next, ApplyOutcome::Applied)
    }

    fn delete_task(&self, task_id: &TaskId) -> (BoardState, ApplyOutcome) {
        let Some(task) = self.find_task(task_id) else {
            return (self.clone(), ApplyOutcome::Ignored(IgnoreReason::TaskMissing));
        };
        let column = task.column_id.clone();
        let vacated = task.position;

        let mut next = self.clone();
        next.tasks.retain(|t| &t.id != task_id);
        for t in &mut next.tasks {
            if t.column_id == column {
                t.position = position::close_gap(t.position, vacated);
            }
        }
        (next, ApplyOutcome::Applied)
    }

    fn delete_column(&self, column_id: &ColumnId) -> (BoardState, ApplyOutcome) {
        let Some(column) = self.find_column(column_id) else {
            return (
                self.clone(),
                ApplyOutcome::Ignored(IgnoreReason::ColumnMissing),
            );
        };
        let vacated = column.position;

        let mut next = self.clone();
        next.columns.retain(|c| &c.id != column_id);
        for c in &mut next.columns {
            c.position = position::close_gap(c.position, vacated);
        }
        next.tasks.retain(|t| &t.column_id != column_id);
        (next, ApplyOutcome::Applied)
    }
}

/// Shared holder for the current snapshot.
///
/// Dispatches serialize on the write lock, so local transitions apply in
/// the order they were issued and run to completion before the next one -
/// the persistence calls they trigger carry no such ordering.
#[derive(Default)]
pub struct BoardModel {
    state: RwLock<BoardState>,
}

impl BoardModel {
    /// Create a model in the initial loading state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current snapshot
    pub async fn snapshot(&self) -> BoardState {
        self.state.read().await.clone()
    }

    /// Apply an action to the current state
    pub async fn dispatch(&self, action: BoardAction) -> ApplyOutcome {
        let mut state = self.state.write().await;
        let (next, outcome) = state.apply(action);
        *state = next;
        outcome
    }
}
