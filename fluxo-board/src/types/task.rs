//! Task types: Task, TaskStatus, TaskPatch

use super::ids::{BoardId, ColumnId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// A task/card on the board. `position` is dense within its column: the set
/// of positions across the column's tasks is exactly `{0..n-1}`, ascending
/// top-to-bottom. A task belongs to exactly one column at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(skip)]
    pub id: TaskId,
    pub title: String,
    /// Empty string = no description
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub column_id: ColumnId,
    pub board_id: BoardId,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Discussion thread, oldest first
    #[serde(default)]
    pub comments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task at the given position in a column
    pub fn new(
        title: impl Into<String>,
        column_id: ColumnId,
        board_id: BoardId,
        position: usize,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            column_id,
            board_id,
            position,
            start_date: None,
            end_date: None,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the schedule
    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }
}

/// Partial update for a task. A `None` field is omitted - left untouched
/// and never serialized, so it cannot reach the store as a null. Clearing
/// is expressed with an explicit empty value: empty string for the
/// description, empty vec for the comments. Dates are set-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
}

impl TaskPatch {
    /// An empty patch (touches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description (empty string clears)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the start date
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the end date
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Replace the comment thread (empty vec clears)
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = Some(comments);
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge the patch into a task. Omitted fields are left as-is.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(start) = self.start_date {
            task.start_date = Some(start);
        }
        if let Some(end) = self.end_date {
            task.end_date = Some(end);
        }
        if let Some(comments) = &self.comments {
            task.comments = comments.clone();
        }
    }
}
