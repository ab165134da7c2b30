//! BoardContext - typed I/O primitives over the document store
//!
//! The context provides access, not logic: read/write/list helpers that
//! decode documents into entity types and restore ids from document ids.
//! Commands do all the work.

use crate::error::{BoardError, Result};
use crate::types::{
    Board, BoardId, Column, ColumnId, Project, ProjectId, Task, TaskId, Workspace, WorkspaceId,
};
use fluxo_store::{Document, EntityStore, Fields, Filter};
use serde::de::{DeserializeOwned, Error as _};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Collection names in the backing store
pub mod collections {
    pub const WORKSPACES: &str = "workspaces";
    pub const PROJECTS: &str = "projects";
    pub const BOARDS: &str = "boards";
    pub const COLUMNS: &str = "columns";
    pub const TASKS: &str = "tasks";
}

/// Context passed to every command
pub struct BoardContext {
    store: Arc<dyn EntityStore>,
}

impl BoardContext {
    /// Create a context over a store
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    /// Serialize an entity into a document field map. The `#[serde(skip)]`
    /// id never appears in the payload.
    pub fn fields_of<T: Serialize>(entity: &T) -> Result<Fields> {
        match serde_json::to_value(entity)? {
            Value::Object(fields) => Ok(fields),
            other => Err(BoardError::Decode(serde_json::Error::custom(format!(
                "expected an object, got {}",
                other
            )))),
        }
    }

    fn decode<T: DeserializeOwned>(doc: Document) -> Result<(String, T)> {
        let id = doc.id;
        let entity = serde_json::from_value(Value::Object(doc.fields))?;
        Ok((id, entity))
    }

    async fn get_entity<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<(String, T)>> {
        match self.store.get(collection, id).await? {
            Some(doc) => Ok(Some(Self::decode(doc)?)),
            None => Ok(None),
        }
    }

    async fn list_entities<T: DeserializeOwned>(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<(String, T)>> {
        let docs = self.store.list(collection, filter).await?;
        docs.into_iter().map(Self::decode).collect()
    }

    // =========================================================================
    // Workspace I/O
    // =========================================================================

    /// Read a workspace, erroring if absent
    pub async fn read_workspace(&self, id: &WorkspaceId) -> Result<Workspace> {
        let Some((doc_id, mut workspace)) = self
            .get_entity::<Workspace>(collections::WORKSPACES, id.as_str())
            .await?
        else {
            return Err(BoardError::WorkspaceNotFound { id: id.to_string() });
        };
        workspace.id = WorkspaceId::from_string(doc_id);
        Ok(workspace)
    }

    /// List workspaces owned by a user
    pub async fn list_workspaces(&self, owner_id: &str) -> Result<Vec<Workspace>> {
        let filter = Filter::eq("ownerId", owner_id);
        let entities = self
            .list_entities::<Workspace>(collections::WORKSPACES, Some(&filter))
            .await?;
        Ok(entities
            .into_iter()
            .map(|(id, mut workspace)| {
                workspace.id = WorkspaceId::from_string(id);
                workspace
            })
            .collect())
    }

    // =========================================================================
    // Project I/O
    // =========================================================================

    /// Read a project, erroring if absent
    pub async fn read_project(&self, id: &ProjectId) -> Result<Project> {
        let Some((doc_id, mut project)) = self
            .get_entity::<Project>(collections::PROJECTS, id.as_str())
            .await?
        else {
            return Err(BoardError::ProjectNotFound { id: id.to_string() });
        };
        project.id = ProjectId::from_string(doc_id);
        Ok(project)
    }

    /// List projects in a workspace
    pub async fn list_projects(&self, workspace_id: &WorkspaceId) -> Result<Vec<Project>> {
        let filter = Filter::eq("workspaceId", workspace_id.as_str());
        let entities = self
            .list_entities::<Project>(collections::PROJECTS, Some(&filter))
            .await?;
        Ok(entities
            .into_iter()
            .map(|(id, mut project)| {
                project.id = ProjectId::from_string(id);
                project
            })
            .collect())
    }

    // =========================================================================
    // Board I/O
    // =========================================================================

    /// Read a board, erroring if absent
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        let Some((doc_id, mut board)) = self
            .get_entity::<Board>(collections::BOARDS, id.as_str())
            .await?
        else {
            return Err(BoardError::BoardNotFound { id: id.to_string() });
        };
        board.id = BoardId::from_string(doc_id);
        Ok(board)
    }

    /// The board of a project, if one was created
    pub async fn find_project_board(&self, project_id: &ProjectId) -> Result<Option<Board>> {
        let filter = Filter::eq("projectId", project_id.as_str());
        let mut entities = self
            .list_entities::<Board>(collections::BOARDS, Some(&filter))
            .await?;
        Ok(entities.pop().map(|(id, mut board)| {
            board.id = BoardId::from_string(id);
            board
        }))
    }

    // =========================================================================
    // Column I/O
    // =========================================================================

    /// Read a column, erroring if absent
    pub async fn read_column(&self, id: &ColumnId) -> Result<Column> {
        let Some((doc_id, mut column)) = self
            .get_entity::<Column>(collections::COLUMNS, id.as_str())
            .await?
        else {
            return Err(BoardError::column_not_found(id));
        };
        column.id = ColumnId::from_string(doc_id);
        Ok(column)
    }

    /// Columns of a board, in store order (callers sort by position)
    pub async fn list_columns(&self, board_id: &BoardId) -> Result<Vec<Column>> {
        let filter = Filter::eq("boardId", board_id.as_str());
        let entities = self
            .list_entities::<Column>(collections::COLUMNS, Some(&filter))
            .await?;
        Ok(entities
            .into_iter()
            .map(|(id, mut column)| {
                column.id = ColumnId::from_string(id);
                column
            })
            .collect())
    }

    // =========================================================================
    // Task I/O
    // =========================================================================

    /// Read a task, erroring if absent
    pub async fn read_task(&self, id: &TaskId) -> Result<Task> {
        let Some((doc_id, mut task)) = self
            .get_entity::<Task>(collections::TASKS, id.as_str())
            .await?
        else {
            return Err(BoardError::task_not_found(id));
        };
        task.id = TaskId::from_string(doc_id);
        Ok(task)
    }

    /// Tasks of a board, in store order
    pub async fn list_tasks(&self, board_id: &BoardId) -> Result<Vec<Task>> {
        let filter = Filter::eq("boardId", board_id.as_str());
        self.collect_tasks(&filter).await
    }

    /// Tasks of one column, in store order
    pub async fn list_tasks_in_column(&self, column_id: &ColumnId) -> Result<Vec<Task>> {
        let filter = Filter::eq("columnId", column_id.as_str());
        self.collect_tasks(&filter).await
    }

    async fn collect_tasks(&self, filter: &Filter) -> Result<Vec<Task>> {
        let entities = self
            .list_entities::<Task>(collections::TASKS, Some(filter))
            .await?;
        Ok(entities
            .into_iter()
            .map(|(id, mut task)| {
                task.id = TaskId::from_string(id);
                task
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxo_store::MemoryStore;

    fn ctx() -> BoardContext {
        BoardContext::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_task_round_trip_restores_id() {
        let ctx = ctx();
        let task = Task::new(
            "A",
            ColumnId::from_string("c1"),
            BoardId::from_string("b1"),
            0,
        );
        let fields = BoardContext::fields_of(&task).unwrap();
        let id = ctx
            .store()
            .create(collections::TASKS, fields)
            .await
            .unwrap();

        let read = ctx.read_task(&TaskId::from_string(&id)).await.unwrap();
        assert_eq!(read.id.as_str(), id);
        assert_eq!(read.title, "A");
    }

    #[tokio::test]
    async fn test_read_missing_task() {
        let ctx = ctx();
        let result = ctx.read_task(&TaskId::from_string("ghost")).await;
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_tasks_filters_by_board() {
        let ctx = ctx();
        for board in ["b1", "b2"] {
            let task = Task::new(
                "x",
                ColumnId::from_string("c1"),
                BoardId::from_string(board),
                0,
            );
            ctx.store()
                .create(collections::TASKS, BoardContext::fields_of(&task).unwrap())
                .await
                .unwrap();
        }

        let tasks = ctx.list_tasks(&BoardId::from_string("b1")).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].board_id.as_str(), "b1");
    }
}
