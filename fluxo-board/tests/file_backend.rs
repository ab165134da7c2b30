//! Full board flow against the file-backed store

use fluxo_board::board::InitBoard;
use fluxo_board::column::{AddColumn, DeleteColumn};
use fluxo_board::drag::{DragCoordinator, DragEnd};
use fluxo_board::state::BoardModel;
use fluxo_board::task::AddTask;
use fluxo_board::{BoardContext, Execute};
use fluxo_store::FileStore;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn board_survives_reopen_from_disk() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".fluxo");

    let board_id = {
        let ctx = Arc::new(BoardContext::new(Arc::new(FileStore::new(&root))));
        let board = InitBoard::new("p1", "Sprint")
            .execute(ctx.as_ref())
            .await
            .unwrap();
        let todo = AddColumn::new(board.id.clone(), "To Do")
            .execute(ctx.as_ref())
            .await
            .unwrap();
        let done = AddColumn::new(board.id.clone(), "Done")
            .execute(ctx.as_ref())
            .await
            .unwrap();
        let task = AddTask::new(board.id.clone(), todo.id.clone(), "Ship it")
            .execute(ctx.as_ref())
            .await
            .unwrap();

        // Drag the task across and wait for the background save
        let model = Arc::new(BoardModel::new());
        let drag = DragCoordinator::new(Arc::clone(&model), Arc::clone(&ctx));
        drag.load_board(&board.id).await;
        let outcome = drag
            .handle_drag_end(DragEnd {
                task_id: task.id.clone(),
                source_column: todo.id.clone(),
                dest_column: done.id.clone(),
                dest_index: 0,
            })
            .await;
        assert!(outcome.applied);
        outcome.persist.unwrap().await.unwrap();

        board.id
    };

    // A fresh context over the same directory sees the durable state
    let ctx = Arc::new(BoardContext::new(Arc::new(FileStore::new(&root))));
    let model = Arc::new(BoardModel::new());
    let drag = DragCoordinator::new(Arc::clone(&model), Arc::clone(&ctx));
    drag.load_board(&board_id).await;

    let snapshot = model.snapshot().await;
    assert!(!snapshot.is_error());
    assert_eq!(snapshot.columns.len(), 2);

    let done_id = snapshot
        .columns
        .iter()
        .find(|c| c.name == "Done")
        .unwrap()
        .id
        .clone();
    let tasks = snapshot.tasks_in_column(&done_id);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Ship it");
    assert_eq!(tasks[0].position, 0);
}

#[tokio::test]
async fn cascade_delete_is_durable() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".fluxo");
    let ctx = Arc::new(BoardContext::new(Arc::new(FileStore::new(&root))));

    let board = InitBoard::new("p1", "Sprint")
        .execute(ctx.as_ref())
        .await
        .unwrap();
    let column = AddColumn::new(board.id.clone(), "Doomed")
        .execute(ctx.as_ref())
        .await
        .unwrap();
    for i in 0..3 {
        AddTask::new(board.id.clone(), column.id.clone(), format!("t{i}"))
            .execute(ctx.as_ref())
            .await
            .unwrap();
    }

    let deleted = DeleteColumn::new(column.id.clone())
        .execute(ctx.as_ref())
        .await
        .unwrap();
    assert_eq!(deleted.tasks_deleted, 3);

    let leftover = ctx.list_tasks(&board.id).await.unwrap();
    assert!(leftover.is_empty());
}
