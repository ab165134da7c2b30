//! Command definitions and execution.

use anyhow::{bail, Context as _, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fluxo_board::board::InitBoard;
use fluxo_board::column::{AddColumn, DeleteColumn, UpdateColumn};
use fluxo_board::drag::{DragCoordinator, DragEnd};
use fluxo_board::project::CreateProject;
use fluxo_board::state::{BoardModel, BoardState};
use fluxo_board::task::{AddTask, DeleteTask, UpdateTask};
use fluxo_board::types::{Board, BoardId, TaskPatch, TaskStatus};
use fluxo_board::workspace::CreateWorkspace;
use fluxo_board::{collections, BoardContext, Execute};
use fluxo_store::FileStore;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;

const DEFAULT_STORE_DIR: &str = ".fluxo";

#[derive(Parser)]
#[command(name = "fluxo", version, about = "Kanban boards from the command line")]
pub struct Cli {
    /// Board store directory (defaults to ./.fluxo)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a board in the store directory
    Init {
        /// Board (and project) name
        name: String,
        /// Workspace name to file the project under
        #[arg(long, default_value = "Personal")]
        workspace: String,
    },
    /// Print the board with its columns and tasks
    Show,
    /// List recently opened boards
    Recent,
    /// Add a column at the right edge of the board
    AddColumn {
        name: String,
    },
    /// Rename a column
    RenameColumn {
        id: String,
        name: String,
    },
    /// Delete a column and every task in it
    DeleteColumn {
        id: String,
    },
    /// Add a task at the tail of a column
    AddTask {
        /// Destination column id
        column: String,
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Scheduled start (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Scheduled end (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Edit a task's fields; omitted flags leave the field untouched
    EditTask {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// New description (pass an empty string to clear)
        #[arg(long)]
        description: Option<String>,
        /// Mark completed
        #[arg(long, conflicts_with = "pending")]
        done: bool,
        /// Mark pending
        #[arg(long)]
        pending: bool,
        /// Replace the comment thread (repeatable)
        #[arg(long = "comment")]
        comments: Vec<String>,
    },
    /// Move a task to a column and index, the way a drag-and-drop would
    MoveTask {
        id: String,
        /// Destination column id
        column: String,
        /// Insert before the task currently at this index
        index: usize,
    },
    /// Delete a task
    DeleteTask {
        id: String,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let store_dir = cli
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
    let ctx = Arc::new(BoardContext::new(Arc::new(FileStore::new(&store_dir))));

    match cli.command {
        Command::Init { name, workspace } => {
            let ws = CreateWorkspace::new(&workspace, "#6366f1", whoami())
                .execute(ctx.as_ref())
                .await?;
            let project = CreateProject::new(&name, ws.id).execute(ctx.as_ref()).await?;
            let board = InitBoard::new(project.id, &name).execute(ctx.as_ref()).await?;
            touch_recent(&store_dir, &board.name);
            println!("Created board '{}' ({})", board.name, board.id);
        }

        Command::Show => {
            let board = open_board(&ctx).await?;
            touch_recent(&store_dir, &board.name);
            let snapshot = load_snapshot(&ctx, &board.id).await?;
            print_board(&snapshot);
        }

        Command::Recent => {
            let config = AppConfig::load();
            if config.recent_boards.is_empty() {
                println!("No recent boards");
            }
            for recent in &config.recent_boards {
                println!(
                    "{}  {}  (last opened {})",
                    recent.name,
                    recent.path.display(),
                    recent.last_opened.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Command::AddColumn { name } => {
            let board = open_board(&ctx).await?;
            let column = AddColumn::new(board.id, &name).execute(ctx.as_ref()).await?;
            println!("Added column '{}' ({}) at position {}", column.name, column.id, column.position);
        }

        Command::RenameColumn { id, name } => {
            let column = UpdateColumn::new(id.as_str(), &name)
                .execute(ctx.as_ref())
                .await?;
            println!("Renamed column {} to '{}'", column.id, column.name);
        }

        Command::DeleteColumn { id } => {
            let deleted = DeleteColumn::new(id.as_str()).execute(ctx.as_ref()).await?;
            println!("Deleted column {} and {} task(s)", deleted.id, deleted.tasks_deleted);
        }

        Command::AddTask {
            column,
            title,
            description,
            start,
            end,
        } => {
            let board = open_board(&ctx).await?;
            let mut command = AddTask::new(board.id, column.as_str(), &title).with_dates(start, end);
            if let Some(description) = description {
                command = command.with_description(description);
            }
            let task = command.execute(ctx.as_ref()).await?;
            println!("Added task '{}' ({}) at position {}", task.title, task.id, task.position);
        }

        Command::EditTask {
            id,
            title,
            description,
            done,
            pending,
            comments,
        } => {
            let mut patch = TaskPatch::new();
            if let Some(title) = title {
                patch = patch.with_title(title);
            }
            if let Some(description) = description {
                patch = patch.with_description(description);
            }
            if done {
                patch = patch.with_status(TaskStatus::Completed);
            } else if pending {
                patch = patch.with_status(TaskStatus::Pending);
            }
            if !comments.is_empty() {
                patch = patch.with_comments(comments);
            }

            let task = UpdateTask::new(id.as_str(), patch).execute(ctx.as_ref()).await?;
            println!("Updated task '{}' ({})", task.title, task.id);
        }

        Command::MoveTask { id, column, index } => {
            let board = open_board(&ctx).await?;
            let model = Arc::new(BoardModel::new());
            let drag = DragCoordinator::new(Arc::clone(&model), Arc::clone(&ctx));

            drag.load_board(&board.id).await;
            let snapshot = model.snapshot().await;
            if let Some(error) = &snapshot.error {
                bail!("failed to load board: {error}");
            }

            let task = snapshot
                .find_task(&id.as_str().into())
                .with_context(|| format!("task not found: {id}"))?;

            // The engine treats an out-of-range index as a caller bug, so
            // validate the user's input here at the view boundary
            let dest: fluxo_board::types::ColumnId = column.as_str().into();
            if snapshot.find_column(&dest).is_none() {
                bail!("column not found: {column}");
            }
            let dest_len = snapshot.tasks_in_column(&dest).len();
            if index > dest_len {
                bail!("index {index} out of range for a column with {dest_len} task(s)");
            }

            let outcome = drag
                .handle_drag_end(DragEnd {
                    task_id: task.id.clone(),
                    source_column: task.column_id.clone(),
                    dest_column: dest,
                    dest_index: index,
                })
                .await;

            if !outcome.applied {
                println!("Nothing to do");
                return Ok(());
            }
            if let Some(persist) = outcome.persist {
                persist.await.context("persistence task panicked")?;
            }

            let snapshot = model.snapshot().await;
            if let Some(error) = &snapshot.error {
                bail!("move applied locally but was not saved: {error}");
            }
            println!("Moved task {id} to column {column} at index {index}");
        }

        Command::DeleteTask { id } => {
            DeleteTask::new(id.as_str()).execute(ctx.as_ref()).await?;
            println!("Deleted task {id}");
        }
    }

    Ok(())
}

/// The single board living in this store directory.
async fn open_board(ctx: &BoardContext) -> Result<Board> {
    let docs = ctx.store().list(collections::BOARDS, None).await?;
    let Some(doc) = docs.first() else {
        bail!("no board here - run `fluxo init <name>` first");
    };
    Ok(ctx.read_board(&BoardId::from_string(&doc.id)).await?)
}

async fn load_snapshot(ctx: &Arc<BoardContext>, board_id: &BoardId) -> Result<BoardState> {
    let model = Arc::new(BoardModel::new());
    let drag = DragCoordinator::new(Arc::clone(&model), Arc::clone(ctx));
    drag.load_board(board_id).await;

    let snapshot = model.snapshot().await;
    if let Some(error) = &snapshot.error {
        bail!("failed to load board: {error}");
    }
    Ok(snapshot)
}

fn print_board(snapshot: &BoardState) {
    if let Some(board) = &snapshot.board {
        println!("{}", board.name);
    }
    for column in &snapshot.columns {
        println!("\n  {} ({})", column.name, column.id);
        let tasks = snapshot.tasks_in_column(&column.id);
        if tasks.is_empty() {
            println!("    (empty)");
        }
        for task in tasks {
            let marker = match task.status {
                TaskStatus::Completed => "x",
                TaskStatus::Pending => " ",
            };
            println!("    [{marker}] {} {} ({})", task.position, task.title, task.id);
        }
    }
}

fn touch_recent(store_dir: &std::path::Path, board_name: &str) {
    let mut config = AppConfig::load();
    let path = store_dir
        .canonicalize()
        .unwrap_or_else(|_| store_dir.to_path_buf());
    config.touch_recent(&path, board_name);
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "could not save recent-board list");
    }
}

fn whoami() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "local".to_string())
}
