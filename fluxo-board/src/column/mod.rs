//! Column commands

mod add;
mod delete;
mod update;

pub use add::AddColumn;
pub use delete::{DeleteColumn, DeletedColumn};
pub use update::UpdateColumn;
