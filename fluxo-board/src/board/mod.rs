//! Board commands

mod get;
mod init;
mod load;

pub use get::GetBoard;
pub use init::InitBoard;
pub use load::{BoardData, FetchBoardData};
