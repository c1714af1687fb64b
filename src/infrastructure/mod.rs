//! Infrastructure layer - External I/O: filesystem, process table, containers

pub mod compose;
pub mod config;
pub mod launcher;
pub mod log_tail;
pub mod process_table;
pub mod repository;

pub use compose::ComposeRunner;
pub use config::Config;
pub use process_table::ProcessTable;
pub use repository::{BotRepository, FileSystemRepository};
