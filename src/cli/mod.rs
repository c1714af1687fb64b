//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ComposeCommands};
pub use output::{format_bot_list, format_process_list, format_status_list, format_uptime};
