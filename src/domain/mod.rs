//! Domain layer - Core types and matching rules

pub mod instance;
pub mod process;

pub use instance::BotSpec;
pub use process::{find_bot_process, ProcessInfo};
