//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod logs;
pub mod manage_config;
pub mod ps;
pub mod registry;
pub mod resolve;
pub mod start;
pub mod status;
pub mod stop;

pub use compose::ComposeService;
pub use logs::LogsService;
pub use manage_config::ConfigService;
pub use registry::RegistryService;
pub use start::StartService;
pub use status::{BotState, BotStatus, StatusService};
pub use stop::StopService;
