//! Shared running-state resolution
//!
//! Every lifecycle operation needs the same answer: is this bot running,
//! and as which PID? The pidfile is the fast path, but a PID can be reused
//! by an unrelated process, so a pidfile PID only counts when the live
//! process still matches the bot's command tokens. With no (usable)
//! pidfile the process table is scanned by command AND working directory,
//! which is what separates two bots running the same `python3 main.py`.

use crate::domain::{find_bot_process, BotSpec, ProcessInfo};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, ProcessTable};

/// Outcome of resolving a bot against the live process table
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The bot runs as this process
    Running(ProcessInfo),
    /// A pidfile exists but its PID is dead or belongs to another command
    StalePidfile(u32),
    /// No pidfile and no matching process
    NotRunning,
}

/// Resolve a bot's live process, if any
pub fn resolve(
    repository: &FileSystemRepository,
    table: &ProcessTable,
    name: &str,
    spec: &BotSpec,
) -> Result<Resolution> {
    let tokens = spec.command_tokens()?;

    // 1. Pidfile fast path, guarded against PID reuse
    let mut stale = None;
    if let Some(pid) = repository.read_pid(name)? {
        match table.info(pid) {
            Some(info) if info.matches_command(&tokens) => {
                return Ok(Resolution::Running(info));
            }
            _ => stale = Some(pid),
        }
    }

    // 2. Process table scan by command + working directory
    if let Some(dir) = repository.canonical_bot_dir(spec) {
        let snapshot = table.processes();
        if let Some(info) = find_bot_process(&snapshot, name, &tokens, &dir)? {
            return Ok(Resolution::Running(info.clone()));
        }
    }

    match stale {
        Some(pid) => Ok(Resolution::StalePidfile(pid)),
        None => Ok(Resolution::NotRunning),
    }
}
