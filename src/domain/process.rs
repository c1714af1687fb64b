//! Process matching rules
//!
//! Pure value types and predicates over a process-table snapshot. Two bots
//! may run the exact same command (e.g. `python3 main.py`); the working
//! directory is what tells them apart, so matching is always command AND
//! cwd, and an ambiguous result is reported rather than guessed at.

use crate::error::{BotherdError, Result};
use std::path::{Path, PathBuf};

/// A snapshot of one OS process, independent of the table backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub argv: Vec<String>,
    /// Current working directory; unknown for some foreign processes
    pub cwd: Option<PathBuf>,
    /// Seconds since the process started
    pub run_time_secs: u64,
}

impl ProcessInfo {
    pub fn new(pid: u32, argv: Vec<String>, cwd: Option<PathBuf>, run_time_secs: u64) -> Self {
        ProcessInfo {
            pid,
            argv,
            cwd,
            run_time_secs,
        }
    }

    /// The argv joined with spaces, as `ps` would print it
    pub fn cmdline(&self) -> String {
        self.argv.join(" ")
    }

    /// True if this process was launched with the given command tokens.
    /// Prefix match, so `python3 main.py --flag` still matches a command
    /// of `python3 main.py`.
    pub fn matches_command(&self, tokens: &[String]) -> bool {
        if tokens.is_empty() || self.argv.len() < tokens.len() {
            return false;
        }
        self.argv.iter().zip(tokens.iter()).all(|(a, t)| a == t)
    }

    /// True if this process runs in the given (canonicalized) directory
    pub fn matches_cwd(&self, dir: &Path) -> bool {
        match &self.cwd {
            Some(cwd) => cwd == dir,
            None => false,
        }
    }
}

/// Find the process belonging to a bot: command tokens AND working
/// directory must match. More than one survivor is an error naming the
/// candidate PIDs.
pub fn find_bot_process<'a>(
    snapshot: &'a [ProcessInfo],
    name: &str,
    tokens: &[String],
    dir: &Path,
) -> Result<Option<&'a ProcessInfo>> {
    let candidates: Vec<&ProcessInfo> = snapshot
        .iter()
        .filter(|p| p.matches_command(tokens) && p.matches_cwd(dir))
        .collect();

    match candidates.len() {
        0 => Ok(None),
        1 => Ok(Some(candidates[0])),
        _ => Err(BotherdError::AmbiguousProcess {
            name: name.to_string(),
            pids: candidates.iter().map(|p| p.pid).collect(),
        }),
    }
}
