//! Detached process launch with log capture
//!
//! Reproduces `nohup <cmd> > output.log 2>&1 &`: stdin from /dev/null,
//! stdout and stderr appended to the bot's log file, and (on Unix) a new
//! process group so the bot survives the invoking terminal.

use crate::error::{BotherdError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawn a command detached in `dir` with output appended to `log_path`.
/// Returns the PID of the spawned process.
pub fn spawn_detached(
    program: &str,
    args: &[String],
    dir: &Path,
    log_path: &Path,
) -> Result<u32> {
    // Append, never truncate: restarts must not erase earlier output
    let log = OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_path)
        .map_err(|e| {
            BotherdError::Spawn(format!(
                "Could not open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;
    let stderr_log = log.try_clone().map_err(BotherdError::Io)?;

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(stderr_log));

    // Own process group, so the bot is not torn down with our terminal
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command.spawn().map_err(|e| {
        BotherdError::Spawn(format!("Failed to launch '{}': {}", program, e))
    })?;

    Ok(child.id())
}
