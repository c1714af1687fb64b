//! Process table access backed by sysinfo

use crate::domain::ProcessInfo;
use crate::error::{BotherdError, Result};
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessStatus, Signal, System};

/// Poll interval while waiting for a signalled process to exit
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A point-in-time snapshot of the OS process table
pub struct ProcessTable {
    system: System,
}

impl ProcessTable {
    /// Take a fresh snapshot of all processes
    pub fn snapshot() -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        ProcessTable { system }
    }

    /// PID of the botherd process itself
    pub fn own_pid() -> Option<u32> {
        sysinfo::get_current_pid().ok().map(|p| p.as_u32())
    }

    /// All processes in the snapshot, excluding botherd itself
    pub fn processes(&self) -> Vec<ProcessInfo> {
        let own = Self::own_pid();

        self.system
            .processes()
            .iter()
            .filter(|(pid, _)| Some(pid.as_u32()) != own)
            .map(|(pid, process)| Self::to_info(pid.as_u32(), process))
            .collect()
    }

    /// Look up a single process by PID
    pub fn info(&self, pid: u32) -> Option<ProcessInfo> {
        self.system
            .process(Pid::from_u32(pid))
            .map(|process| Self::to_info(pid, process))
    }

    /// True if the PID exists in the snapshot. A zombie is dead for
    /// supervision purposes: it has exited and merely awaits reaping.
    pub fn alive(&self, pid: u32) -> bool {
        match self.system.process(Pid::from_u32(pid)) {
            Some(process) => process.status() != ProcessStatus::Zombie,
            None => false,
        }
    }

    /// Send SIGTERM to a process
    pub fn terminate(&self, pid: u32) -> Result<()> {
        let process = self
            .system
            .process(Pid::from_u32(pid))
            .ok_or_else(|| BotherdError::Signal(format!("No such process: {}", pid)))?;

        match process.kill_with(Signal::Term) {
            Some(true) => Ok(()),
            Some(false) => Err(BotherdError::Signal(format!(
                "Could not send SIGTERM to PID {}",
                pid
            ))),
            None => Err(BotherdError::Signal(
                "SIGTERM is not supported on this platform".to_string(),
            )),
        }
    }

    /// Send SIGKILL to a process
    pub fn force_kill(&self, pid: u32) -> Result<()> {
        let process = self
            .system
            .process(Pid::from_u32(pid))
            .ok_or_else(|| BotherdError::Signal(format!("No such process: {}", pid)))?;

        if process.kill() {
            Ok(())
        } else {
            Err(BotherdError::Signal(format!(
                "Could not send SIGKILL to PID {}",
                pid
            )))
        }
    }

    fn to_info(pid: u32, process: &sysinfo::Process) -> ProcessInfo {
        let argv = process
            .cmd()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        let cwd = process.cwd().map(|p| p.to_path_buf());

        ProcessInfo::new(pid, argv, cwd, process.run_time())
    }
}

/// Poll the process table until the PID disappears or the grace window
/// elapses. Returns true when the process exited.
pub fn wait_for_exit(pid: u32, grace: Duration) -> bool {
    let deadline = Instant::now() + grace;

    loop {
        if !ProcessTable::snapshot().alive(pid) {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(EXIT_POLL_INTERVAL);
    }
}
