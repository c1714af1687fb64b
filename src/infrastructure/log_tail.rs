//! Log file tailing (`tail -n` / `tail -f` semantics)

use crate::error::{BotherdError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::time::Duration;

/// Poll interval while following a log file
const FOLLOW_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Extract the last `n` lines from a block of text
pub fn last_lines(contents: &str, n: usize) -> Vec<String> {
    let lines: Vec<&str> = contents.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].iter().map(|l| l.to_string()).collect()
}

/// Read the last `n` lines of a log file
pub fn read_last_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BotherdError::LogNotFound(path.to_path_buf())
        } else {
            BotherdError::Io(e)
        }
    })?;

    Ok(last_lines(&contents, n))
}

/// Stream appended data from a log file to `out` until the process is
/// interrupted. Starts at the current end of file; a shrinking file
/// (rotation, truncation) restarts from the beginning.
pub fn follow(path: &Path, out: &mut dyn Write) -> Result<()> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BotherdError::LogNotFound(path.to_path_buf())
        } else {
            BotherdError::Io(e)
        }
    })?;

    let mut pos = file.seek(SeekFrom::End(0))?;
    let mut buf = Vec::new();

    loop {
        let len = file.metadata()?.len();

        if len < pos {
            // File was truncated or rotated under us
            pos = file.seek(SeekFrom::Start(0))?;
        }

        if len > pos {
            buf.clear();
            file.read_to_end(&mut buf)?;
            out.write_all(&buf)?;
            out.flush()?;
            pos = file.stream_position()?;
        }

        std::thread::sleep(FOLLOW_POLL_INTERVAL);
    }
}
