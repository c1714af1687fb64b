//! Log tailing use case

use crate::error::Result;
use crate::infrastructure::{log_tail, BotRepository, FileSystemRepository};

/// Service for reading and following bot logs
pub struct LogsService {
    repository: FileSystemRepository,
}

impl LogsService {
    /// Create a new logs service
    pub fn new(repository: FileSystemRepository) -> Self {
        LogsService { repository }
    }

    /// The last `lines` lines of a bot's log file
    pub fn tail(&self, name: &str, lines: usize) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;
        let spec = config.bot(name)?;
        let log_path = self.repository.log_path(spec);

        log_tail::read_last_lines(&log_path, lines)
    }

    /// Print the last `lines` lines, then stream appended data until
    /// interrupted (`tail -f`).
    pub fn follow(&self, name: &str, lines: usize) -> Result<()> {
        let config = self.repository.load_config()?;
        let spec = config.bot(name)?;
        let log_path = self.repository.log_path(spec);

        for line in log_tail::read_last_lines(&log_path, lines)? {
            println!("{}", line);
        }

        let mut stdout = std::io::stdout();
        log_tail::follow(&log_path, &mut stdout)
    }
}
