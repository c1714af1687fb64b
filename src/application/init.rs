//! Initialize registry use case

use crate::error::Result;
use crate::infrastructure::{BotRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new bot registry at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .botherd directory
    repo.initialize()?;

    // Create and save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized botherd registry at {}", path.display());
    println!("Register a bot with: botherd add <name> --dir <dir>");

    Ok(())
}
