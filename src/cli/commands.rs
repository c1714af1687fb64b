//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "botherd")]
#[command(about = "Process supervisor for bot fleets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new bot registry
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Register a bot
    Add {
        /// Bot name
        name: String,

        /// Working directory for the bot (relative to the registry root)
        #[arg(short, long)]
        dir: PathBuf,

        /// Launch command (default: "python3 main.py")
        #[arg(short, long)]
        command: Option<String>,

        /// Log file name, relative to the bot directory (default: "output.log")
        #[arg(short, long)]
        log: Option<String>,
    },

    /// Unregister a bot (must be stopped first)
    Remove {
        /// Bot name
        name: String,
    },

    /// List registered bots
    List,

    /// Start a bot detached, with output appended to its log file
    Start {
        /// Bot name
        name: Option<String>,

        /// Start every registered bot
        #[arg(long)]
        all: bool,
    },

    /// Stop a bot (SIGTERM, or SIGKILL with --force)
    Stop {
        /// Bot name
        name: Option<String>,

        /// Stop every running bot
        #[arg(long)]
        all: bool,

        /// Stop an explicit PID instead of a registered bot
        #[arg(long, conflicts_with_all = ["name", "all"])]
        pid: Option<u32>,

        /// Send SIGKILL instead of SIGTERM
        #[arg(short, long)]
        force: bool,
    },

    /// Show which bots are running, with PID, uptime and working directory
    Status {
        /// Bot name (default: all bots)
        name: Option<String>,
    },

    /// Print the tail of a bot's log file
    Logs {
        /// Bot name
        name: String,

        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,

        /// Keep streaming appended log data
        #[arg(short, long)]
        follow: bool,
    },

    /// List processes whose command line matches a pattern
    Ps {
        /// Regular expression matched against the full command line
        pattern: String,
    },

    /// View or modify registry configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Drive the container workflow for the registry
    Compose {
        #[command(subcommand)]
        command: ComposeCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ComposeCommands {
    /// Build service images
    Build {
        /// Service to build (default: all services)
        service: Option<String>,
    },

    /// Start services detached
    Up {
        /// Service to start (default: all services)
        service: Option<String>,
    },

    /// Show service logs
    Logs {
        /// Service to show (default: all services)
        service: Option<String>,

        /// Keep streaming log output
        #[arg(short, long)]
        follow: bool,
    },

    /// Stop and remove services
    Down {
        /// Also remove named volumes
        #[arg(long)]
        volumes: bool,

        /// Also remove all images used by the services
        #[arg(long)]
        rmi: bool,

        /// Also remove containers for services not in the compose file
        #[arg(long)]
        remove_orphans: bool,
    },

    /// Remove unused container data
    Prune {
        /// Prune all unused images, not just dangling ones
        #[arg(long)]
        all: bool,
    },
}
