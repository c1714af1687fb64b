//! Compose workflow use case

use crate::error::Result;
use crate::infrastructure::{compose, BotRepository, ComposeRunner, FileSystemRepository};

/// Service driving the container workflow from the registry root
pub struct ComposeService {
    runner: ComposeRunner,
}

impl ComposeService {
    /// Create a compose service rooted at the registry
    pub fn new(repository: &FileSystemRepository) -> Self {
        ComposeService {
            runner: ComposeRunner::new(repository.root()),
        }
    }

    /// `docker compose build [service]`
    pub fn build(&self, service: Option<&str>) -> Result<()> {
        self.runner.run(&compose::build_args(service))
    }

    /// `docker compose up -d [service]`
    pub fn up(&self, service: Option<&str>) -> Result<()> {
        self.runner.run(&compose::up_args(service))
    }

    /// `docker compose logs [-f] [service]`
    pub fn logs(&self, service: Option<&str>, follow: bool) -> Result<()> {
        self.runner.run(&compose::logs_args(service, follow))
    }

    /// `docker compose down` with optional teardown flags
    pub fn down(&self, volumes: bool, rmi: bool, remove_orphans: bool) -> Result<()> {
        self.runner
            .run(&compose::down_args(volumes, rmi, remove_orphans))
    }

    /// `docker system prune [-a] -f`
    pub fn prune(&self, all: bool) -> Result<()> {
        self.runner.run(&compose::prune_args(all))
    }
}
