//! botherd - Process supervisor for bot fleets
//!
//! A command-line tool that manages long-running bot processes: background
//! launch with log capture, status and working-directory disambiguation,
//! log tailing, termination, and a typed wrapper over the compose workflow.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BotherdError;
