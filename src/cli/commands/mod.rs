//! Command implementations for the HURDAT timeline CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module.

pub mod breakpoints;
pub mod process;
pub mod shared;

// Re-export the main types for convenient access
pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the timeline processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `process`: parse tracks, resolve breakpoints, write the report
/// - `breakpoints`: load and inspect the breakpoint registry
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Breakpoints(breakpoints_args)) => {
            breakpoints::run_breakpoints(breakpoints_args).await
        }
        None => Err(Error::configuration("No command specified")),
    }
}
