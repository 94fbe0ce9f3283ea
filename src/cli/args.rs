//! Command-line argument definitions for the HURDAT timeline processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constants::DEFAULT_PARALLEL_WORKERS;
use crate::{Error, Result};

/// CLI arguments for the HURDAT timeline processor
///
/// Locates every observation of a hurricane season against a set of named
/// coastal breakpoints and writes a tab-separated timeline report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hurdat-timeline",
    version,
    about = "Locate HURDAT2 hurricane track observations against named coastal breakpoints",
    long_about = "Parses a HURDAT2 best-track file, resolves the nearest breakpoint for every \
                  observation of the selected season in parallel, and writes a deterministic \
                  tab-separated report with distances in miles and kilometers plus a 16-point \
                  compass direction."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the timeline processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the nearest-breakpoint timeline report (main command)
    Process(ProcessArgs),
    /// Inspect the breakpoint registry
    Breakpoints(BreakpointsArgs),
}

/// Arguments for the process command (main report generation)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the HURDAT2 best-track text file
    #[arg(
        short = 't',
        long = "track",
        value_name = "PATH",
        help = "Path to the HURDAT2 best-track text file"
    )]
    pub track_path: PathBuf,

    /// Path to the breakpoint CSV container
    ///
    /// A decimal-degree export of the published breakpoint dataset with
    /// columns name,state,country,latitude,longitude.
    #[arg(
        short = 'b',
        long = "breakpoints",
        value_name = "PATH",
        help = "Path to the breakpoint CSV container"
    )]
    pub breakpoints_path: PathBuf,

    /// Output path for the tab-separated report
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "output.tsv",
        help = "Output path for the tab-separated report"
    )]
    pub output_path: PathBuf,

    /// Season year to process
    ///
    /// Only storms whose identifier embeds this year are resolved.
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        help = "Season year to process"
    )]
    pub year: i32,

    /// Number of parallel resolver workers (0 = one per logical CPU)
    #[arg(
        short = 'w',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_PARALLEL_WORKERS,
        help = "Number of parallel resolver workers (0 = auto)"
    )]
    pub workers: usize,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output")]
    pub quiet: bool,
}

impl ProcessArgs {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Whether a progress bar should be shown
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "--verbose and --quiet are mutually exclusive",
            ));
        }
        Ok(())
    }
}

/// Arguments for the breakpoints command (registry inspection)
#[derive(Debug, Clone, Parser)]
pub struct BreakpointsArgs {
    /// Path to the breakpoint CSV container
    #[arg(
        short = 'b',
        long = "breakpoints",
        value_name = "PATH",
        help = "Path to the breakpoint CSV container"
    )]
    pub breakpoints_path: PathBuf,

    /// Only list breakpoints whose name contains this pattern
    #[arg(
        short = 'n',
        long = "name",
        value_name = "PATTERN",
        help = "Filter breakpoints by name (case-insensitive)"
    )]
    pub name: Option<String>,

    /// Enable verbose (debug-level) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}

impl BreakpointsArgs {
    /// Log level implied by the verbosity flag
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
