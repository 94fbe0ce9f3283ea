//! Configuration management and validation
//!
//! Resolves CLI arguments into a validated runtime configuration for one
//! processing run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_PARALLEL_WORKERS;
use crate::{Error, Result};

/// Resolved configuration for a timeline processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the HURDAT2 track file
    pub track_path: PathBuf,

    /// Path to the breakpoint CSV container
    pub breakpoints_path: PathBuf,

    /// Path the tab-separated report is written to
    pub output_path: PathBuf,

    /// Season year selecting which storms to process
    pub year: i32,

    /// Number of parallel resolver workers
    pub parallel_workers: usize,
}

impl Config {
    /// Resolve the worker count, treating 0 as "one per logical CPU"
    pub fn resolve_workers(requested: usize) -> usize {
        let workers = if requested == 0 {
            num_cpus::get()
        } else {
            requested
        };
        debug!("Resolved worker count: {}", workers);
        workers.max(1)
    }

    /// Validate input paths and parameters before processing starts
    pub fn validate(&self) -> Result<()> {
        if !self.track_path.is_file() {
            return Err(Error::configuration(format!(
                "Track file not found: {}",
                self.track_path.display()
            )));
        }

        if !self.breakpoints_path.is_file() {
            return Err(Error::configuration(format!(
                "Breakpoint file not found: {}",
                self.breakpoints_path.display()
            )));
        }

        if self.year < 1800 || self.year > 2200 {
            return Err(Error::configuration(format!(
                "Implausible season year: {}",
                self.year
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track_path: PathBuf::new(),
            breakpoints_path: PathBuf::new(),
            output_path: PathBuf::from("output.tsv"),
            year: 0,
            parallel_workers: DEFAULT_PARALLEL_WORKERS,
        }
    }
}
