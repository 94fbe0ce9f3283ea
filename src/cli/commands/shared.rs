//! Shared components for CLI commands
//!
//! Common types and utilities used across command implementations: the
//! processing summary, logging setup, and progress bar styling.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::Result;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Storms parsed from the track file
    pub storms_parsed: usize,
    /// Storms matching the season selection
    pub storms_selected: usize,
    /// Observations resolved against the registry
    pub observations_resolved: usize,
    /// Breakpoints loaded into the registry
    pub breakpoints_loaded: usize,
    /// Path the report was written to, when one was produced
    pub output_path: Option<PathBuf>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging for a command
///
/// `RUST_LOG` takes precedence when set; otherwise the level derived from the
/// command's verbosity flags applies to this crate only.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat_timeline={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a styled progress bar for the resolution phase
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
