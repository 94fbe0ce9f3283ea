//! Breakpoints command implementation
//!
//! Loads the breakpoint registry and prints its contents, optionally
//! filtered by a name pattern. Useful for checking a container before a
//! processing run.

use std::time::Instant;

use tracing::{debug, info};

use super::shared::{ProcessingStats, setup_logging};
use crate::Result;
use crate::app::services::breakpoint_registry::BreakpointRegistry;
use crate::cli::args::BreakpointsArgs;

/// Breakpoints command runner
pub async fn run_breakpoints(args: BreakpointsArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Inspecting breakpoint registry");
    debug!("Breakpoints arguments: {:?}", args);

    let registry = BreakpointRegistry::load(&args.breakpoints_path)?;
    info!(
        "Loaded {} breakpoints from {}",
        registry.len(),
        args.breakpoints_path.display()
    );

    let listed: Vec<_> = match &args.name {
        Some(pattern) => registry.find_by_name(pattern),
        None => registry.iter().collect(),
    };

    println!("{:<30} {:<25} {:<15} {:>9} {:>10}", "Name", "State", "Country", "Latitude", "Longitude");
    for breakpoint in &listed {
        println!(
            "{:<30} {:<25} {:<15} {:>9.4} {:>10.4}",
            breakpoint.name,
            breakpoint.state,
            breakpoint.country,
            breakpoint.location.latitude,
            breakpoint.location.longitude
        );
    }
    println!("\n{} of {} breakpoints listed", listed.len(), registry.len());

    Ok(ProcessingStats {
        breakpoints_loaded: registry.len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}
