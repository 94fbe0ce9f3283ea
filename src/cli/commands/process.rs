//! Process command implementation
//!
//! Orchestrates the full workflow: load the breakpoint registry, parse the
//! HURDAT2 track file, resolve every observation of the selected season on
//! the worker pool, and write the sorted report. The report file is only
//! written after every observation has resolved, so a failed run leaves no
//! partial output behind.

use std::sync::Arc;
use std::time::Instant;

use indicatif::HumanDuration;
use tracing::{debug, info};

use super::shared::{ProcessingStats, create_progress_bar, setup_logging};
use crate::Result;
use crate::app::services::breakpoint_registry::BreakpointRegistry;
use crate::app::services::hurdat_parser::HurdatParser;
use crate::app::services::timeline::{TimelineProcessor, write_report};
use crate::cli::args::ProcessArgs;
use crate::config::Config;

/// Process command runner
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting HURDAT timeline processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = Config {
        track_path: args.track_path.clone(),
        breakpoints_path: args.breakpoints_path.clone(),
        output_path: args.output_path.clone(),
        year: args.year,
        parallel_workers: Config::resolve_workers(args.workers),
    };
    config.validate()?;

    // Load the breakpoint registry
    let registry = Arc::new(BreakpointRegistry::load(&config.breakpoints_path)?);
    info!("Loaded {} breakpoints", registry.len());

    // Parse the track file
    let parse_result = HurdatParser::new().parse_file(&config.track_path)?;
    let storms = parse_result.storms;

    // Resolve the selected season on the worker pool
    let year = config.year;
    let selected_observations: usize = storms
        .iter()
        .filter(|storm| storm.year == year)
        .map(|storm| storm.observations.len())
        .sum();

    let progress = if args.show_progress() && selected_observations > 0 {
        Some(create_progress_bar(
            selected_observations as u64,
            &format!("Resolving {} season observations...", year),
        ))
    } else {
        None
    };

    let processor = TimelineProcessor::new(registry.clone(), config.parallel_workers);
    let pipeline_result = processor
        .run(&storms, |storm| storm.year == year, progress.clone())
        .await?;

    if let Some(bar) = progress {
        bar.finish_with_message("Resolution complete");
    }

    // All tasks succeeded; the report can be written in one piece
    write_report(&config.output_path, &pipeline_result.rows)?;

    let stats = ProcessingStats {
        storms_parsed: parse_result.stats.storms_parsed,
        storms_selected: pipeline_result.stats.storms_selected,
        observations_resolved: pipeline_result.stats.observations_resolved,
        breakpoints_loaded: registry.len(),
        output_path: Some(config.output_path.clone()),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Processed {} of {} storms ({} observations) in {}",
        stats.storms_selected,
        stats.storms_parsed,
        stats.observations_resolved,
        HumanDuration(stats.processing_time)
    );
    info!("Report written to {}", config.output_path.display());

    Ok(stats)
}
