//! Timeline aggregation pipeline
//!
//! Flattens parsed storms into independent (storm, observation) tasks,
//! resolves the nearest breakpoint for each task on a bounded worker pool,
//! and restores a deterministic, storm-grouped chronological order before the
//! report is written.
//!
//! ## Architecture
//!
//! - [`pipeline`] - Task flattening, worker pool, collection, and sorting
//! - [`report`] - Tab-separated report rendering and writing
//!
//! Concurrency never affects output order: results are collected in whatever
//! order workers finish and then sorted by (storm identifier, timestamp).

pub mod pipeline;
pub mod report;

#[cfg(test)]
pub mod tests;

pub use pipeline::{PipelineResult, PipelineStats, TimelineProcessor};
pub use report::{render_report, write_report};
