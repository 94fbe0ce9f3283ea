//! Parse result and statistics structures for HURDAT2 processing

use crate::app::models::Storm;

/// Parsing result with storms and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Storms in source order, each holding its ordered observations
    pub storms: Vec<Storm>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of non-empty lines classified
    pub total_lines: usize,

    /// Number of storm headers parsed
    pub storms_parsed: usize,

    /// Number of track observations parsed
    pub observations_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Average number of observations per storm
    pub fn observations_per_storm(&self) -> f64 {
        if self.storms_parsed == 0 {
            0.0
        } else {
            self.observations_parsed as f64 / self.storms_parsed as f64
        }
    }
}
