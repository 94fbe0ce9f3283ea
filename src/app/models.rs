//! Data models for HURDAT timeline processing
//!
//! This module contains the core data structures for representing HURDAT2
//! storm tracks, named breakpoints, and resolved nearest-breakpoint rows.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::services::geodesic::Distance;

// =============================================================================
// Geographic Primitives
// =============================================================================

/// A WGS-84 geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub latitude: f64,

    /// Longitude in decimal degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point with range validation
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let point = Self {
            latitude,
            longitude,
        };
        point.validate()?;
        Ok(point)
    }

    /// Validate coordinate ranges
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.longitude
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

// =============================================================================
// Breakpoint Metadata
// =============================================================================

/// A named fixed geographic location used as a distance/direction anchor
///
/// Breakpoints are loaded once per run and never mutated; the registry that
/// owns them is shared read-only across all resolver workers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Breakpoint name (e.g., "Cabo San Lucas")
    pub name: String,

    /// Administrative region, title-cased
    pub state: String,

    /// Country, title-cased
    pub country: String,

    /// Breakpoint location in decimal degrees
    pub location: GeoPoint,
}

impl Breakpoint {
    /// Validate breakpoint data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Breakpoint name must not be empty".to_string(),
            ));
        }

        self.location.validate()
    }
}

// =============================================================================
// Storm Track Structures
// =============================================================================

/// One timestamped position/intensity record within a storm track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation time, UTC, minute precision
    pub date: DateTime<Utc>,

    /// Record identifier code distinguishing marked events such as landfall
    /// ("L") or genesis from ordinary track points (empty)
    pub record_identifier: String,

    /// Storm phase code (e.g., "TD", "TS", "HU", "EX")
    pub phase: String,

    /// Observed position
    pub location: GeoPoint,

    /// Maximum sustained wind in knots
    pub winds: i32,

    /// Central pressure in millibars; `None` when the source did not record it
    pub pressure: Option<i32>,
}

/// One storm with its chronologically ordered observations
///
/// A storm exclusively owns its observations; insertion order is the
/// chronological order given by the source and is never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storm {
    /// Source-assigned identifier (basin + number + year, e.g., "EP172018")
    pub storm_id: String,

    /// Display name, "UNNAMED" for storms that were never named
    pub name: String,

    /// Season year, derived from digits 5-8 of the identifier
    pub year: i32,

    /// Ordered track observations
    pub observations: Vec<Observation>,
}

// =============================================================================
// Resolution Results
// =============================================================================

/// The nearest breakpoint for one observation, with distance and direction
///
/// Borrows the winning breakpoint from the registry; constructed per
/// observation and projected into an [`OutputRow`] before the run completes.
#[derive(Debug, Clone)]
pub struct NearestBreakpoint<'a> {
    /// The closest breakpoint in the registry
    pub breakpoint: &'a Breakpoint,

    /// Great-circle distance from the breakpoint to the observation
    pub distance: Distance,

    /// 16-point compass direction from the breakpoint to the observation
    pub direction: &'static str,
}

/// One flattened report row, ready for serialization
///
/// Rows have no identity beyond their position in the sorted output sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub storm_id: String,
    pub storm_name: String,
    pub date: DateTime<Utc>,
    pub record_identifier: String,
    pub phase: String,
    pub latitude: f64,
    pub longitude: f64,
    pub winds: i32,
    pub pressure: Option<i32>,
    pub breakpoint_name: String,
    pub state: String,
    pub country: String,
    pub miles: f64,
    pub kilometers: f64,
    pub direction: &'static str,
}
