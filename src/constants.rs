//! Application constants for the HURDAT timeline processor
//!
//! This module contains format sentinels, geodesic parameters, and default
//! values used throughout the library.

// =============================================================================
// HURDAT2 Format Constants
// =============================================================================

/// Field count that identifies a storm header line in HURDAT2
pub const HEADER_FIELD_COUNT: usize = 4;

/// Minimum field count for a usable track observation line
pub const MIN_OBSERVATION_FIELDS: usize = 8;

/// Sentinel written by HURDAT2 when central pressure was not recorded
pub const PRESSURE_MISSING_SENTINEL: i32 = -999;

/// Name assigned by the source to storms that were never named
pub const UNNAMED_STORM: &str = "UNNAMED";

// =============================================================================
// Geodesic Constants
// =============================================================================

/// Mean earth radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Statute miles per kilometer
pub const KM_TO_MILES: f64 = 0.621371;

/// The 16-point compass rose, clockwise from north
pub const COMPASS_POINTS: &[&str] = &[
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Angular width of one compass sector in degrees
pub const COMPASS_SECTOR_DEGREES: f64 = 360.0 / 16.0;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of parallel nearest-breakpoint workers
pub const DEFAULT_PARALLEL_WORKERS: usize = 4;

/// Timestamp format used in the report and for sorting
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Column headers of the tab-separated report, in output order
pub const REPORT_COLUMNS: &[&str] = &[
    "Storm",
    "Name",
    "Date",
    "Record Identifier",
    "Type",
    "Latitude",
    "Longitude",
    "Winds",
    "Pressure",
    "Breakpoint",
    "State",
    "Country",
    "Miles",
    "Kilometers",
    "Direction",
];
