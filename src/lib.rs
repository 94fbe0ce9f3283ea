//! HURDAT Timeline Library
//!
//! A Rust library for locating HURDAT2 hurricane track observations against a
//! set of named coastal breakpoints.
//!
//! This library provides tools for:
//! - Parsing HURDAT2 storm-track files into storms with ordered observations
//! - Loading an immutable registry of named breakpoints with coordinates
//! - Computing great-circle distance, initial bearing, and compass direction
//! - Resolving the nearest breakpoint for every observation in parallel
//! - Writing a deterministically ordered tab-separated report

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod breakpoint_registry;
        pub mod geodesic;
        pub mod hurdat_parser;
        pub mod nearest;
        pub mod timeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Breakpoint, GeoPoint, Observation, OutputRow, Storm};
pub use config::Config;

/// Result type alias for timeline processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for HURDAT parsing and nearest-breakpoint resolution
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Track line fails structural decoding (field count, numeric fields)
    #[error("Malformed track data at line {line}: {message}")]
    MalformedTrackData { line: usize, message: String },

    /// Combined date/time fields do not form a valid UTC timestamp
    #[error("Invalid timestamp at line {line}: '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    /// Latitude field lacks an N/S hemisphere suffix or a numeric magnitude
    #[error("Invalid latitude at line {line}: '{value}'")]
    InvalidLatitude { line: usize, value: String },

    /// Longitude field lacks an E/W hemisphere suffix or a numeric magnitude
    #[error("Invalid longitude at line {line}: '{value}'")]
    InvalidLongitude { line: usize, value: String },

    /// Storm header identifier does not embed a 4-digit year at digits 5-8
    #[error("Invalid storm identifier at line {line}: '{id}'")]
    InvalidStormIdentifier { line: usize, id: String },

    /// Track observation line encountered before any storm header
    #[error("Track line {line} appears before any storm header")]
    NoActiveStorm { line: usize },

    /// Nearest-breakpoint query against an empty registry
    #[error("Breakpoint registry is empty; cannot resolve nearest breakpoint")]
    EmptyReferenceSet,

    /// Breakpoint container could not be loaded
    #[error("Failed to load breakpoints from '{path}': {message}")]
    BreakpointLoad {
        path: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed track data error
    pub fn malformed_track_data(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTrackData {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid latitude error
    pub fn invalid_latitude(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidLatitude {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid longitude error
    pub fn invalid_longitude(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidLongitude {
            line,
            value: value.into(),
        }
    }

    /// Create an invalid storm identifier error
    pub fn invalid_storm_identifier(line: usize, id: impl Into<String>) -> Self {
        Self::InvalidStormIdentifier {
            line,
            id: id.into(),
        }
    }

    /// Create a breakpoint load error
    pub fn breakpoint_load(
        path: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::BreakpointLoad {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
