//! Core HURDAT2 parser implementation
//!
//! Handles file reading, line classification, and assembly of the storm /
//! observation hierarchy. Lines are classified purely by field count: exactly
//! four fields is a storm header, anything else is a track observation
//! appended to the most recently started storm.

use std::path::Path;

use tracing::{debug, info};

use super::field_parsers::{
    parse_latitude, parse_longitude, parse_pressure, parse_storm_year, parse_timestamp, parse_wind,
};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{GeoPoint, Observation, Storm};
use crate::constants::{HEADER_FIELD_COUNT, MIN_OBSERVATION_FIELDS, UNNAMED_STORM};
use crate::{Error, Result};

/// HURDAT2 best-track parser
///
/// Stateless; one instance can parse any number of files. Parsing is
/// all-or-nothing: the first malformed line aborts with its line number.
#[derive(Debug, Default)]
pub struct HurdatParser;

impl HurdatParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a HURDAT2 file into storms with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing HURDAT2 file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        let result = self.parse_str(&content)?;

        info!(
            "Parsed {} storms with {} observations",
            result.stats.storms_parsed, result.stats.observations_parsed
        );

        Ok(result)
    }

    /// Parse HURDAT2 content from an in-memory string
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut storms: Vec<Storm> = Vec::new();
        let mut stats = ParseStats::new();

        for (index, record) in reader.records().enumerate() {
            let line = index + 1;
            let record = record.map_err(|e| {
                Error::malformed_track_data(line, format!("unreadable record: {}", e))
            })?;

            stats.total_lines += 1;

            if record.len() == HEADER_FIELD_COUNT {
                storms.push(self.parse_header(line, &record)?);
                stats.storms_parsed += 1;
            } else {
                let current = storms
                    .last_mut()
                    .ok_or(Error::NoActiveStorm { line })?;
                current
                    .observations
                    .push(self.parse_observation(line, &record)?);
                stats.observations_parsed += 1;
            }
        }

        debug!(
            "Classified {} lines: {} headers, {} observations",
            stats.total_lines, stats.storms_parsed, stats.observations_parsed
        );

        Ok(ParseResult { storms, stats })
    }

    /// Parse a four-field storm header line into a new, empty storm
    fn parse_header(&self, line: usize, record: &csv::StringRecord) -> Result<Storm> {
        let storm_id = record.get(0).unwrap_or_default().trim().to_string();
        let name = match record.get(1).unwrap_or_default().trim() {
            "" => UNNAMED_STORM.to_string(),
            name => name.to_string(),
        };
        let year = parse_storm_year(line, &storm_id)?;

        debug!("Storm header at line {}: {} ({})", line, storm_id, year);

        Ok(Storm {
            storm_id,
            name,
            year,
            observations: Vec::new(),
        })
    }

    /// Parse a track observation line
    fn parse_observation(&self, line: usize, record: &csv::StringRecord) -> Result<Observation> {
        if record.len() < MIN_OBSERVATION_FIELDS {
            return Err(Error::malformed_track_data(
                line,
                format!(
                    "expected at least {} fields in a track line, found {}",
                    MIN_OBSERVATION_FIELDS,
                    record.len()
                ),
            ));
        }

        let field = |i: usize| record.get(i).unwrap_or_default();

        let date = parse_timestamp(line, field(0), field(1))?;
        let latitude = parse_latitude(line, field(4))?;
        let longitude = parse_longitude(line, field(5))?;

        Ok(Observation {
            date,
            record_identifier: field(2).trim().to_string(),
            phase: field(3).trim().to_string(),
            location: GeoPoint {
                latitude,
                longitude,
            },
            winds: parse_wind(line, field(6))?,
            pressure: parse_pressure(line, field(7))?,
        })
    }
}
