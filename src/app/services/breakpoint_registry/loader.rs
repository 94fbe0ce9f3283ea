//! Breakpoint container loading
//!
//! Loads breakpoints from a CSV export of the published breakpoint dataset
//! with columns `name,state,country,latitude,longitude` (decimal degrees).
//! State and country are title-cased during load so downstream report rows
//! never have to normalize them.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::app::models::{Breakpoint, GeoPoint};
use crate::{Error, Result};

/// Raw CSV row as it appears in the container
#[derive(Debug, Deserialize)]
struct BreakpointRecord {
    name: String,
    state: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

/// Load and normalize all breakpoints from a CSV container
pub fn load_breakpoints(path: &Path) -> Result<Vec<Breakpoint>> {
    info!("Loading breakpoints from: {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| {
            Error::breakpoint_load(
                path.display().to_string(),
                "failed to open breakpoint container",
                Some(e),
            )
        })?;

    let mut breakpoints = Vec::new();

    for (row, record) in reader.deserialize::<BreakpointRecord>().enumerate() {
        let record = record.map_err(|e| {
            Error::breakpoint_load(
                path.display().to_string(),
                format!("failed to decode breakpoint record {}", row + 1),
                Some(e),
            )
        })?;

        let breakpoint = Breakpoint {
            name: record.name.trim().to_string(),
            state: title_case(record.state.trim()),
            country: title_case(record.country.trim()),
            location: GeoPoint {
                latitude: record.latitude,
                longitude: record.longitude,
            },
        };

        breakpoint.validate()?;
        breakpoints.push(breakpoint);
    }

    debug!("Loaded {} breakpoints", breakpoints.len());
    Ok(breakpoints)
}

/// Title-case a value from the container (e.g., "BAJA CALIFORNIA" ->
/// "Baja California")
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
