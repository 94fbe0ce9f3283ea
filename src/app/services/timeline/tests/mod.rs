//! Shared fixtures for timeline pipeline tests

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::app::models::{Breakpoint, GeoPoint, Observation, Storm};
use crate::app::services::breakpoint_registry::BreakpointRegistry;


/// Create a test observation at a given day/hour of August 2018
pub fn create_observation(day: u32, hour: u32, latitude: f64, longitude: f64) -> Observation {
    Observation {
        date: Utc.with_ymd_and_hms(2018, 8, day, hour, 0, 0).unwrap(),
        record_identifier: String::new(),
        phase: "TS".to_string(),
        location: GeoPoint {
            latitude,
            longitude,
        },
        winds: 45,
        pressure: Some(1000),
    }
}

/// Create a test storm with the given identifier and observations
pub fn create_storm(storm_id: &str, name: &str, observations: Vec<Observation>) -> Storm {
    let year = storm_id[4..8].parse().unwrap();
    Storm {
        storm_id: storm_id.to_string(),
        name: name.to_string(),
        year,
        observations,
    }
}

/// A registry with three well-separated breakpoints
pub fn create_test_registry() -> Arc<BreakpointRegistry> {
    Arc::new(BreakpointRegistry::from_breakpoints(vec![
        Breakpoint {
            name: "Cabo San Lucas".to_string(),
            state: "Baja California Sur".to_string(),
            country: "Mexico".to_string(),
            location: GeoPoint {
                latitude: 22.89,
                longitude: -109.91,
            },
        },
        Breakpoint {
            name: "Punta Eugenia".to_string(),
            state: "Baja California".to_string(),
            country: "Mexico".to_string(),
            location: GeoPoint {
                latitude: 27.84,
                longitude: -115.08,
            },
        },
        Breakpoint {
            name: "San Diego".to_string(),
            state: "California".to_string(),
            country: "United States".to_string(),
            location: GeoPoint {
                latitude: 32.71,
                longitude: -117.17,
            },
        },
    ]))
}
