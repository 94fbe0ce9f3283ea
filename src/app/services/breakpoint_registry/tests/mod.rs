//! Shared fixtures for breakpoint registry tests

use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::models::{Breakpoint, GeoPoint};


/// Create a test breakpoint with standard metadata
pub fn create_test_breakpoint(name: &str, latitude: f64, longitude: f64) -> Breakpoint {
    Breakpoint {
        name: name.to_string(),
        state: "Baja California Sur".to_string(),
        country: "Mexico".to_string(),
        location: GeoPoint {
            latitude,
            longitude,
        },
    }
}

/// Write a breakpoint CSV container and return the handle keeping it alive
pub fn create_test_container(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

/// A small, valid container with mixed-case region names
pub const SAMPLE_CONTAINER: &str = "\
name,state,country,latitude,longitude
Cabo San Lucas,BAJA CALIFORNIA SUR,MEXICO,22.89,-109.91
Punta Eugenia,baja california,mexico,27.84,-115.08
San Diego,CALIFORNIA,UNITED STATES,32.71,-117.17
";
