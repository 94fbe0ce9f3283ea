//! Shared fixtures for HURDAT2 parser tests

use std::io::Write;

use tempfile::NamedTempFile;

mod parser_tests;

/// A small, valid HURDAT2 fragment: two storms from the 2018 NE Pacific
/// season with trailing commas as published
pub fn sample_track() -> &'static str {
    "\
EP142018,              JOHN,   2,
20180805, 1200,  , TD, 13.5N, 105.2W,  30, 1006,
20180806, 0000, L, TS, 14.1N, 106.4W,  40, 1003,
EP172018,              LANE,   3,
20180815, 1200,  , TD, 11.9N, 137.6W,  30, 1007,
20180816, 0000,  , TS, 12.3N, 139.5W,  35, 1004,
20180817, 0600,  , HU, 13.0N, 143.8W,  70,  -999,
"
}

/// Write content to a temp file and return the handle keeping it alive
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}
