//! HURDAT2 track parser
//!
//! This module parses the National Hurricane Center's HURDAT2 "best track"
//! text format into storms with ordered observations. The format is terse and
//! positionally encoded: comma-delimited lines where a line with exactly four
//! fields starts a new storm and every other line is a track observation
//! belonging to the most recently started storm.
//!
//! ## Architecture
//!
//! - [`parser`] - Line classification and parse orchestration
//! - [`field_parsers`] - Decoding of individual observation fields
//! - [`stats`] - Parse result and statistics structures
//!
//! Parsing is all-or-nothing: the first malformed line aborts the parse with
//! the offending line number, and no partial storm set is returned.

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::HurdatParser;
pub use stats::{ParseResult, ParseStats};
