//! Tests for HURDAT2 line classification and storm assembly

use chrono::{Datelike, Timelike};

use super::{sample_track, write_temp_file};
use crate::Error;
use crate::app::services::hurdat_parser::HurdatParser;

#[test]
fn test_parses_storms_and_observations_in_source_order() {
    let result = HurdatParser::new().parse_str(sample_track()).unwrap();

    assert_eq!(result.storms.len(), 2);
    assert_eq!(result.stats.storms_parsed, 2);
    assert_eq!(result.stats.observations_parsed, 5);

    let john = &result.storms[0];
    assert_eq!(john.storm_id, "EP142018");
    assert_eq!(john.name, "JOHN");
    assert_eq!(john.year, 2018);
    assert_eq!(john.observations.len(), 2);

    let lane = &result.storms[1];
    assert_eq!(lane.storm_id, "EP172018");
    assert_eq!(lane.name, "LANE");
    assert_eq!(lane.observations.len(), 3);

    // Insertion order is chronological order as given by the source
    assert!(lane.observations[0].date < lane.observations[1].date);
    assert!(lane.observations[1].date < lane.observations[2].date);
}

#[test]
fn test_observation_fields_decode() {
    let result = HurdatParser::new().parse_str(sample_track()).unwrap();
    let landfall = &result.storms[0].observations[1];

    assert_eq!(landfall.date.year(), 2018);
    assert_eq!(landfall.date.month(), 8);
    assert_eq!(landfall.date.day(), 6);
    assert_eq!(landfall.date.hour(), 0);
    assert_eq!(landfall.date.minute(), 0);
    assert_eq!(landfall.record_identifier, "L");
    assert_eq!(landfall.phase, "TS");
    assert!((landfall.location.latitude - 14.1).abs() < 1e-9);
    assert!((landfall.location.longitude - -106.4).abs() < 1e-9);
    assert_eq!(landfall.winds, 40);
    assert_eq!(landfall.pressure, Some(1003));
}

#[test]
fn test_blank_storm_name_normalizes_to_unnamed() {
    let content = "\
AL011949,,,
19490101, 0000,  , TS, 25.0N, 90.0W,  50, 1000,
";
    let result = HurdatParser::new().parse_str(content).unwrap();
    assert_eq!(result.storms[0].name, "UNNAMED");
    assert_eq!(result.storms[0].year, 1949);
}

#[test]
fn test_pressure_sentinel_becomes_none() {
    let result = HurdatParser::new().parse_str(sample_track()).unwrap();
    let hurricane = &result.storms[1].observations[2];
    assert_eq!(hurricane.pressure, None);
}

#[test]
fn test_track_line_before_any_header_fails() {
    let content = "20180815, 1200,  , TD, 11.9N, 137.6W,  30, 1007,\n";
    let result = HurdatParser::new().parse_str(content);
    assert!(matches!(result, Err(Error::NoActiveStorm { line: 1 })));
}

#[test]
fn test_header_without_embedded_year_fails() {
    let content = "EP17,              LANE,   1,\n";
    let result = HurdatParser::new().parse_str(content);
    assert!(matches!(
        result,
        Err(Error::InvalidStormIdentifier { line: 1, .. })
    ));
}

#[test]
fn test_invalid_month_fails_with_invalid_timestamp() {
    let content = "\
EP172018,              LANE,   1,
20181315, 1200,  , TD, 11.9N, 137.6W,  30, 1007,
";
    let result = HurdatParser::new().parse_str(content);
    assert!(matches!(result, Err(Error::InvalidTimestamp { line: 2, .. })));
}

#[test]
fn test_bad_hemisphere_suffixes_fail() {
    let bad_latitude = "\
EP172018,              LANE,   1,
20180815, 1200,  , TD, 11.9X, 137.6W,  30, 1007,
";
    assert!(matches!(
        HurdatParser::new().parse_str(bad_latitude),
        Err(Error::InvalidLatitude { line: 2, .. })
    ));

    let bad_longitude = "\
EP172018,              LANE,   1,
20180815, 1200,  , TD, 11.9N, 137.6S,  30, 1007,
";
    assert!(matches!(
        HurdatParser::new().parse_str(bad_longitude),
        Err(Error::InvalidLongitude { line: 2, .. })
    ));
}

#[test]
fn test_short_track_line_is_malformed() {
    let content = "\
EP172018,              LANE,   1,
20180815, 1200,  , TD, 11.9N,
";
    let result = HurdatParser::new().parse_str(content);
    assert!(matches!(
        result,
        Err(Error::MalformedTrackData { line: 2, .. })
    ));
}

#[test]
fn test_first_error_aborts_the_whole_parse() {
    // Valid first storm followed by a bad line: nothing is returned
    let content = "\
EP142018,              JOHN,   1,
20180805, 1200,  , TD, 13.5N, 105.2W,  30, 1006,
EP172018,              LANE,   1,
20180815, 1200,  , TD, 11.9N, 137.6W,  xx, 1007,
";
    let result = HurdatParser::new().parse_str(content);
    assert!(matches!(
        result,
        Err(Error::MalformedTrackData { line: 4, .. })
    ));
}

#[test]
fn test_parse_file_round_trip() {
    let file = write_temp_file(sample_track());
    let result = HurdatParser::new().parse_file(file.path()).unwrap();
    assert_eq!(result.storms.len(), 2);
    assert_eq!(result.stats.total_lines, 7);
}

#[test]
fn test_missing_file_reports_io_error() {
    let result =
        HurdatParser::new().parse_file(std::path::Path::new("/nonexistent/hurdat2.txt"));
    assert!(matches!(result, Err(Error::Io { .. })));
}
