//! Field parsing utilities for HURDAT2 track records
//!
//! This module provides helper functions for decoding the positionally
//! encoded fields of a HURDAT2 observation line. Every helper takes the
//! source line number so failures point at the offending input.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::PRESSURE_MISSING_SENTINEL;
use crate::{Error, Result};

/// Parse the combined 8-digit date and 4-digit time fields into a UTC
/// timestamp with minute precision
pub fn parse_timestamp(line: usize, date: &str, time: &str) -> Result<DateTime<Utc>> {
    let date = date.trim();
    let time = time.trim();

    let invalid = || Error::invalid_timestamp(line, format!("{} {}", date, time));

    if date.len() != 8 || time.len() != 4 {
        return Err(invalid());
    }
    if !date.chars().all(|c| c.is_ascii_digit()) || !time.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = date[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = date[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = date[6..8].parse().map_err(|_| invalid())?;
    let hour: u32 = time[0..2].parse().map_err(|_| invalid())?;
    let minute: u32 = time[2..4].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(invalid)
}

/// Parse a hemisphere-suffixed latitude such as "25.0N" or "13.2S"
///
/// `N` gives a positive value, `S` negates the magnitude; the suffix is
/// case-insensitive. Any other suffix fails.
pub fn parse_latitude(line: usize, value: &str) -> Result<f64> {
    let value = value.trim();

    let (magnitude, suffix) = split_hemisphere(value)
        .ok_or_else(|| Error::invalid_latitude(line, value))?;

    let sign = match suffix {
        'N' => 1.0,
        'S' => -1.0,
        _ => return Err(Error::invalid_latitude(line, value)),
    };

    Ok(magnitude * sign)
}

/// Parse a hemisphere-suffixed longitude such as "114.2W" or "90.0E"
///
/// `E` gives a positive value, `W` negates the magnitude, matching the
/// convention of the published HURDAT2 files.
pub fn parse_longitude(line: usize, value: &str) -> Result<f64> {
    let value = value.trim();

    let (magnitude, suffix) = split_hemisphere(value)
        .ok_or_else(|| Error::invalid_longitude(line, value))?;

    let sign = match suffix {
        'E' => 1.0,
        'W' => -1.0,
        _ => return Err(Error::invalid_longitude(line, value)),
    };

    Ok(magnitude * sign)
}

/// Parse the sustained wind field (knots); no sentinel handling
pub fn parse_wind(line: usize, value: &str) -> Result<i32> {
    let value = value.trim();
    value.parse::<i32>().map_err(|_| {
        Error::malformed_track_data(line, format!("invalid wind speed '{}'", value))
    })
}

/// Parse the central pressure field (millibars)
///
/// The source writes `-999` when pressure was not recorded; that sentinel is
/// translated to `None` here and never propagated downstream.
pub fn parse_pressure(line: usize, value: &str) -> Result<Option<i32>> {
    let value = value.trim();
    let pressure = value.parse::<i32>().map_err(|_| {
        Error::malformed_track_data(line, format!("invalid pressure '{}'", value))
    })?;

    if pressure == PRESSURE_MISSING_SENTINEL {
        Ok(None)
    } else {
        Ok(Some(pressure))
    }
}

/// Parse the 4-digit season year embedded at digits 5-8 of a storm
/// identifier such as "EP172018"
pub fn parse_storm_year(line: usize, storm_id: &str) -> Result<i32> {
    let storm_id = storm_id.trim();

    storm_id
        .get(4..8)
        .and_then(|digits| digits.parse::<i32>().ok())
        .ok_or_else(|| Error::invalid_storm_identifier(line, storm_id))
}

/// Split a coordinate field into numeric magnitude and uppercased hemisphere
/// suffix; returns `None` when either part is missing or non-numeric
fn split_hemisphere(value: &str) -> Option<(f64, char)> {
    let last = value.chars().last()?;
    let magnitude: f64 = value[..value.len() - last.len_utf8()].trim().parse().ok()?;
    Some((magnitude, last.to_ascii_uppercase()))
}
