//! Great-circle distance, initial bearing, and compass direction
//!
//! Pure, stateless functions over pairs of geographic points. Distances use
//! the haversine formula on a sphere with the IUGG mean earth radius; this is
//! accurate to a few tenths of a percent, which is well inside the rounding
//! applied to the report's integer mile/kilometer columns.

use crate::app::models::GeoPoint;
use crate::constants::{COMPASS_POINTS, COMPASS_SECTOR_DEGREES, EARTH_RADIUS_KM, KM_TO_MILES};

/// A great-circle distance, convertible to kilometers or statute miles
///
/// Both unit views derive from one underlying computation, so they are always
/// consistent to rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance {
    kilometers: f64,
}

impl Distance {
    /// Construct from kilometers
    pub fn from_km(kilometers: f64) -> Self {
        Self { kilometers }
    }

    /// Distance in kilometers
    pub fn km(&self) -> f64 {
        self.kilometers
    }

    /// Distance in statute miles
    pub fn miles(&self) -> f64 {
        self.kilometers * KM_TO_MILES
    }
}

/// Haversine great-circle distance between two points
pub fn distance(a: GeoPoint, b: GeoPoint) -> Distance {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Distance::from_km(EARTH_RADIUS_KM * c)
}

/// Initial bearing (forward azimuth) from `a` to `b`, in degrees [0, 360)
///
/// Coincident points yield 0.0 (atan2(0, 0) is defined as 0), so callers
/// never see NaN.
pub fn initial_bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    x.atan2(y).to_degrees().rem_euclid(360.0)
}

/// Map a bearing in degrees to one of the 16 compass point labels
///
/// Sectors are 22.5 degrees wide and centered on each label. The sector index
/// rounds half away from zero, so a bearing exactly on a sector boundary
/// (e.g., 11.25) resolves to the clockwise label.
pub fn bearing_to_compass(bearing: f64) -> &'static str {
    let normalized = bearing.rem_euclid(360.0);
    let index = (normalized / COMPASS_SECTOR_DEGREES).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = point(22.9, -109.9);
        assert_eq!(distance(a, a).km(), 0.0);
        assert_eq!(distance(a, a).miles(), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = point(25.0, -90.0);
        let b = point(31.5, -117.2);
        let forward = distance(a, b).km();
        let backward = distance(b, a).km();
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_of_longitude_at_25_north() {
        // Reference pair from the HURDAT2 Gulf of Mexico basin
        let breakpoint = point(25.0, -89.0);
        let observation = point(25.0, -90.0);
        let d = distance(breakpoint, observation);
        assert!((d.km() - 100.78).abs() < 0.5, "got {} km", d.km());
        assert!((d.miles() - 62.62).abs() < 0.5, "got {} mi", d.miles());
    }

    #[test]
    fn test_unit_views_are_consistent() {
        let d = Distance::from_km(100.0);
        assert!((d.miles() - 62.1371).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_due_north_and_east() {
        let origin = point(0.0, 0.0);
        assert!((initial_bearing(origin, point(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(origin, point(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(origin, point(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(origin, point(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_of_coincident_points_is_deterministic() {
        let a = point(22.9, -109.9);
        assert_eq!(initial_bearing(a, a), 0.0);
    }

    #[test]
    fn test_compass_cardinal_points() {
        assert_eq!(bearing_to_compass(0.0), "N");
        assert_eq!(bearing_to_compass(90.0), "E");
        assert_eq!(bearing_to_compass(180.0), "S");
        assert_eq!(bearing_to_compass(270.0), "W");
    }

    #[test]
    fn test_compass_wraps_full_turns() {
        assert_eq!(bearing_to_compass(360.0), "N");
        assert_eq!(bearing_to_compass(450.0), "E");
        assert_eq!(bearing_to_compass(810.0), "E");
        assert_eq!(bearing_to_compass(-90.0), "W");
    }

    #[test]
    fn test_compass_sector_boundaries_round_clockwise() {
        // 11.25 sits exactly between N and NNE; half-away-from-zero picks NNE
        assert_eq!(bearing_to_compass(11.25), "NNE");
        assert_eq!(bearing_to_compass(11.24), "N");
        assert_eq!(bearing_to_compass(348.74), "NNW");
        assert_eq!(bearing_to_compass(348.76), "N");
    }

    #[test]
    fn test_compass_intercardinal_points() {
        assert_eq!(bearing_to_compass(45.0), "NE");
        assert_eq!(bearing_to_compass(135.0), "SE");
        assert_eq!(bearing_to_compass(225.0), "SW");
        assert_eq!(bearing_to_compass(315.0), "NW");
    }
}
