//! Geographic points and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for all distance calculations.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A position in decimal degrees.
///
/// No range validation happens here; coordinates are plain reals. Serialized
/// as `{"latitude": .., "longitude": ..}`, which is also the polygon vertex
/// format in the areas table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters.
    #[must_use]
    pub fn distance_meters(&self, other: &Self) -> f64 {
        haversine_distance_meters(*self, *other)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Haversine distance between two points in meters.
///
/// The haversine term is clamped to `[0, 1]` so rounding can never push
/// `asin` out of its domain; identical points give exactly `0.0`.
#[must_use]
pub fn haversine_distance_meters(a: Point, b: Point) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_METERS * c
}

/// True iff `a` and `b` are at most `radius_meters` apart.
#[must_use]
pub fn is_within_radius(a: Point, b: Point, radius_meters: f64) -> bool {
    haversine_distance_meters(a, b) <= radius_meters
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const LONDON: Point = Point::new(51.5074, -0.1278);
    const NEW_YORK: Point = Point::new(40.7128, -74.0060);

    #[test]
    fn test_identical_points_are_zero_apart() {
        for p in [LONDON, NEW_YORK, Point::new(0.0, 0.0), Point::new(-33.86, 151.21)] {
            let d = haversine_distance_meters(p, p);
            assert!(!d.is_nan());
            assert_eq!(d, 0.0);
        }
    }

    #[test]
    fn test_known_distance_london_new_york() {
        let d = haversine_distance_meters(LONDON, NEW_YORK);
        // ~5570 km
        assert!((d - 5_570_000.0).abs() < 15_000.0, "got {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = haversine_distance_meters(LONDON, NEW_YORK);
        let b = haversine_distance_meters(NEW_YORK, LONDON);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_within_radius_close_points() {
        // ~13 m apart
        let nearby = Point::new(51.5075, -0.1279);
        assert!(is_within_radius(LONDON, nearby, 50.0));
        assert!(!is_within_radius(LONDON, nearby, 5.0));
    }

    #[test]
    fn test_within_radius_far_points() {
        assert!(!is_within_radius(LONDON, NEW_YORK, 1000.0));
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let d = haversine_distance_meters(Point::new(0.0, 0.0), Point::new(0.0, 180.0));
        assert!(!d.is_nan());
        assert!((d - EARTH_RADIUS_METERS * std::f64::consts::PI).abs() < 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.25).to_string(), "(1.5, -2.25)");
    }
}
