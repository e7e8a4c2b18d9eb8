//! Great-circle distance between two points.
//!
//! # Usage
//!
//! ```bash
//! checkin distance --from 53.3498,-6.2603 --to 53.3500,-6.2600
//!
//! # Compare against a radius other than CHECKIN_RADIUS_METERS
//! checkin distance --from 53.3498,-6.2603 --to 53.3500,-6.2600 --radius 25
//! ```

use marshal_checkin_core::geo::{Point, haversine_distance_meters};
use serde::Serialize;

use super::{CommandError, print_json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DistanceReport {
    from: Point,
    to: Point,
    distance_meters: f64,
    radius_meters: f64,
    within_radius: bool,
}

/// Print the distance between two points and whether it is within `radius_meters`.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn measure(from: Point, to: Point, radius_meters: f64) -> Result<(), CommandError> {
    let distance_meters = haversine_distance_meters(from, to);
    print_json(&DistanceReport {
        from,
        to,
        distance_meters,
        radius_meters,
        within_radius: distance_meters <= radius_meters,
    })
}

/// Parse a `lat,lon` pair.
///
/// # Errors
///
/// Returns a message if the value is not two comma-separated numbers.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'lat,lon', got '{value}'"))?;
    let latitude = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{}': {e}", lat.trim()))?;
    let longitude = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{}': {e}", lon.trim()))?;
    Ok(Point::new(latitude, longitude))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let point = parse_point("53.3498, -6.2603").unwrap();
        assert!((point.latitude - 53.3498).abs() < f64::EPSILON);
        assert!((point.longitude + 6.2603).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_point_errors() {
        assert!(parse_point("53.3498").is_err());
        assert!(parse_point("north,-6.2").is_err());
        assert!(parse_point("53.3,west").is_err());
    }
}
