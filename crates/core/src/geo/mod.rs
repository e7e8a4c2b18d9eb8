//! Geometry: distances, polygon containment and area assignment.

pub mod areas;
pub mod point;
pub mod polygon;

pub use areas::calculate_checkpoint_areas;
pub use point::{EARTH_RADIUS_METERS, Point, haversine_distance_meters, is_within_radius};
pub use polygon::{Polygon, PolygonError, point_in_polygon};
