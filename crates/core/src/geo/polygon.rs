//! Area boundary polygons.
//!
//! Polygons are stored in the areas table as a JSON array of
//! `{"latitude": .., "longitude": ..}` objects. Parsing happens here and only
//! here; everything else works with [`Polygon`] values.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Errors that can occur when decoding a stored polygon.
#[derive(thiserror::Error, Debug)]
pub enum PolygonError {
    /// The stored text is not a JSON array of points.
    #[error("invalid polygon JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A closed ring of vertices.
///
/// Closure is implicit: the last vertex connects back to the first, and the
/// first vertex does not need to be repeated. Rings with fewer than three
/// vertices are degenerate and contain no points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Minimum vertex count for a ring to enclose any area.
    pub const MIN_VERTICES: usize = 3;

    #[must_use]
    pub const fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the ring has too few vertices to contain anything.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < Self::MIN_VERTICES
    }

    /// Ray-casting containment test. See [`point_in_polygon`].
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Decode a stored polygon.
    ///
    /// Blank text is an empty polygon (rows created before the area was
    /// drawn have no value).
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::Json`] if the text is not a JSON array of
    /// `{latitude, longitude}` objects.
    pub fn parse_json(json: &str) -> Result<Self, PolygonError> {
        if json.trim().is_empty() {
            return Ok(Self::empty());
        }
        let vertices: Vec<Point> = serde_json::from_str(json)?;
        Ok(Self { vertices })
    }

    /// Decode a stored polygon, treating anything unparseable as empty.
    #[must_use]
    pub fn from_json_lossy(json: &str) -> Self {
        Self::parse_json(json).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unparseable polygon");
            Self::empty()
        })
    }

    /// Encode for storage.
    #[must_use]
    pub fn to_json(&self) -> String {
        // A Vec of two-f64 structs always serializes
        serde_json::to_string(&self.vertices).unwrap_or_else(|_| "[]".to_string())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

/// Whether `point` lies inside the ring described by `vertices`.
///
/// Casts a ray from `point` towards increasing longitude and counts edge
/// crossings; an odd count means inside. Edges use half-open latitude
/// inclusion so a ray passing exactly through a vertex is counted once.
/// Fewer than three vertices always yields `false`.
#[must_use]
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < Polygon::MIN_VERTICES {
        return false;
    }
    let Some(mut prev) = vertices.last() else {
        return false;
    };

    let mut inside = false;
    for cur in vertices {
        if (cur.latitude > point.latitude) != (prev.latitude > point.latitude) {
            let crossing_lon = (prev.longitude - cur.longitude) * (point.latitude - cur.latitude)
                / (prev.latitude - cur.latitude)
                + cur.longitude;
            if point.longitude < crossing_lon {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Polygon {
        coords
            .iter()
            .map(|&(lat, lon)| Point::new(lat, lon))
            .collect()
    }

    fn square() -> Polygon {
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    #[test]
    fn test_square_contains_center() {
        assert!(square().contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_square_excludes_outside_points() {
        let sq = square();
        for (lat, lon) in [(15.0, 15.0), (15.0, 5.0), (-5.0, 5.0), (5.0, -5.0), (5.0, 15.0)] {
            assert!(!sq.contains(Point::new(lat, lon)), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_l_shape_excludes_notch() {
        let l = ring(&[
            (0.0, 0.0),
            (0.0, 5.0),
            (5.0, 5.0),
            (5.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ]);
        assert!(l.contains(Point::new(2.0, 2.0)));
        assert!(!l.contains(Point::new(2.0, 7.0)));
        assert!(l.contains(Point::new(7.0, 7.0)));
    }

    #[test]
    fn test_degenerate_rings_contain_nothing() {
        let single = ring(&[(1.0, 1.0)]);
        let edge = ring(&[(0.0, 0.0), (10.0, 10.0)]);
        for poly in [Polygon::empty(), single, edge] {
            assert!(poly.is_degenerate());
            for v in poly.vertices() {
                assert!(!poly.contains(*v));
            }
            assert!(!poly.contains(Point::new(5.0, 5.0)));
        }
    }

    #[test]
    fn test_negative_coordinates() {
        // A box around Buenos Aires
        let poly = ring(&[
            (-34.70, -58.55),
            (-34.70, -58.30),
            (-34.50, -58.30),
            (-34.50, -58.55),
        ]);
        assert!(poly.contains(Point::new(-34.60, -58.38)));
        assert!(!poly.contains(Point::new(34.60, 58.38)));
    }

    #[test]
    fn test_explicitly_closed_ring() {
        let closed = ring(&[
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
            (0.0, 0.0),
        ]);
        assert!(closed.contains(Point::new(5.0, 5.0)));
        assert!(!closed.contains(Point::new(5.0, 11.0)));
    }

    #[test]
    fn test_ray_through_vertex_counted_once() {
        // Diamond: a ray from the centre passes exactly through the east vertex
        let diamond = ring(&[(0.0, 5.0), (5.0, 10.0), (10.0, 5.0), (5.0, 0.0)]);
        assert!(diamond.contains(Point::new(5.0, 5.0)));
        assert!(!diamond.contains(Point::new(5.0, -1.0)));
    }

    #[test]
    fn test_parse_json() {
        let poly = Polygon::parse_json(
            r#"[{"latitude":0,"longitude":0},{"latitude":0,"longitude":10},{"latitude":10,"longitude":10}]"#,
        )
        .unwrap();
        assert_eq!(poly.vertices().len(), 3);
        assert_eq!(poly.vertices().first(), Some(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_parse_json_empty_forms() {
        assert!(Polygon::parse_json("[]").unwrap().is_empty());
        assert!(Polygon::parse_json("").unwrap().is_empty());
        assert!(Polygon::parse_json("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        assert!(matches!(
            Polygon::parse_json("not json"),
            Err(PolygonError::Json(_))
        ));
        assert!(Polygon::parse_json(r#"[{"lat":1,"lng":2}]"#).is_err());
    }

    #[test]
    fn test_from_json_lossy_never_fails() {
        assert!(Polygon::from_json_lossy("{broken").is_empty());
        assert!(Polygon::from_json_lossy("null").is_empty());
    }

    #[test]
    fn test_to_json_is_storage_format() {
        let poly = ring(&[(1.5, 2.0)]);
        assert_eq!(poly.to_json(), r#"[{"latitude":1.5,"longitude":2.0}]"#);
        assert_eq!(Polygon::parse_json(&poly.to_json()).unwrap(), poly);
    }
}
