use geo::Point as GeoPoint;
use serde::{Deserialize, Serialize};

/// A planar point with a caller-assigned identifier.
///
/// This is the unit every index implementation stores: an (x, y) coordinate
/// pair (typically longitude/latitude) plus a string id that must be unique
/// among currently-indexed points. The id is how callers address the point
/// later (removal, re-insertion); coordinates alone are never a key.
///
/// Coordinates are geographic by convention (x in [-180, 180], y in
/// [-90, 90]) but any finite values are accepted by the indexes.
///
/// # Examples
///
/// ```
/// use pointbox_types::point::Point;
///
/// let stop = Point::new(-73.9857, 40.7484, "stop-1042");
/// assert_eq!(stop.x(), -73.9857);
/// assert_eq!(stop.id(), "stop-1042");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The planar coordinate pair (longitude/latitude or x/y).
    pub point: GeoPoint<f64>,
    /// Caller-assigned identifier, unique per indexed point.
    pub id: String,
}

impl Point {
    /// Create a new point from x, y coordinates and an id.
    ///
    /// # Arguments
    ///
    /// * `x` - Longitude or x-coordinate
    /// * `y` - Latitude or y-coordinate
    /// * `id` - Unique identifier for this point
    ///
    /// # Examples
    ///
    /// ```
    /// use pointbox_types::point::Point;
    ///
    /// let point = Point::new(-74.0060, 40.7128, "nyc");
    /// ```
    pub fn new(x: f64, y: f64, id: impl Into<String>) -> Self {
        Self {
            point: GeoPoint::new(x, y),
            id: id.into(),
        }
    }

    /// Create a point from an existing `geo::Point` and an id.
    pub fn from_position(point: GeoPoint<f64>, id: impl Into<String>) -> Self {
        Self {
            point,
            id: id.into(),
        }
    }

    /// Get the x coordinate (longitude).
    pub fn x(&self) -> f64 {
        self.point.x()
    }

    /// Get the y coordinate (latitude).
    pub fn y(&self) -> f64 {
        self.point.y()
    }

    /// Get the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the underlying 2D position.
    pub fn position(&self) -> GeoPoint<f64> {
        self.point
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(-74.0, 40.7, "a");
        assert_eq!(p.x(), -74.0);
        assert_eq!(p.y(), 40.7);
        assert_eq!(p.id(), "a");
    }

    #[test]
    fn test_point_from_position() {
        let p = Point::from_position(GeoPoint::new(1.5, -2.5), "b");
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.5);
        assert_eq!(p.id(), "b");
    }

    #[test]
    fn test_point_finiteness() {
        assert!(Point::new(0.0, 0.0, "origin").is_finite());
        assert!(!Point::new(f64::NAN, 0.0, "bad-x").is_finite());
        assert!(!Point::new(0.0, f64::INFINITY, "bad-y").is_finite());
    }

    #[test]
    fn test_point_serde_roundtrip() {
        let p = Point::new(-74.0060, 40.7128, "nyc");
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
