use crate::point::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box with inclusive bounds.
///
/// Represents a rectangular query area defined by minimum and maximum
/// coordinates. The four fields are stored as given: a box with
/// `min_x > max_x` or `min_y > max_y` is representable and reported by
/// [`is_valid`](Self::is_valid), so callers that construct an inverted box
/// get a deterministic empty query result instead of a silently reordered
/// rectangle. Degenerate boxes (min equal to max on an axis) are valid and
/// denote a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum x coordinate
    pub min_x: f64,
    /// Minimum y coordinate
    pub min_y: f64,
    /// Maximum x coordinate
    pub max_x: f64,
    /// Maximum y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum longitude/x coordinate
    /// * `min_y` - Minimum latitude/y coordinate
    /// * `max_x` - Maximum longitude/x coordinate
    /// * `max_y` - Maximum latitude/y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use pointbox_types::bbox::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(-74.0, 40.7, -73.9, 40.8);
    /// assert!(bbox.is_valid());
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box from a `geo::Rect`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Convert into a `geo::Rect`.
    ///
    /// `geo::Rect` reorders its corners so that min <= max; call this only
    /// on boxes that are already [`is_valid`](Self::is_valid) if the
    /// distinction matters.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            geo::coord! { x: self.min_x, y: self.min_y },
            geo::coord! { x: self.max_x, y: self.max_y },
        )
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the area of the bounding box, in coordinate units squared.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Get the center of the bounding box as an (x, y) pair.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the box is well-formed: min <= max on both axes.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Whether all four bounds are finite (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Check if a coordinate pair is contained within this bounding box.
    ///
    /// Containment is inclusive on all four edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check if a point is contained within this bounding box.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.x(), point.y())
    }

    /// Check if this bounding box intersects with another.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max_x < other.min_x
            || self.min_x > other.max_x
            || self.max_y < other.min_y
            || self.min_y > other.max_y)
    }
}
