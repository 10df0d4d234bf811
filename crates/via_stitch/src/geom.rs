//! Primitive geometry types in board-internal length units.
//!
//! Coordinates are integers (nanometres on a KiCad-style board). Floating
//! point only enters when a strategy needs sub-unit math; results are
//! quantized back with round-half-away-from-zero.
use glam::DVec2;

/// A point in board-internal length units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate in board units.
    pub x: i64,
    /// Y coordinate in board units.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The point as a double-precision vector for distance math.
    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }

    /// Squared Euclidean distance to `other` in board units.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        self.as_dvec2().distance_squared(other.as_dvec2())
    }

    /// Euclidean distance to `other` in board units.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// An inclusive coordinate range along one axis.
///
/// `max <= min` is a legal degenerate range: it spans nothing and every
/// strategy treats it as "no steps", never as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRange {
    /// Lower bound in board units.
    pub min: i64,
    /// Upper bound in board units.
    pub max: i64,
}

impl BoundingRange {
    /// Create a new range. The bounds are stored as given; inverted ranges
    /// are legal and behave like empty ones.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Signed extent of the range. Negative for inverted ranges.
    #[inline]
    pub fn span(&self) -> i64 {
        self.max - self.min
    }

    /// Whether the range spans nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }
}

impl From<(i64, i64)> for BoundingRange {
    fn from((min, max): (i64, i64)) -> Self {
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn point_equality_and_hashing_by_value() {
        let mut set = HashSet::new();
        set.insert(Point::new(3, -7));
        set.insert(Point::new(3, -7));
        set.insert(Point::new(-7, 3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Point::from((3, -7))));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
    }

    #[test]
    fn degenerate_and_inverted_ranges_are_empty() {
        assert!(BoundingRange::new(5, 5).is_empty());
        assert!(BoundingRange::new(10, 2).is_empty());
        assert!(!BoundingRange::new(0, 1).is_empty());
        assert_eq!(BoundingRange::new(10, 2).span(), -8);
    }
}
