use std::fmt;

use crate::math::{PlanarVector, Point2, Vector2};

/// A line segment running from `end1` to `end2`.
///
/// Zero-length segments are allowed; their direction is the zero vector and
/// they never produce an [`Intersection`](super::Intersection).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    end1: Point2,
    end2: Point2,
}

impl Segment {
    /// Creates a segment between two endpoints.
    #[must_use]
    pub fn new(end1: Point2, end2: Point2) -> Self {
        Self { end1, end2 }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Returns the start point.
    #[must_use]
    pub fn end1(&self) -> &Point2 {
        &self.end1
    }

    /// Returns the end point.
    #[must_use]
    pub fn end2(&self) -> &Point2 {
        &self.end2
    }

    /// Returns the vector from `end1` to `end2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end2 - self.end1
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the signed difference between this segment's direction angle
    /// and `other`'s.
    ///
    /// The result lies in `(-2π, 2π)` and is not normalized.
    #[must_use]
    pub fn angle_to(&self, other: &Segment) -> f64 {
        self.direction().polar_angle() - other.direction().polar_angle()
    }

    /// Returns the point at parameter `t`, where `0` is `end1` and `1` is `end2`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.end1 + self.direction() * t
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) -> ({},{})",
            self.end1.x, self.end1.y, self.end2.x, self.end2.y
        )
    }
}
