//! Error scoring for quadrilateral candidates.
//!
//! A candidate is four intersections in cyclic edge order. Its error grows as
//! corner angles drift from 90° and as edges cross through each other's span
//! instead of meeting near their ends.

use std::f64::consts::FRAC_PI_2;

use crate::geometry::Intersection;
use crate::math::{normalize_angle, PlanarVector, Point2};

/// The two components of a candidate's error. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorBreakdown {
    /// Sum of squared deviations of the corner angles from 90°.
    pub angle: f64,
    /// Sum of penalties for intersections lying strictly inside a segment.
    pub distance: f64,
}

impl ErrorBreakdown {
    /// Returns the combined error.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.angle + self.distance
    }
}

/// Scores four intersections given in cyclic edge order.
///
/// Intersections without a point yield NaN components; callers filter those
/// candidates out beforehand.
#[must_use]
pub fn score(intersections: &[Intersection; 4]) -> ErrorBreakdown {
    let distance = intersections
        .iter()
        .map(|i| distance_penalty(i.distance1()) + distance_penalty(i.distance2()))
        .sum();

    let corners: [Point2; 4] = std::array::from_fn(|i| intersections[i].point());
    let angle = (0..4)
        .map(|i| {
            let a = corner_angle(&corners[i], &corners[(i + 1) % 4], &corners[(i + 2) % 4]);
            (FRAC_PI_2 - a.abs()).powi(2)
        })
        .sum();

    ErrorBreakdown { angle, distance }
}

/// Penalty for an intersection at parameter `d` along a segment.
///
/// Zero at or beyond either endpoint, growing logarithmically as `d` moves
/// toward the middle of the span (peak `ln 2` at `d = 0.5`).
#[must_use]
pub fn distance_penalty(d: f64) -> f64 {
    if d > 0.0 && d < 1.0 {
        -(if d > 0.5 { 1.0 - d } else { d }).ln()
    } else {
        0.0
    }
}

/// Signed angle at `p2` between the rays towards `p1` and `p3`, in `(-π, π]`.
#[must_use]
pub fn corner_angle(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let v1 = p2 - p1;
    let v2 = p2 - p3;
    normalize_angle(v2.polar_angle() - v1.polar_angle())
}
