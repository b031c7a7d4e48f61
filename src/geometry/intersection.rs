use std::fmt;

use super::Segment;
use crate::math::{PlanarVector, Point2};

/// Intersection of the infinite lines through two segments.
///
/// `distance1` and `distance2` locate the point along each segment's
/// parametrization (`0` at `end1`, `1` at `end2`). Values outside `[0, 1]`
/// mean the lines meet beyond that segment's span.
///
/// When the lines are parallel (or either segment has zero length) there is
/// no intersection: [`has_intersection`](Self::has_intersection) is `false`
/// and the point and both distances are NaN.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    line1: Segment,
    line2: Segment,
    point: Point2,
    distance1: f64,
    distance2: f64,
    has_intersection: bool,
}

impl Intersection {
    /// Intersects the lines through `line1` and `line2`.
    ///
    /// Lines count as parallel only when the cross product of their
    /// directions is exactly zero.
    #[must_use]
    pub fn new(line1: Segment, line2: Segment) -> Self {
        Self::with_tolerance(line1, line2, 0.0)
    }

    /// Intersects the lines through `line1` and `line2`, treating them as
    /// parallel when `|r × s| <= tolerance`.
    ///
    /// A NaN cross product is never parallel, so non-finite input yields a
    /// non-finite intersection rather than none.
    #[must_use]
    pub fn with_tolerance(line1: Segment, line2: Segment, tolerance: f64) -> Self {
        let p = *line1.end1();
        let q = *line2.end1();
        let r = line1.direction();
        let s = line2.direction();

        let denom = r.cross_2d(&s);
        if denom.abs() <= tolerance {
            return Self {
                line1,
                line2,
                point: Point2::new(f64::NAN, f64::NAN),
                distance1: f64::NAN,
                distance2: f64::NAN,
                has_intersection: false,
            };
        }

        let qp = q - p;
        let t = qp.cross_2d(&s) / denom;
        let u = qp.cross_2d(&r) / denom;

        Self {
            line1,
            line2,
            point: p + r * t,
            distance1: t,
            distance2: u,
            has_intersection: true,
        }
    }

    /// Returns the first source segment.
    #[must_use]
    pub fn line1(&self) -> &Segment {
        &self.line1
    }

    /// Returns the second source segment.
    #[must_use]
    pub fn line2(&self) -> &Segment {
        &self.line2
    }

    /// Returns the intersection point (NaN coordinates when there is none).
    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    /// Parameter of the intersection along `line1`.
    #[must_use]
    pub fn distance1(&self) -> f64 {
        self.distance1
    }

    /// Parameter of the intersection along `line2`.
    #[must_use]
    pub fn distance2(&self) -> f64 {
        self.distance2
    }

    /// Returns whether the two lines meet at a single point.
    #[must_use]
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_intersection {
            write!(
                f,
                "{},{} (t1={}, t2={})",
                self.point.x, self.point.y, self.distance1, self.distance2
            )
        } else {
            write!(f, "parallel: {} | {}", self.line1, self.line2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn perpendicular_lines_meet_at_corner() {
        let bottom = Segment::from_coords(1.0, 0.0, 9.0, 0.0);
        let right = Segment::from_coords(10.0, 1.0, 10.0, 9.0);
        let hit = Intersection::new(bottom, right);
        assert!(hit.has_intersection());
        assert!((hit.point().x - 10.0).abs() < EPS);
        assert!(hit.point().y.abs() < EPS);
        assert!((hit.distance1() - 1.125).abs() < EPS);
        assert!((hit.distance2() + 0.125).abs() < EPS);
    }

    #[test]
    fn crossing_segments_report_interior_distances() {
        let a = Segment::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment::from_coords(0.0, 2.0, 2.0, 0.0);
        let hit = Intersection::new(a, b);
        assert!(hit.has_intersection());
        assert!((hit.point() - Point2::new(1.0, 1.0)).norm() < EPS);
        assert!((hit.distance1() - 0.5).abs() < EPS);
        assert!((hit.distance2() - 0.5).abs() < EPS);
    }

    #[test]
    fn point_matches_both_parametrizations() {
        let a = Segment::from_coords(3.0, -1.0, 7.0, 4.0);
        let b = Segment::from_coords(-2.0, 5.0, 1.0, 2.5);
        let hit = Intersection::new(a, b);
        assert!((a.point_at(hit.distance1()) - hit.point()).norm() < 1e-9);
        assert!((b.point_at(hit.distance2()) - hit.point()).norm() < 1e-9);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment::from_coords(0.0, 1.0, 5.0, 1.0);
        let hit = Intersection::new(a, b);
        assert!(!hit.has_intersection());
        assert!(hit.distance1().is_nan());
        assert!(hit.distance2().is_nan());
        assert!(hit.point().x.is_nan());
    }

    #[test]
    fn anti_parallel_lines_have_no_intersection() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Segment::from_coords(5.0, 3.0, 2.0, 0.0);
        assert!(!Intersection::new(a, b).has_intersection());
    }

    #[test]
    fn zero_length_segment_has_no_intersection() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let dot = Segment::from_coords(3.0, 3.0, 3.0, 3.0);
        assert!(!Intersection::new(a, dot).has_intersection());
        assert!(!Intersection::new(dot, a).has_intersection());
    }

    #[test]
    fn near_parallel_lines_still_intersect_without_tolerance() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment::from_coords(0.0, 1.0, 1.0, 1.0 + 1e-12);
        assert!(Intersection::new(a, b).has_intersection());
        assert!(!Intersection::with_tolerance(a, b, 1e-9).has_intersection());
    }

    #[test]
    fn swapping_segments_swaps_distances() {
        let a = Segment::from_coords(0.0, 0.0, 4.0, 1.0);
        let b = Segment::from_coords(1.0, 3.0, 2.0, -2.0);
        let ab = Intersection::new(a, b);
        let ba = Intersection::new(b, a);
        assert!((ab.point() - ba.point()).norm() < 1e-9);
        assert!((ab.distance1() - ba.distance2()).abs() < 1e-12);
        assert!((ab.distance2() - ba.distance1()).abs() < 1e-12);
        assert_eq!(ab.line1(), ba.line2());
    }

    #[test]
    fn nan_input_propagates() {
        let a = Segment::from_coords(f64::NAN, 0.0, 1.0, 0.0);
        let b = Segment::from_coords(0.0, 0.0, 0.0, 1.0);
        let hit = Intersection::new(a, b);
        assert!(hit.has_intersection());
        assert!(hit.point().x.is_nan());
    }
}
