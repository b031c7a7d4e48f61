use std::f64::consts::{PI, TAU};

use super::Vector2;

/// Planar operations on [`Vector2`] that nalgebra only offers in 3D form.
///
/// Negation, addition, subtraction and scaling are nalgebra's own operators.
pub trait PlanarVector {
    /// Z component of the 3D cross product of `self` and `other`.
    fn cross_2d(&self, other: &Self) -> f64;

    /// Polar angle `atan2(y, x)`, in `(-π, π]`.
    ///
    /// The zero vector has angle `0`.
    fn polar_angle(&self) -> f64;
}

impl PlanarVector for Vector2 {
    fn cross_2d(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Brings an angle difference back into `(-π, π]` with at most one turn.
///
/// Inputs are expected to be differences of two polar angles, so a single
/// correction is always enough. NaN passes through.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    if angle < -PI {
        angle + TAU
    } else if angle > PI {
        angle - TAU
    } else {
        angle
    }
}
