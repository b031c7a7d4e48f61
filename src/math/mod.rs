mod vector_2d;

pub use vector_2d::{normalize_angle, PlanarVector};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
