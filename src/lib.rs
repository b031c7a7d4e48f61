pub mod combinatorics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod samples;

pub use error::{QuadfindError, Result};
pub use geometry::{Intersection, Segment};
pub use operations::{find_quadrilateral, FindQuadrilateral, FinderOptions, Quadrilateral};
