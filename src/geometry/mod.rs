mod intersection;
mod segment;

pub use intersection::Intersection;
pub use segment::Segment;
