mod find;
mod options;
pub mod score;

pub use find::{find_quadrilateral, FindQuadrilateral, Quadrilateral};
pub use options::FinderOptions;
pub use score::ErrorBreakdown;
