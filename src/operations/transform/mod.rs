mod duplicate;
mod reverse;
mod rotate;

pub use duplicate::DuplicatePolygons;
pub use reverse::ReversePolygons;
pub use rotate::{RotatePolygons, RotationPivot};
