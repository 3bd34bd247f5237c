mod create_polygon;
mod load_geometry;
mod load_polygon;

pub use create_polygon::{CreatePolygon, NEW_WALL_COLOR, NEW_WALL_TRANSLUCENT_ALPHA};
pub use load_geometry::{CreateGeometry, LoadGeometry};
pub use load_polygon::LoadPolygon;
