mod adapt;
mod add_polygon;
mod expand_polygon;
mod move_vertices;
mod remove_vertex;
mod split_edge;
mod transform_edges;

pub use adapt::adapt_polygons;
pub use add_polygon::AddPolygon;
pub use expand_polygon::ExpandPolygon;
pub use move_vertices::MoveVertices;
pub use remove_vertex::RemoveVertex;
pub use split_edge::SplitEdge;
pub use transform_edges::TransformEdges;
