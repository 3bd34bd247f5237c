//! Persisted geometry format.
//!
//! ```json
//! { "polygons": [{ "id": 3, "edges": [
//!     { "start": {"vector": [0, 0]}, "end": {"vector": [0, 1]},
//!       "material": {"color": [20, 20, 255, 1]}, "immaterial": false }
//! ] }] }
//! ```
//!
//! Ids are optional and assigned on load when missing. Vertex and edge ids
//! written by other tools are ignored; identity is rebuilt from positions.

use serde::{Deserialize, Serialize};

use crate::math::Point2;
use crate::topology::{Material, PolygonId};

/// Stored form of a whole geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredGeometry {
    #[serde(default)]
    pub polygons: Vec<StoredPolygon>,
}

/// Stored form of a polygon: its edges in cycle order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPolygon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PolygonId>,
    pub edges: Vec<StoredEdge>,
}

/// Stored form of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEdge {
    pub start: StoredVertex,
    pub end: StoredVertex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub immaterial: bool,
}

impl StoredEdge {
    /// Creates a plain edge between two positions.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            material: None,
            immaterial: false,
        }
    }
}

/// Stored form of a vertex position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredVertex {
    pub vector: [f64; 2],
}

impl StoredVertex {
    /// Returns the position as a point.
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.vector[0], self.vector[1])
    }
}

impl From<Point2> for StoredVertex {
    fn from(p: Point2) -> Self {
        Self { vector: [p.x, p.y] }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}
