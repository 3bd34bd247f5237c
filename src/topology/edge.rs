use serde::{Deserialize, Serialize};

use super::vertex::VertexId;
use super::ArenaId;

slotmap::new_key_type! {
    /// Slot of an edge inside one arena.
    pub(crate) struct EdgeKey;
}

/// Identifier of an edge, unique across every polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) arena: ArenaId,
    pub(crate) key: EdgeKey,
}

/// RGBA color: red, green and blue in `0..=255`, alpha in `0..=1`.
pub type Color = [f64; 4];

/// Surface appearance of a wall edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    /// Texture reference resolved by the host's texture library.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

impl Material {
    /// Creates an untextured material.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    /// Returns `true` if the color is partially see-through.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.color[3] < 1.0
    }
}

/// Data associated with a polygon edge.
///
/// Start and end refer to vertices in the same polygon; consecutive edges of
/// a cycle share the vertex between them by id.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    pub material: Option<Material>,
    /// Rays and collisions pass through immaterial edges (doorways).
    pub immaterial: bool,
}

impl EdgeData {
    /// Creates a material-less, solid edge.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            material: None,
            immaterial: false,
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: Option<Material>) -> Self {
        self.material = material;
        self
    }

    /// An edge without material counts as opaque.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.material.as_ref().is_some_and(Material::is_translucent)
    }

    /// Copies material and passability onto a new edge between other vertices.
    #[must_use]
    pub fn derive(&self, start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            material: self.material.clone(),
            immaterial: self.immaterial,
        }
    }
}
