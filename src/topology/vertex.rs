use super::ArenaId;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Slot of a vertex inside one arena.
    pub(crate) struct VertexKey;
}

/// Identifier of a vertex.
///
/// Unique across every polygon: the arena tag tells polygons apart, the key
/// finds the record inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) arena: ArenaId,
    pub(crate) key: VertexKey,
}

/// Data associated with a polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexData {
    /// The position of the vertex.
    pub point: Point2,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }
}
