pub mod edge;
pub mod geometry;
pub mod polygon;
pub mod vertex;

pub use edge::{Color, EdgeData, EdgeId, Material};
pub use geometry::Geometry;
pub use polygon::{Polygon, PolygonId};
pub use vertex::{VertexData, VertexId};

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TopologyError;
use crate::math::{Point2, Segment, Vector2};
use edge::EdgeKey;
use slotmap::SlotMap;
use vertex::VertexKey;

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique tag of a [`CycleStore`], carried by every id it hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    fn fresh() -> Self {
        Self(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Arena that owns the vertices and edges of one polygon.
///
/// Edges reference vertices via typed IDs (generational indices), so a
/// vertex shared by two edges is a single record that moves once. The
/// `cycle` lists the edges in traversal order. Ids carry the arena's tag, so
/// an id handed out by another arena is never found here.
#[derive(Debug, Clone)]
pub struct CycleStore {
    arena: ArenaId,
    vertices: SlotMap<VertexKey, VertexData>,
    edges: SlotMap<EdgeKey, EdgeData>,
    cycle: Vec<EdgeId>,
}

impl Default for CycleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleStore {
    /// Creates a new, empty store with its own arena tag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: ArenaId::fresh(),
            vertices: SlotMap::with_key(),
            edges: SlotMap::with_key(),
            cycle: Vec::new(),
        }
    }

    /// The tag shared by every id of this store.
    #[must_use]
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// Moves the store to a fresh arena tag, rewriting every id it holds.
    ///
    /// A copied polygon calls this so that none of its vertex or edge ids
    /// collide with the original's. References to other arenas stay foreign.
    pub fn reassign_ids(&mut self) {
        let old = self.arena;
        let new = ArenaId::fresh();
        let retag_vertex = |id: &mut VertexId| {
            if id.arena == old {
                id.arena = new;
            }
        };
        for edge in self.edges.values_mut() {
            retag_vertex(&mut edge.start);
            retag_vertex(&mut edge.end);
        }
        for id in &mut self.cycle {
            if id.arena == old {
                id.arena = new;
            }
        }
        self.arena = new;
    }

    fn vertex_id(&self, key: VertexKey) -> VertexId {
        VertexId {
            arena: self.arena,
            key,
        }
    }

    fn edge_id(&self, key: EdgeKey) -> EdgeId {
        EdgeId {
            arena: self.arena,
            key,
        }
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, point: Point2) -> VertexId {
        let key = self.vertices.insert(VertexData::new(point));
        self.vertex_id(key)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id.key)
            .filter(|_| id.arena == self.arena)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        if id.arena != self.arena {
            return Err(TopologyError::EntityNotFound("vertex".into()));
        }
        self.vertices
            .get_mut(id.key)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Iterates over every vertex in the arena, referenced or not.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> + '_ {
        self.vertices.iter().map(|(key, v)| (self.vertex_id(key), v))
    }

    /// Replaces every vertex position in the arena with `f(position)`.
    pub fn map_points<F>(&mut self, mut f: F)
    where
        F: FnMut(&Point2) -> Point2,
    {
        for vertex in self.vertices.values_mut() {
            vertex.point = f(&vertex.point);
        }
    }

    /// Translates every vertex in the arena.
    pub fn translate(&mut self, delta: &Vector2) {
        self.map_points(|p| p + delta);
    }

    // --- Edge operations ---

    /// Inserts an edge into the arena without placing it in the cycle.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        let key = self.edges.insert(data);
        self.edge_id(key)
    }

    /// Inserts an edge and appends it to the cycle.
    pub fn push_edge(&mut self, data: EdgeData) -> EdgeId {
        let id = self.add_edge(data);
        self.cycle.push(id);
        id
    }

    /// Inserts an edge into the cycle directly after `after`.
    ///
    /// # Errors
    ///
    /// Returns an error if `after` is not part of the cycle.
    pub fn insert_edge_after(
        &mut self,
        after: EdgeId,
        data: EdgeData,
    ) -> Result<EdgeId, TopologyError> {
        let index = self.position(after)?;
        let id = self.add_edge(data);
        self.cycle.insert(index + 1, id);
        Ok(id)
    }

    /// Inserts an edge into the cycle directly before `before`.
    ///
    /// # Errors
    ///
    /// Returns an error if `before` is not part of the cycle.
    pub fn insert_edge_before(
        &mut self,
        before: EdgeId,
        data: EdgeData,
    ) -> Result<EdgeId, TopologyError> {
        let index = self.position(before)?;
        let id = self.add_edge(data);
        self.cycle.insert(index, id);
        Ok(id)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id.key)
            .filter(|_| id.arena == self.arena)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns a mutable reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        if id.arena != self.arena {
            return Err(TopologyError::EntityNotFound("edge".into()));
        }
        self.edges
            .get_mut(id.key)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Returns the segment spanned by an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or one of its vertices is missing.
    pub fn segment(&self, id: EdgeId) -> Result<Segment, TopologyError> {
        let edge = self.edge(id)?;
        Ok(Segment::new(
            self.vertex(edge.start)?.point,
            self.vertex(edge.end)?.point,
        ))
    }

    // --- Cycle operations ---

    /// The edges in traversal order.
    #[must_use]
    pub fn cycle(&self) -> &[EdgeId] {
        &self.cycle
    }

    /// Mutable access to the traversal order.
    pub fn cycle_mut(&mut self) -> &mut Vec<EdgeId> {
        &mut self.cycle
    }

    /// Returns the index of an edge within the cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not part of the cycle.
    pub fn position(&self, id: EdgeId) -> Result<usize, TopologyError> {
        self.cycle
            .iter()
            .position(|&e| e == id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge in cycle".into()))
    }

    /// Checks that the cycle is closed by identity and drops every arena
    /// entry the cycle does not reference.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or vertex is missing, or if an edge's end
    /// is not the next edge's start.
    pub fn compact(mut self) -> Result<Self, TopologyError> {
        let n = self.cycle.len();
        let mut used_vertices = HashSet::with_capacity(n);
        for (i, &id) in self.cycle.iter().enumerate() {
            let edge = self.edge(id)?;
            let next = self.edge(self.cycle[(i + 1) % n])?;
            if edge.end != next.start {
                return Err(TopologyError::BrokenCycle(format!(
                    "edge {i} does not end where edge {} starts",
                    (i + 1) % n
                )));
            }
            self.vertex(edge.start)?;
            used_vertices.insert(edge.start.key);
        }

        let used_edges: HashSet<EdgeKey> = self.cycle.iter().map(|id| id.key).collect();
        if used_edges.len() != n {
            return Err(TopologyError::BrokenCycle(
                "an edge appears twice in the cycle".into(),
            ));
        }
        self.edges.retain(|key, _| used_edges.contains(&key));
        self.vertices.retain(|key, _| used_vertices.contains(&key));
        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn triangle() -> (CycleStore, [VertexId; 3], [EdgeId; 3]) {
        let mut store = CycleStore::new();
        let a = store.add_vertex(Point2::new(0.0, 0.0));
        let b = store.add_vertex(Point2::new(1.0, 0.0));
        let c = store.add_vertex(Point2::new(0.0, 1.0));
        let ab = store.push_edge(EdgeData::new(a, b));
        let bc = store.push_edge(EdgeData::new(b, c));
        let ca = store.push_edge(EdgeData::new(c, a));
        (store, [a, b, c], [ab, bc, ca])
    }

    #[test]
    fn closed_triangle_compacts() {
        let (store, _, _) = triangle();
        let store = store.compact().unwrap();
        assert_eq!(store.cycle().len(), 3);
        assert_eq!(store.vertices().count(), 3);
    }

    #[test]
    fn unreferenced_entries_are_dropped() {
        let (mut store, [a, _, _], _) = triangle();
        let stray = store.add_vertex(Point2::new(9.0, 9.0));
        store.add_edge(EdgeData::new(a, stray));
        let store = store.compact().unwrap();
        assert!(store.vertex(stray).is_err());
        assert_eq!(store.vertices().count(), 3);
    }

    #[test]
    fn broken_cycle_is_rejected() {
        let (mut store, [a, _, _], [_, bc, _]) = triangle();
        store.edge_mut(bc).unwrap().end = a;
        assert!(matches!(store.compact(), Err(TopologyError::BrokenCycle(_))));
    }

    #[test]
    fn insert_after_keeps_order() {
        let (mut store, [a, b, _], [ab, bc, _]) = triangle();
        let extra = store.insert_edge_after(ab, EdgeData::new(b, a)).unwrap();
        assert_eq!(store.position(extra).unwrap(), 1);
        assert_eq!(store.position(bc).unwrap(), 2);
    }

    #[test]
    fn missing_vertex_is_not_found() {
        let (mut store, [a, _, _], _) = triangle();
        let removed = {
            let v = store.add_vertex(Point2::new(3.0, 3.0));
            store.vertices.remove(v.key);
            v
        };
        assert!(matches!(
            store.vertex(removed),
            Err(TopologyError::EntityNotFound(_))
        ));
        assert!(store.vertex(a).is_ok());
    }

    #[test]
    fn ids_from_another_store_are_not_found() {
        let (store, _, _) = triangle();
        let (other, [a, _, _], [ab, _, _]) = triangle();
        assert_ne!(store.arena(), other.arena());
        assert!(matches!(store.vertex(a), Err(TopologyError::EntityNotFound(_))));
        assert!(matches!(store.edge(ab), Err(TopologyError::EntityNotFound(_))));
        assert!(store.position(ab).is_err());
    }

    #[test]
    fn reassigned_ids_follow_the_records() {
        let (mut store, [a, b, _], [ab, _, _]) = triangle();
        let before = store.arena();
        store.reassign_ids();
        assert_ne!(store.arena(), before);
        assert!(store.edge(ab).is_err());
        assert!(store.vertex(a).is_err());

        let first = store.cycle()[0];
        let edge = store.edge(first).unwrap().clone();
        assert_eq!(store.vertex(edge.start).unwrap().point, Point2::new(0.0, 0.0));
        assert_eq!(store.vertex(edge.end).unwrap().point, Point2::new(1.0, 0.0));
        assert_ne!(edge.end, b);
        assert!(store.compact().is_ok());
    }
}
