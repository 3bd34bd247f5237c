use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::{CycleStore, EdgeData, EdgeId, VertexData, VertexId};
use crate::error::{PolygonError, Result, TopologyError};
use crate::math::{BoundingBox, Point2, Segment};
use crate::stored::{StoredEdge, StoredPolygon, StoredVertex};

/// Polygons reduced below this many edges are removed from the geometry.
pub const MIN_POLYGON_EDGES: usize = 3;

static NEXT_POLYGON_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonId(u64);

impl PolygonId {
    /// Allocates an id that no other polygon in this process carries.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_POLYGON_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Adopts an externally supplied id and keeps [`PolygonId::fresh`]
    /// from handing it out again.
    #[must_use]
    pub fn adopt(raw: u64) -> Self {
        NEXT_POLYGON_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A closed cycle of wall edges.
///
/// Built only through [`Polygon::from_store`], so the cycle is always
/// closed by vertex identity and has at least [`MIN_POLYGON_EDGES`] edges.
#[derive(Debug, Clone)]
pub struct Polygon {
    id: PolygonId,
    store: CycleStore,
    vertices: Vec<VertexId>,
    bounds: BoundingBox,
}

impl Polygon {
    /// Validates the store and derives the vertex order and bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle has fewer than three edges, is not
    /// closed by identity, or references missing entities.
    pub fn from_store(id: PolygonId, store: CycleStore) -> Result<Self> {
        let count = store.cycle().len();
        if count < MIN_POLYGON_EDGES {
            return Err(PolygonError::TooFewVertices { count }.into());
        }
        let store = store.compact()?;

        let mut vertices = Vec::with_capacity(count);
        let mut points = Vec::with_capacity(count);
        for &edge in store.cycle() {
            let start = store.edge(edge)?.start;
            vertices.push(start);
            points.push(store.vertex(start)?.point);
        }
        let bounds = BoundingBox::from_points(&points)
            .ok_or_else(|| TopologyError::BrokenCycle("polygon without vertices".into()))?;

        Ok(Self {
            id,
            store,
            vertices,
            bounds,
        })
    }

    /// Returns the polygon's id.
    #[must_use]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    /// Returns the underlying arena.
    #[must_use]
    pub fn store(&self) -> &CycleStore {
        &self.store
    }

    /// Edge ids in cycle order.
    #[must_use]
    pub fn edge_ids(&self) -> &[EdgeId] {
        self.store.cycle()
    }

    /// Vertex ids in cycle order; vertex `i` is the start of edge `i`.
    #[must_use]
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of edges, which always equals the number of vertices.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.cycle().len()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Axis-aligned bounds of all vertices.
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Looks up an edge of this polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not belong to this polygon.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData> {
        Ok(self.store.edge(id)?)
    }

    /// Looks up a vertex of this polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not belong to this polygon.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        Ok(self.store.vertex(id)?)
    }

    /// Returns the segment spanned by an edge of this polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge does not belong to this polygon.
    pub fn segment(&self, id: EdgeId) -> Result<Segment> {
        Ok(self.store.segment(id)?)
    }

    /// Edges with their segments, in cycle order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData, Segment)> + '_ {
        self.store.cycle().iter().filter_map(|&id| {
            let edge = self.store.edge(id).ok()?;
            let segment = self.store.segment(id).ok()?;
            Some((id, edge, segment))
        })
    }

    /// Vertices with their positions, in cycle order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, Point2)> + '_ {
        self.vertices
            .iter()
            .filter_map(|&id| Some((id, self.store.vertex(id).ok()?.point)))
    }

    /// Vertex positions in cycle order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.vertices().map(|(_, p)| p).collect()
    }

    /// Copies the arena so an operation can rewrite it.
    #[must_use]
    pub fn to_store(&self) -> CycleStore {
        self.store.clone()
    }

    /// Converts the polygon into its persisted form.
    #[must_use]
    pub fn to_stored(&self) -> StoredPolygon {
        StoredPolygon {
            id: Some(self.id),
            edges: self
                .edges()
                .map(|(_, edge, segment)| StoredEdge {
                    start: StoredVertex::from(segment.start),
                    end: StoredVertex::from(segment.end),
                    material: edge.material.clone(),
                    immaterial: edge.immaterial,
                })
                .collect(),
        }
    }
}
