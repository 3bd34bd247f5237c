use super::adapt_polygons;
use crate::error::{Result, TopologyError};
use crate::topology::{Geometry, PolygonId, VertexId};

/// Removes a vertex by merging its incoming and outgoing edges.
///
/// The incoming edge is stretched to the outgoing edge's end and the
/// outgoing edge is dropped. A triangle loses its last chance to be a
/// polygon and disappears from the geometry.
pub struct RemoveVertex {
    vertex: VertexId,
    polygon: PolygonId,
}

impl RemoveVertex {
    /// Creates a new `RemoveVertex` operation.
    #[must_use]
    pub fn new(vertex: VertexId, polygon: PolygonId) -> Self {
        Self { vertex, polygon }
    }

    /// Executes the removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon does not exist or the vertex is not
    /// part of its cycle.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        geometry.polygon(self.polygon)?;
        adapt_polygons(&[self.polygon], geometry, |_, store| {
            let cycle = store.cycle().to_vec();
            let n = cycle.len();
            let mut outgoing = None;
            for (i, &edge) in cycle.iter().enumerate() {
                if store.edge(edge)?.start == self.vertex {
                    outgoing = Some(i);
                    break;
                }
            }
            let outgoing = outgoing
                .ok_or_else(|| TopologyError::EntityNotFound("vertex in polygon".into()))?;
            // The first vertex's incoming edge is the last one in the cycle.
            let incoming = (outgoing + n - 1) % n;

            let new_end = store.edge(cycle[outgoing])?.end;
            store.edge_mut(cycle[incoming])?.end = new_end;
            store.cycle_mut().remove(outgoing);
            Ok(())
        })
    }
}
