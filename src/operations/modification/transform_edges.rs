use std::collections::HashMap;

use super::adapt_polygons;
use crate::error::Result;
use crate::topology::{EdgeData, EdgeId, Geometry, PolygonId};

/// Applies an attribute edit to selected edges.
///
/// Meant for material, texture and passability changes. An edit that
/// rewires `start` or `end` breaks the cycle and fails the rebuild.
pub struct TransformEdges<F> {
    edges: HashMap<PolygonId, Vec<EdgeId>>,
    transform: F,
}

impl<F> TransformEdges<F>
where
    F: Fn(&mut EdgeData),
{
    /// Creates a new `TransformEdges` operation over edges grouped by polygon.
    #[must_use]
    pub fn new(edges: HashMap<PolygonId, Vec<EdgeId>>, transform: F) -> Self {
        Self { edges, transform }
    }

    /// Creates a `TransformEdges` operation for edges of a single polygon.
    #[must_use]
    pub fn single(polygon: PolygonId, edges: Vec<EdgeId>, transform: F) -> Self {
        Self::new(HashMap::from([(polygon, edges)]), transform)
    }

    /// Executes the edit.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge does not belong to its polygon or the
    /// edit broke the cycle.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        let targets: Vec<PolygonId> = self.edges.keys().copied().collect();
        adapt_polygons(&targets, geometry, |polygon, store| {
            for &edge in self.edges.get(&polygon.id()).into_iter().flatten() {
                (self.transform)(store.edge_mut(edge)?);
            }
            Ok(())
        })
    }
}
