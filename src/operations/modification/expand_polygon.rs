use std::sync::Arc;

use super::adapt_polygons;
use crate::error::{OperationError, Result};
use crate::math::{Point2, Tolerances, Vector2, TOLERANCE};
use crate::topology::{EdgeId, Geometry, Polygon, PolygonId};

/// Extrudes one edge of a polygon toward a drag target.
///
/// The edge is pushed along its normal until it is level with `target`;
/// two new edges connect the old endpoints to the pushed ones, so the
/// polygon gains two vertices. The pushed edge keeps the original id and
/// material, the connecting edges copy the material.
pub struct ExpandPolygon {
    edge: EdgeId,
    polygon: PolygonId,
    target: Point2,
    tolerance: f64,
}

impl ExpandPolygon {
    /// Creates a new `ExpandPolygon` operation.
    #[must_use]
    pub fn new(edge: EdgeId, polygon: PolygonId, target: Point2) -> Self {
        Self {
            edge,
            polygon,
            target,
            tolerance: Tolerances::default().coincidence,
        }
    }

    /// Overrides the coincidence tolerance below which no expansion happens.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerance = tolerances.coincidence;
        self
    }

    /// Executes the expansion.
    ///
    /// Returns the expanded polygon (for live preview) and the new geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon or edge does not exist, if the edge
    /// has zero length, or if `target` lies on the edge's line.
    pub fn execute(&self, geometry: &Geometry) -> Result<(Arc<Polygon>, Geometry)> {
        let segment = geometry.polygon(self.polygon)?.segment(self.edge)?;
        let direction = segment.direction();
        let length = direction.norm();
        if length < TOLERANCE {
            return Err(OperationError::InvalidInput("cannot expand a zero-length edge".into()).into());
        }

        let normal = Vector2::new(-direction.y, direction.x) / length;
        let offset = normal * (self.target - segment.start).dot(&normal);
        if offset.norm() <= self.tolerance {
            return Err(OperationError::InvalidInput(
                "expansion target lies on the edge".into(),
            )
            .into());
        }

        let result = adapt_polygons(&[self.polygon], geometry, |_, store| {
            let original = store.edge(self.edge)?.clone();
            let pushed_start = store.add_vertex(segment.start + offset);
            let pushed_end = store.add_vertex(segment.end + offset);

            store.insert_edge_before(self.edge, original.derive(original.start, pushed_start))?;
            store.insert_edge_after(self.edge, original.derive(pushed_end, original.end))?;
            let edge = store.edge_mut(self.edge)?;
            edge.start = pushed_start;
            edge.end = pushed_end;
            Ok(())
        })?;

        let candidate = result.polygon(self.polygon)?.clone();
        tracing::debug!(polygon = %self.polygon, vertices = candidate.vertex_count(), "expanded polygon");
        Ok((candidate, result))
    }
}
