use super::adapt_polygons;
use crate::error::Result;
use crate::math::{project_on, Point2};
use crate::topology::{EdgeId, Geometry, PolygonId};

/// Splits one edge of a polygon into two at a cut point.
///
/// The edge keeps its id and now ends at the cut; a new edge carrying the
/// same material runs from the cut to the old end.
pub struct SplitEdge {
    cut: Point2,
    polygon: PolygonId,
    edge: EdgeId,
}

impl SplitEdge {
    /// Creates a new `SplitEdge` operation cutting at `cut`.
    #[must_use]
    pub fn new(cut: Point2, polygon: PolygonId, edge: EdgeId) -> Self {
        Self { cut, polygon, edge }
    }

    /// Creates a split whose cut is `target` projected onto the edge's line.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon or edge does not exist.
    pub fn projected(
        target: Point2,
        polygon: PolygonId,
        edge: EdgeId,
        geometry: &Geometry,
    ) -> Result<Self> {
        let segment = geometry.polygon(polygon)?.segment(edge)?;
        Ok(Self::new(project_on(&target, &segment), polygon, edge))
    }

    /// Executes the split.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon or edge does not exist.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        geometry.polygon(self.polygon)?;
        let result = adapt_polygons(&[self.polygon], geometry, |_, store| {
            let old_end = store.edge(self.edge)?.end;
            let cut = store.add_vertex(self.cut);
            let edge = store.edge_mut(self.edge)?;
            edge.end = cut;
            let tail = edge.derive(cut, old_end);
            store.insert_edge_after(self.edge, tail)?;
            Ok(())
        })?;
        tracing::debug!(polygon = %self.polygon, "split edge");
        Ok(result)
    }
}
