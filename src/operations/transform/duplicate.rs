use std::sync::Arc;

use crate::error::Result;
use crate::math::{Vector2, DUPLICATE_SPACING};
use crate::topology::{Geometry, Polygon, PolygonId};

/// Copies polygons under fresh ids and appends the copies.
pub struct DuplicatePolygons {
    polygons: Vec<PolygonId>,
    offset: Vector2,
}

impl DuplicatePolygons {
    /// Creates a new `DuplicatePolygons` operation translating copies by `offset`.
    #[must_use]
    pub fn new(polygons: Vec<PolygonId>, offset: Vector2) -> Self {
        Self { polygons, offset }
    }

    /// Offsets the `index`-th consecutive duplicate diagonally so repeated
    /// copies do not stack on top of each other. Index 0 behaves like 1.
    #[must_use]
    pub fn staggered(polygons: Vec<PolygonId>, index: u32) -> Self {
        let step = DUPLICATE_SPACING * f64::from(index.max(1));
        Self::new(polygons, Vector2::new(step, step))
    }

    /// Executes the duplication.
    ///
    /// Returns the new geometry and the copies, in the order named.
    ///
    /// # Errors
    ///
    /// Returns an error if a named polygon does not exist.
    pub fn execute(&self, geometry: &Geometry) -> Result<(Geometry, Vec<Arc<Polygon>>)> {
        let mut copies = Vec::with_capacity(self.polygons.len());
        for &id in &self.polygons {
            let mut store = geometry.polygon(id)?.to_store();
            store.reassign_ids();
            store.translate(&self.offset);
            copies.push(Arc::new(Polygon::from_store(PolygonId::fresh(), store)?));
        }

        let mut polygons = geometry.polygons().to_vec();
        polygons.extend(copies.iter().cloned());
        tracing::debug!(count = copies.len(), "duplicated polygons");
        Ok((Geometry::from_unique(polygons), copies))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::CreateGeometry;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn triangle() -> Geometry {
        CreateGeometry::new(vec![vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]])
            .execute()
            .unwrap()
    }

    #[test]
    fn copies_get_fresh_ids_and_offset() {
        let geometry = triangle();
        let original = geometry.polygons()[0].clone();
        let (result, copies) = DuplicatePolygons::new(vec![original.id()], Vector2::new(1.0, 2.0))
            .execute(&geometry)
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(copies.len(), 1);
        assert_ne!(copies[0].id(), original.id());
        assert!(Arc::ptr_eq(&result.polygons()[0], &original));
        assert_eq!(copies[0].points(), vec![p(1.0, 2.0), p(5.0, 2.0), p(1.0, 6.0)]);
        for ((_, a, _), (_, b, _)) in original.edges().zip(copies[0].edges()) {
            assert_eq!(a.material, b.material);
        }
    }

    #[test]
    fn copies_do_not_share_edge_or_vertex_ids() {
        let geometry = triangle();
        let original = geometry.polygons()[0].clone();
        let (result, copies) = DuplicatePolygons::new(vec![original.id()], Vector2::zeros())
            .execute(&geometry)
            .unwrap();
        let copy = &copies[0];

        for edge in copy.edge_ids() {
            assert!(!original.edge_ids().contains(edge));
            assert!(original.edge(*edge).is_err());
        }
        for vertex in copy.vertex_ids() {
            assert!(!original.vertex_ids().contains(vertex));
            assert!(original.vertex(*vertex).is_err());
        }

        // The copy's ids still address the copy itself.
        let split = crate::operations::modification::SplitEdge::new(
            p(2.0, 0.0),
            copy.id(),
            copy.edge_ids()[0],
        )
        .execute(&result)
        .unwrap();
        assert_eq!(split.polygon(copy.id()).unwrap().edge_count(), 4);
        assert_eq!(split.polygon(original.id()).unwrap().edge_count(), 3);
    }

    #[test]
    fn staggered_offsets() {
        let geometry = triangle();
        let id = geometry.polygons()[0].id();
        for (index, expected) in [(0, 10.0), (1, 10.0), (3, 30.0)] {
            let (_, copies) = DuplicatePolygons::staggered(vec![id], index)
                .execute(&geometry)
                .unwrap();
            assert_eq!(copies[0].points()[0], p(expected, expected));
        }
    }

    #[test]
    fn copy_is_independent() {
        let geometry = triangle();
        let id = geometry.polygons()[0].id();
        let (result, copies) = DuplicatePolygons::new(vec![id], Vector2::zeros())
            .execute(&geometry)
            .unwrap();
        let removed = crate::operations::modification::RemoveVertex::new(
            copies[0].vertex_ids()[0],
            copies[0].id(),
        )
        .execute(&result)
        .unwrap();
        assert!(removed.contains(id));
        assert!(!removed.contains(copies[0].id()));
    }
}
