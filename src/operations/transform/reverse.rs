use crate::error::Result;
use crate::operations::modification::adapt_polygons;
use crate::topology::{Geometry, PolygonId};

/// Flips the traversal direction of polygons.
///
/// Every edge keeps its id and material but runs the other way, and the
/// cycle is reversed, so a counter-clockwise polygon becomes clockwise.
pub struct ReversePolygons {
    polygons: Vec<PolygonId>,
}

impl ReversePolygons {
    /// Creates a new `ReversePolygons` operation.
    #[must_use]
    pub fn new(polygons: Vec<PolygonId>) -> Self {
        Self { polygons }
    }

    /// Executes the reversal.
    ///
    /// # Errors
    ///
    /// Returns an error if a rebuilt polygon fails validation.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        adapt_polygons(&self.polygons, geometry, |_, store| {
            store.cycle_mut().reverse();
            for edge in store.cycle().to_vec() {
                let data = store.edge_mut(edge)?;
                std::mem::swap(&mut data.start, &mut data.end);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_2d;
    use crate::math::Point2;
    use crate::operations::creation::CreateGeometry;

    const TOL: f64 = 1e-10;

    fn square() -> Geometry {
        CreateGeometry::new(vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]])
        .execute()
        .unwrap()
    }

    #[test]
    fn orientation_flips() {
        let geometry = square();
        let id = geometry.polygons()[0].id();
        let before = signed_area_2d(&geometry.polygons()[0].points());
        let result = ReversePolygons::new(vec![id]).execute(&geometry).unwrap();
        let after = signed_area_2d(&result.polygon(id).unwrap().points());
        assert!(before > 0.0);
        assert!((before + after).abs() < TOL, "expected {}, got {after}", -before);
    }

    #[test]
    fn edges_keep_their_ids() {
        let geometry = square();
        let polygon = geometry.polygons()[0].clone();
        let result = ReversePolygons::new(vec![polygon.id()]).execute(&geometry).unwrap();
        let reversed = result.polygon(polygon.id()).unwrap();
        let first = polygon.edge_ids()[0];
        let before = polygon.segment(first).unwrap();
        let after = reversed.segment(first).unwrap();
        assert_eq!(before.start, after.end);
        assert_eq!(before.end, after.start);
    }

    #[test]
    fn double_reverse_is_identity() {
        let geometry = square();
        let id = geometry.polygons()[0].id();
        let op = ReversePolygons::new(vec![id]);
        let twice = op.execute(&op.execute(&geometry).unwrap()).unwrap();
        assert_eq!(
            twice.polygon(id).unwrap().points(),
            geometry.polygon(id).unwrap().points()
        );
        assert_eq!(
            twice.polygon(id).unwrap().edge_ids(),
            geometry.polygon(id).unwrap().edge_ids()
        );
    }
}
