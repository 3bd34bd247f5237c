use std::collections::{HashMap, HashSet};

use super::adapt_polygons;
use crate::error::Result;
use crate::math::{snap, Tolerances, Vector2};
use crate::topology::{Geometry, PolygonId, VertexId};

/// Translates selected vertices, polygon by polygon.
///
/// A vertex shared by two selected edges appears once in its polygon's set
/// and is moved exactly once.
pub struct MoveVertices {
    snap: bool,
    delta: Vector2,
    vertices: HashMap<PolygonId, HashSet<VertexId>>,
    grid: f64,
}

impl MoveVertices {
    /// Creates a new `MoveVertices` operation.
    ///
    /// With `snap` set, `delta` is rounded to the grid before it is applied.
    #[must_use]
    pub fn new(snap: bool, delta: Vector2, vertices: HashMap<PolygonId, HashSet<VertexId>>) -> Self {
        Self {
            snap,
            delta,
            vertices,
            grid: Tolerances::default().grid,
        }
    }

    /// Overrides the snapping grid.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.grid = tolerances.grid;
        self
    }

    /// The displacement actually applied to each vertex.
    #[must_use]
    pub fn offset(&self) -> Vector2 {
        if self.snap {
            snap(&self.delta, self.grid)
        } else {
            self.delta
        }
    }

    /// Executes the move.
    ///
    /// # Errors
    ///
    /// Returns an error if a rebuilt polygon fails validation.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        let offset = self.offset();
        let targets: Vec<PolygonId> = self.vertices.keys().copied().collect();

        adapt_polygons(&targets, geometry, |polygon, store| {
            let mut pending = self
                .vertices
                .get(&polygon.id())
                .cloned()
                .unwrap_or_default();
            for &edge in polygon.edge_ids() {
                let (start, end) = {
                    let data = store.edge(edge)?;
                    (data.start, data.end)
                };
                for vertex in [start, end] {
                    if pending.remove(&vertex) {
                        store.vertex_mut(vertex)?.point += offset;
                    }
                }
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::CreateGeometry;

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

    fn selection(id: PolygonId, vertices: &[VertexId]) -> HashMap<PolygonId, HashSet<VertexId>> {
        HashMap::from([(id, vertices.iter().copied().collect())])
    }

    #[test]
    fn shared_corner_moves_once() {
        let geometry = square();
        let polygon = geometry.polygons()[0].clone();
        // Two adjacent edges selected: their shared corner is vertex 1.
        let v = polygon.vertex_ids();
        let map = selection(polygon.id(), &[v[0], v[1], v[1], v[2]]);
        let result = MoveVertices::new(false, Vector2::new(3.0, 0.0), map)
            .execute(&geometry)
            .unwrap();
        let moved = result.polygon(polygon.id()).unwrap();
        assert_eq!(moved.vertex(v[1]).unwrap().point, Point2::new(13.0, 0.0));
        assert_eq!(moved.vertex(v[0]).unwrap().point, Point2::new(3.0, 0.0));
        assert_eq!(moved.vertex(v[3]).unwrap().point, Point2::new(0.0, 10.0));
    }

    #[test]
    fn zero_delta_keeps_positions() {
        let geometry = square();
        let polygon = geometry.polygons()[0].clone();
        let map = selection(polygon.id(), polygon.vertex_ids());
        let result = MoveVertices::new(false, Vector2::zeros(), map)
            .execute(&geometry)
            .unwrap();
        assert_eq!(result.polygon(polygon.id()).unwrap().points(), polygon.points());
    }

    #[test]
    fn snapped_delta_is_grid_aligned() {
        let geometry = square();
        let polygon = geometry.polygons()[0].clone();
        let v = polygon.vertex_ids();
        let map = selection(polygon.id(), &[v[2]]);
        let result = MoveVertices::new(true, Vector2::new(12.0, 27.0), map)
            .execute(&geometry)
            .unwrap();
        let moved = result.polygon(polygon.id()).unwrap();
        assert_eq!(moved.vertex(v[2]).unwrap().point, Point2::new(30.0, 30.0));
    }

    #[test]
    fn custom_grid() {
        let tolerances = Tolerances {
            grid: 5.0,
            ..Tolerances::default()
        };
        let op = MoveVertices::new(true, Vector2::new(12.0, 27.0), HashMap::new())
            .with_tolerances(&tolerances);
        assert_eq!(op.offset(), Vector2::new(10.0, 25.0));
    }

    #[test]
    fn bounds_follow_the_move() {
        let geometry = square();
        let polygon = geometry.polygons()[0].clone();
        let map = selection(polygon.id(), polygon.vertex_ids());
        let result = MoveVertices::new(false, Vector2::new(-5.0, 5.0), map)
            .execute(&geometry)
            .unwrap();
        let moved = result.polygon(polygon.id()).unwrap();
        assert_eq!(moved.bounding_box().min, Point2::new(-5.0, 5.0));
        assert_eq!(moved.bounding_box().max, Point2::new(5.0, 15.0));
    }
}
