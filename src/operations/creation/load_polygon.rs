use crate::error::{PolygonError, Result};
use crate::math::{are_close, Tolerances};
use crate::stored::StoredPolygon;
use crate::topology::polygon::MIN_POLYGON_EDGES;
use crate::topology::{CycleStore, EdgeData, Polygon, PolygonId};

/// Builds a polygon from a stored edge list.
///
/// Consecutive edges must meet exactly: edge `i`'s start has to equal edge
/// `i - 1`'s end by value. The last edge's end is merged into the first
/// vertex when it lies within the coincidence tolerance, which closes the
/// cycle by identity.
pub struct LoadPolygon<'a> {
    polygon: &'a StoredPolygon,
    tolerance: f64,
}

impl<'a> LoadPolygon<'a> {
    /// Creates a new `LoadPolygon` operation.
    #[must_use]
    pub fn new(polygon: &'a StoredPolygon) -> Self {
        Self {
            polygon,
            tolerance: Tolerances::default().coincidence,
        }
    }

    /// Overrides the coincidence tolerance used to close the cycle.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerance = tolerances.coincidence;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::Malformed`] if two consecutive edges do not
    /// meet, [`PolygonError::NotClosed`] if the last edge does not return to
    /// the first vertex, and [`PolygonError::TooFewVertices`] for fewer than
    /// three edges.
    pub fn execute(&self) -> Result<Polygon> {
        let edges = &self.polygon.edges;
        if edges.len() < MIN_POLYGON_EDGES {
            return Err(PolygonError::TooFewVertices { count: edges.len() }.into());
        }

        let mut store = CycleStore::new();
        let first_point = edges[0].start.point();
        let first = store.add_vertex(first_point);
        let mut previous = (first, first_point);
        let last_index = edges.len() - 1;

        for (i, stored) in edges.iter().enumerate() {
            let start = if i == 0 {
                first
            } else {
                let (previous_end, previous_point) = previous;
                let start_point = stored.start.point();
                if start_point != previous_point {
                    tracing::warn!(
                        polygon = ?self.polygon.id,
                        edge = i,
                        "rejecting stored polygon with a jump between edges"
                    );
                    return Err(PolygonError::Malformed {
                        previous: previous_point,
                        next: start_point,
                    }
                    .into());
                }
                previous_end
            };

            let end_point = stored.end.point();
            let end = if i == last_index && are_close(&end_point, &first_point, self.tolerance) {
                first
            } else {
                store.add_vertex(end_point)
            };

            store.push_edge(EdgeData {
                start,
                end,
                material: stored.material.clone(),
                immaterial: stored.immaterial,
            });
            previous = (end, end_point);
        }

        if previous.0 != first {
            return Err(PolygonError::NotClosed {
                first: first_point,
                last: previous.1,
            }
            .into());
        }

        let id = self
            .polygon
            .id
            .map_or_else(PolygonId::fresh, |id| PolygonId::adopt(id.get()));
        Polygon::from_store(id, store)
    }
}
