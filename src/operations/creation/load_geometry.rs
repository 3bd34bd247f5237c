use std::sync::Arc;

use super::{CreatePolygon, LoadPolygon};
use crate::error::Result;
use crate::math::{Point2, Tolerances};
use crate::stored::StoredGeometry;
use crate::topology::Geometry;

/// Loads a whole stored geometry.
///
/// The first malformed polygon aborts the load.
pub struct LoadGeometry<'a> {
    geometry: &'a StoredGeometry,
    tolerances: Tolerances,
}

impl<'a> LoadGeometry<'a> {
    /// Creates a new `LoadGeometry` operation.
    #[must_use]
    pub fn new(geometry: &'a StoredGeometry) -> Self {
        Self {
            geometry,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerances = *tolerances;
        self
    }

    /// Executes the load.
    ///
    /// # Errors
    ///
    /// Returns the error of the first polygon that fails to load, or a
    /// duplicate-id error if two stored polygons carry the same id.
    pub fn execute(&self) -> Result<Geometry> {
        let polygons = self
            .geometry
            .polygons
            .iter()
            .map(|p| {
                LoadPolygon::new(p)
                    .with_tolerances(&self.tolerances)
                    .execute()
                    .map(Arc::new)
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(polygons = polygons.len(), "loaded geometry");
        Geometry::from_polygons(polygons)
    }
}

/// Builds a geometry from one point list per polygon.
pub struct CreateGeometry {
    outlines: Vec<Vec<Point2>>,
    tolerances: Tolerances,
}

impl CreateGeometry {
    /// Creates a new `CreateGeometry` operation.
    #[must_use]
    pub fn new(outlines: Vec<Vec<Point2>>) -> Self {
        Self {
            outlines,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerances = *tolerances;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if any outline has fewer than three distinct points.
    pub fn execute(&self) -> Result<Geometry> {
        let polygons = self
            .outlines
            .iter()
            .map(|points| {
                CreatePolygon::new(points.clone())
                    .with_tolerances(&self.tolerances)
                    .execute()
                    .map(Arc::new)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Geometry::from_unique(polygons))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{PolygonError, PolywallError, TopologyError};

    const TRIANGLE: &str = r#"{"polygons": [{"edges": [
        {"start": {"vector": [0, 0]}, "end": {"vector": [0, 1]}},
        {"start": {"vector": [0, 1]}, "end": {"vector": [1, 0]}},
        {"start": {"vector": [1, 0]}, "end": {"vector": [0, 0]}}
    ]}]}"#;

    #[test]
    fn single_stored_polygon() {
        let stored: StoredGeometry = serde_json::from_str(TRIANGLE).unwrap();
        let geometry = LoadGeometry::new(&stored).execute().unwrap();
        assert_eq!(geometry.len(), 1);
        let polygon = &geometry.polygons()[0];
        assert_eq!(polygon.vertex_count(), 3);
        assert_eq!(polygon.edge_count(), 3);
    }

    #[test]
    fn malformed_polygon_aborts_load() {
        let mut stored: StoredGeometry = serde_json::from_str(TRIANGLE).unwrap();
        let mut broken = stored.polygons[0].clone();
        broken.edges[1].start.vector = [5.0, 5.0];
        stored.polygons.push(broken);
        let err = LoadGeometry::new(&stored).execute().unwrap_err();
        assert!(matches!(
            err,
            PolywallError::Polygon(PolygonError::Malformed { .. })
        ));
    }

    #[test]
    fn repeated_stored_ids_are_rejected() {
        let mut stored: StoredGeometry = serde_json::from_str(TRIANGLE).unwrap();
        stored.polygons[0].id = Some(crate::topology::PolygonId::adopt(9_000_001));
        stored.polygons.push(stored.polygons[0].clone());
        let err = LoadGeometry::new(&stored).execute().unwrap_err();
        assert!(matches!(
            err,
            PolywallError::Topology(TopologyError::DuplicateId(_))
        ));
    }

    #[test]
    fn geometry_from_outlines() {
        let square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let triangle = vec![
            Point2::new(20.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(25.0, 5.0),
        ];
        let geometry = CreateGeometry::new(vec![square, triangle]).execute().unwrap();
        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.polygons()[0].edge_count(), 4);
        assert_eq!(geometry.polygons()[1].edge_count(), 3);
    }
}
