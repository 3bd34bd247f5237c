use std::sync::Arc;

use crate::error::{Result, TopologyError};
use crate::topology::{Geometry, Polygon};

/// Appends a polygon to the geometry.
pub struct AddPolygon {
    polygon: Arc<Polygon>,
}

impl AddPolygon {
    /// Creates a new `AddPolygon` operation.
    #[must_use]
    pub fn new(polygon: Arc<Polygon>) -> Self {
        Self { polygon }
    }

    /// Executes the insertion. Existing polygons are shared with the input.
    ///
    /// # Errors
    ///
    /// Returns an error if a polygon with the same id already exists.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        if geometry.contains(self.polygon.id()) {
            return Err(TopologyError::DuplicateId(self.polygon.id()).into());
        }
        let mut polygons = geometry.polygons().to_vec();
        polygons.push(Arc::clone(&self.polygon));
        Ok(Geometry::from_unique(polygons))
    }
}
