use std::collections::HashSet;
use std::sync::Arc;

use super::{Polygon, PolygonId};
use crate::error::{Result, TopologyError};
use crate::stored::StoredGeometry;

/// An immutable snapshot of every wall polygon in the world.
///
/// Cloning is cheap: polygons are shared through [`Arc`], and operations
/// that produce a new geometry reuse the untouched polygons of the old one.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    polygons: Vec<Arc<Polygon>>,
}

impl Geometry {
    /// Creates an empty geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a geometry from polygons.
    ///
    /// # Errors
    ///
    /// Returns an error if two polygons share an id.
    pub fn from_polygons(polygons: Vec<Arc<Polygon>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(polygons.len());
        for polygon in &polygons {
            if !seen.insert(polygon.id()) {
                return Err(TopologyError::DuplicateId(polygon.id()).into());
            }
        }
        Ok(Self { polygons })
    }

    /// Wraps polygons whose ids are already known to be unique.
    pub(crate) fn from_unique(polygons: Vec<Arc<Polygon>>) -> Self {
        Self { polygons }
    }

    /// All polygons in enumeration order.
    #[must_use]
    pub fn polygons(&self) -> &[Arc<Polygon>] {
        &self.polygons
    }

    /// Finds a polygon by id.
    #[must_use]
    pub fn find(&self, id: PolygonId) -> Option<&Arc<Polygon>> {
        self.polygons.iter().find(|p| p.id() == id)
    }

    /// Returns the polygon with the given id, or an error if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if no polygon carries the id.
    pub fn polygon(&self, id: PolygonId) -> Result<&Arc<Polygon>> {
        self.find(id)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("polygon {id}")).into())
    }

    /// Returns `true` if a polygon with this id exists.
    #[must_use]
    pub fn contains(&self, id: PolygonId) -> bool {
        self.find(id).is_some()
    }

    /// Number of polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if there are no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Converts the geometry into its persisted form.
    #[must_use]
    pub fn to_stored(&self) -> StoredGeometry {
        StoredGeometry {
            polygons: self.polygons.iter().map(|p| p.to_stored()).collect(),
        }
    }
}
