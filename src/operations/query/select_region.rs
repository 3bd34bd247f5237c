use crate::math::BoundingBox;
use crate::selection::SelectableElement;
use crate::topology::Geometry;

/// Marquee selection: every polygon lying entirely inside a region.
pub struct SelectRegion {
    region: BoundingBox,
}

impl SelectRegion {
    /// Creates a new `SelectRegion` query.
    #[must_use]
    pub fn new(region: BoundingBox) -> Self {
        Self { region }
    }

    /// Executes the query, returning polygons in enumeration order.
    #[must_use]
    pub fn execute(&self, geometry: &Geometry) -> Vec<SelectableElement> {
        geometry
            .polygons()
            .iter()
            .filter(|p| self.region.contains(p.bounding_box()))
            .map(|p| SelectableElement::Polygon { polygon: p.id() })
            .collect()
    }
}
