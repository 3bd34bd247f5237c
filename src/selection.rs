use std::collections::{HashMap, HashSet};

use crate::math::{distance, distance_to_mid_point, Point2};
use crate::topology::{EdgeId, Geometry, PolygonId, VertexId};

/// A reference to something the user can pick.
///
/// Elements name their polygon by id, so a selection stays meaningful
/// across geometry snapshots until the element is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectableElement {
    /// One corner of a polygon.
    Vertex { polygon: PolygonId, vertex: VertexId },
    /// One wall of a polygon.
    Edge { polygon: PolygonId, edge: EdgeId },
    /// A whole polygon.
    Polygon { polygon: PolygonId },
}

impl SelectableElement {
    /// The polygon the element belongs to.
    #[must_use]
    pub fn polygon(&self) -> PolygonId {
        match *self {
            Self::Vertex { polygon, .. }
            | Self::Edge { polygon, .. }
            | Self::Polygon { polygon } => polygon,
        }
    }

    /// Returns `true` if `point` is near enough to start dragging the element.
    ///
    /// Vertices and edges (by midpoint) are compared against `tolerance`;
    /// polygons match anywhere inside their bounds. Elements no longer in
    /// `geometry` never match.
    #[must_use]
    pub fn is_close_to(&self, point: &Point2, geometry: &Geometry, tolerance: f64) -> bool {
        let Some(polygon) = geometry.find(self.polygon()) else {
            return false;
        };
        match *self {
            Self::Vertex { vertex, .. } => polygon
                .vertex(vertex)
                .is_ok_and(|v| distance(&v.point, point) <= tolerance),
            Self::Edge { edge, .. } => polygon
                .segment(edge)
                .is_ok_and(|s| distance_to_mid_point(point, &s) <= tolerance),
            Self::Polygon { .. } => polygon.bounding_box().contains_point(point),
        }
    }
}

/// Collects the vertices a selection drags, grouped by polygon.
///
/// A vertex maps to itself, an edge to both endpoints and a polygon to all
/// of its vertices. Corners shared by several selected elements appear once.
/// References that no longer resolve are skipped.
#[must_use]
pub fn vertices_by_polygon(
    selection: &[SelectableElement],
    geometry: &Geometry,
) -> HashMap<PolygonId, HashSet<VertexId>> {
    let mut map: HashMap<PolygonId, HashSet<VertexId>> = HashMap::new();
    for element in selection {
        let Some(polygon) = geometry.find(element.polygon()) else {
            continue;
        };
        let vertices: Vec<VertexId> = match *element {
            SelectableElement::Vertex { vertex, .. } => polygon
                .vertex(vertex)
                .map(|_| vec![vertex])
                .unwrap_or_default(),
            SelectableElement::Edge { edge, .. } => polygon
                .edge(edge)
                .map(|e| vec![e.start, e.end])
                .unwrap_or_default(),
            SelectableElement::Polygon { .. } => polygon.vertex_ids().to_vec(),
        };
        if !vertices.is_empty() {
            map.entry(polygon.id()).or_default().extend(vertices);
        }
    }
    map
}
