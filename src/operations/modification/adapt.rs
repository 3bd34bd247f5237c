use std::sync::Arc;

use crate::error::Result;
use crate::topology::polygon::MIN_POLYGON_EDGES;
use crate::topology::{CycleStore, Geometry, Polygon, PolygonId};

/// Rewrites the named polygons and returns the resulting geometry.
///
/// Every polygon whose id is in `targets` gets a copy of its arena handed to
/// `transform`. Results with fewer than [`MIN_POLYGON_EDGES`] edges are
/// dropped; the rest are rebuilt under their old id and validated. The new
/// geometry lists the untouched polygons first (sharing the same [`Arc`]s),
/// then the rebuilt ones, each group in its previous order. Ids that do not
/// occur in the geometry are ignored.
///
/// # Errors
///
/// Returns the first error raised by `transform` or by the rebuild; the
/// input geometry is never modified.
pub fn adapt_polygons<F>(targets: &[PolygonId], geometry: &Geometry, mut transform: F) -> Result<Geometry>
where
    F: FnMut(&Polygon, &mut CycleStore) -> Result<()>,
{
    let (mut polygons, adapted): (Vec<_>, Vec<_>) = geometry
        .polygons()
        .iter()
        .cloned()
        .partition(|p| !targets.contains(&p.id()));

    for polygon in adapted {
        let mut store = polygon.to_store();
        transform(&polygon, &mut store)?;

        let edges = store.cycle().len();
        if edges < MIN_POLYGON_EDGES {
            tracing::debug!(polygon = %polygon.id(), edges, "dropping degenerate polygon");
            continue;
        }
        polygons.push(Arc::new(Polygon::from_store(polygon.id(), store)?));
    }

    Ok(Geometry::from_unique(polygons))
}
