use nalgebra::Rotation2;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::centroid;
use crate::math::{Point2, Tolerances};
use crate::operations::modification::adapt_polygons;
use crate::topology::{Geometry, PolygonId};

/// Rotates polygons as a group about their common centroid.
///
/// The rotation handle is the first vertex of the first named polygon. The
/// group turns by the angle that carries the handle's direction from the
/// centroid onto the target's direction from the centroid.
pub struct RotatePolygons {
    polygons: Vec<PolygonId>,
    target: Point2,
    tolerance: f64,
}

/// Centroid and handle of a rotation group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPivot {
    /// Mean of every vertex in the group.
    pub centroid: Point2,
    /// Vertex the user drags to rotate the group.
    pub handle: Point2,
}

impl RotatePolygons {
    /// Creates a new `RotatePolygons` operation.
    #[must_use]
    pub fn new(polygons: Vec<PolygonId>, target: Point2) -> Self {
        Self {
            polygons,
            target,
            tolerance: Tolerances::default().coincidence,
        }
    }

    /// Overrides the tolerance used to reject targets at the centroid.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerance = tolerances.coincidence;
        self
    }

    /// Computes the centroid and handle of the named polygons.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or names a missing polygon.
    pub fn pivot(&self, geometry: &Geometry) -> Result<RotationPivot> {
        let mut points = Vec::new();
        for &id in &self.polygons {
            points.extend(geometry.polygon(id)?.points());
        }
        let handle = points.first().copied();
        match (centroid(&points), handle) {
            (Some(centroid), Some(handle)) => Ok(RotationPivot { centroid, handle }),
            _ => Err(OperationError::InvalidInput("nothing to rotate".into()).into()),
        }
    }

    /// Returns the rotation angle in radians, counter-clockwise positive.
    ///
    /// # Errors
    ///
    /// Returns an error if [`RotatePolygons::pivot`] fails, or if the target
    /// or the handle sits on the centroid.
    pub fn angle(&self, geometry: &Geometry) -> Result<f64> {
        let pivot = self.pivot(geometry)?;
        let from = pivot.handle - pivot.centroid;
        let to = self.target - pivot.centroid;
        if from.norm() <= self.tolerance || to.norm() <= self.tolerance {
            return Err(OperationError::InvalidInput(
                "rotation handle and target must not coincide with the centroid".into(),
            )
            .into());
        }
        Ok(to.y.atan2(to.x) - from.y.atan2(from.x))
    }

    /// Executes the rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the angle cannot be determined.
    pub fn execute(&self, geometry: &Geometry) -> Result<Geometry> {
        let pivot = self.pivot(geometry)?;
        let angle = self.angle(geometry)?;
        let rotation = Rotation2::new(angle);

        let result = adapt_polygons(&self.polygons, geometry, |_, store| {
            store.map_points(|p| pivot.centroid + rotation * (p - pivot.centroid));
            Ok(())
        })?;
        tracing::debug!(polygons = self.polygons.len(), angle, "rotated polygons");
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PolywallError;
    use crate::math::distance;
    use crate::operations::creation::CreateGeometry;

    const TOL: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Geometry {
        CreateGeometry::new(vec![vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]])
            .execute()
            .unwrap()
    }

    #[test]
    fn quarter_turn() {
        let geometry = square();
        let id = geometry.polygons()[0].id();
        let op = RotatePolygons::new(vec![id], p(10.0, 0.0));
        assert!((op.angle(&geometry).unwrap() - FRAC_PI_2).abs() < TOL);

        let result = op.execute(&geometry).unwrap();
        let points = result.polygon(id).unwrap().points();
        assert_relative_eq!(points[0], p(10.0, 0.0), epsilon = TOL);
        assert_relative_eq!(points[1], p(10.0, 10.0), epsilon = TOL);
        assert_relative_eq!(points[2], p(0.0, 10.0), epsilon = TOL);
        assert_relative_eq!(points[3], p(0.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn group_rotates_about_common_centroid() {
        let geometry = CreateGeometry::new(vec![
            vec![p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)],
            vec![p(10.0, 0.0), p(12.0, 0.0), p(10.0, 2.0)],
        ])
        .execute()
        .unwrap();
        let ids: Vec<_> = geometry.polygons().iter().map(|p| p.id()).collect();
        let op = RotatePolygons::new(ids.clone(), p(3.0, 7.0));
        let pivot = op.pivot(&geometry).unwrap();
        assert_eq!(pivot.handle, p(0.0, 0.0));

        let result = op.execute(&geometry).unwrap();
        for id in ids {
            let before = geometry.polygon(id).unwrap().points();
            let after = result.polygon(id).unwrap().points();
            for (a, b) in before.iter().zip(&after) {
                let da = distance(a, &pivot.centroid);
                let db = distance(b, &pivot.centroid);
                assert!((da - db).abs() < TOL, "distance changed: {da} vs {db}");
            }
        }
    }

    #[test]
    fn target_on_centroid_is_rejected() {
        let geometry = square();
        let id = geometry.polygons()[0].id();
        let err = RotatePolygons::new(vec![id], p(5.0, 5.0))
            .execute(&geometry)
            .unwrap_err();
        assert!(matches!(err, PolywallError::Operation(_)));
    }

    #[test]
    fn empty_group_is_rejected() {
        let err = RotatePolygons::new(Vec::new(), p(1.0, 1.0))
            .execute(&square())
            .unwrap_err();
        assert!(matches!(err, PolywallError::Operation(_)));
    }
}
