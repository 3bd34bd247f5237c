use rand::Rng;

use super::LoadPolygon;
use crate::error::{PolygonError, Result};
use crate::math::{are_close, Point2, Tolerances};
use crate::stored::{StoredEdge, StoredPolygon};
use crate::topology::polygon::MIN_POLYGON_EDGES;
use crate::topology::{Color, Material, Polygon};

/// Color given to freshly drawn walls.
pub const NEW_WALL_COLOR: Color = [20.0, 20.0, 255.0, 1.0];

/// Alpha of freshly drawn walls that come out translucent.
pub const NEW_WALL_TRANSLUCENT_ALPHA: f64 = 0.6;

/// Creates a closed polygon from an ordered list of points.
///
/// Points within the coincidence tolerance of their predecessor are
/// dropped, and so is a last point that repeats the first one: the closing
/// edge is always implied.
pub struct CreatePolygon {
    points: Vec<Point2>,
    tolerances: Tolerances,
}

impl CreatePolygon {
    /// Creates a new `CreatePolygon` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: &Tolerances) -> Self {
        self.tolerances = *tolerances;
        self
    }

    /// Executes the operation with a thread-local random source for materials.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewVertices`] if fewer than three distinct
    /// points remain.
    pub fn execute(&self) -> Result<Polygon> {
        self.execute_with(&mut rand::thread_rng())
    }

    /// Executes the operation, drawing edge materials from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::TooFewVertices`] if fewer than three distinct
    /// points remain.
    pub fn execute_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Polygon> {
        let epsilon = self.tolerances.coincidence;
        let mut points: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if !matches!(points.last(), Some(last) if are_close(last, p, epsilon)) {
                points.push(*p);
            }
        }
        while points.len() > 1 && are_close(&points[0], &points[points.len() - 1], epsilon) {
            points.pop();
        }
        if points.len() < MIN_POLYGON_EDGES {
            return Err(PolygonError::TooFewVertices {
                count: points.len(),
            }
            .into());
        }

        let n = points.len();
        let edges = (0..n)
            .map(|i| StoredEdge {
                material: Some(fresh_material(rng)),
                ..StoredEdge::new(points[i], points[(i + 1) % n])
            })
            .collect();

        let polygon = LoadPolygon::new(&StoredPolygon { id: None, edges })
            .with_tolerances(&self.tolerances)
            .execute()?;
        tracing::debug!(polygon = %polygon.id(), vertices = n, "created polygon");
        Ok(polygon)
    }
}

/// A solid wall color that is opaque or translucent with equal odds.
fn fresh_material<R: Rng + ?Sized>(rng: &mut R) -> Material {
    let mut color = NEW_WALL_COLOR;
    if !rng.gen_bool(0.5) {
        color[3] = NEW_WALL_TRANSLUCENT_ALPHA;
    }
    Material::solid(color)
}
