pub mod bounding_box;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

pub use bounding_box::BoundingBox;
pub use distance_2d::{are_close, distance, distance_to_mid_point, project_on, snap, Segment};
pub use intersect_2d::{intersect_ray, Ray};

use serde::{Deserialize, Serialize};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Threshold for floating-point comparisons that are not user-facing.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum distance at which two coordinates are treated as the same vertex.
pub const COINCIDENCE_TOLERANCE: f64 = 0.005;

/// Maximum distance at which the cursor is considered to be over an element.
pub const PICK_TOLERANCE: f64 = 50.0;

/// Grid size used when snapping is requested.
pub const GRID_SIZE: f64 = 20.0;

/// Per-step displacement applied to duplicated polygons.
pub const DUPLICATE_SPACING: f64 = 10.0;

/// The fuzziness controls of the kernel.
///
/// Host applications may deserialize this from their settings; missing
/// fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Distance within which two positions merge into one vertex.
    pub coincidence: f64,
    /// Distance within which hit-testing reports a match.
    pub pick: f64,
    /// Grid size for snapping.
    pub grid: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            coincidence: COINCIDENCE_TOLERANCE,
            pick: PICK_TOLERANCE,
            grid: GRID_SIZE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let tol: Tolerances = serde_json::from_str(r#"{"pick": 12.5}"#).unwrap();
        assert!((tol.pick - 12.5).abs() < TOLERANCE);
        assert!((tol.coincidence - COINCIDENCE_TOLERANCE).abs() < TOLERANCE);
        assert!((tol.grid - GRID_SIZE).abs() < TOLERANCE);
    }
}
