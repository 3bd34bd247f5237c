use super::{Point2, Segment, Vector2, TOLERANCE};

/// A half-infinite ray cast from a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the ray starts.
    pub origin: Point2,
    /// Direction of travel; need not be normalized.
    pub direction: Vector2,
    /// Angle between this ray and the camera's view direction, in radians.
    ///
    /// `0.0` is the center column. Only `cos(angle)` is used, so the sign
    /// convention of the caller does not matter.
    pub angle: f64,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point2, direction: Vector2, angle: f64) -> Self {
        Self {
            origin,
            direction,
            angle,
        }
    }

    /// Builds the ray for one column of a camera fan.
    ///
    /// `heading` is the camera's view direction and `offset` the column's
    /// angle relative to it, both in radians.
    #[must_use]
    pub fn from_camera(origin: Point2, heading: f64, offset: f64) -> Self {
        let theta = heading + offset;
        Self::new(origin, Vector2::new(theta.cos(), theta.sin()), offset)
    }
}

/// Intersection of a ray with a half-open segment: the start point counts,
/// the end point does not.
///
/// Consecutive edges of a cycle share a vertex, so a ray through a corner
/// crosses the polygon boundary once rather than twice.
///
/// Returns `None` if they are parallel, if the ray misses the segment, or
/// if the crossing lies behind the ray origin.
#[must_use]
pub fn intersect_ray(ray: &Ray, segment: &Segment) -> Option<Point2> {
    let dr = ray.direction;
    let ds = segment.direction();

    let cross = dr.x * ds.y - dr.y * ds.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = segment.start.x - ray.origin.x;
    let dy = segment.start.y - ray.origin.y;
    let t = (dx * ds.y - dy * ds.x) / cross;
    let u = (dx * dr.y - dy * dr.x) / cross;

    if t >= -TOLERANCE && u >= -TOLERANCE && u < 1.0 - TOLERANCE {
        Some(segment.start + ds * u.max(0.0))
    } else {
        None
    }
}
