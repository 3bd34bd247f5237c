use super::{Point2, Vector2, TOLERANCE};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn mid_point(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns `true` if the two points are at most `epsilon` apart.
#[must_use]
pub fn are_close(a: &Point2, b: &Point2, epsilon: f64) -> bool {
    distance(a, b) <= epsilon
}

/// Rounds each coordinate to the nearest multiple of `grid`.
#[must_use]
pub fn snap(v: &Vector2, grid: f64) -> Vector2 {
    v.map(|c| (c / grid).round() * grid)
}

/// Returns the point on the segment's infinite line nearest to `point`.
///
/// A zero-length segment projects everything onto its start.
#[must_use]
pub fn project_on(point: &Point2, segment: &Segment) -> Point2 {
    let d = segment.direction();
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return segment.start;
    }
    let t = (point - segment.start).dot(&d) / len_sq;
    segment.start + d * t
}

/// Distance from `point` to the segment's midpoint.
///
/// Hit-testing ranks edges by this value rather than by the true
/// point-to-segment distance.
#[must_use]
pub fn distance_to_mid_point(point: &Point2, segment: &Segment) -> f64 {
    distance(point, &segment.mid_point())
}
