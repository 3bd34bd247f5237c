use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox {
    /// Creates a box from two opposite corners given in any order.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Computes the tightest box around the given points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |acc, p| Self {
            min: Point2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }

    /// Returns `true` if `other` lies entirely inside this box (borders included).
    #[must_use]
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Returns `true` if the point lies inside this box (borders included).
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn corners_are_normalized() {
        let b = BoundingBox::new(p(4.0, 0.0), p(0.0, 3.0));
        assert_eq!(b.min, p(0.0, 0.0));
        assert_eq!(b.max, p(4.0, 3.0));
    }

    #[test]
    fn from_points_spans_all() {
        let pts = [p(1.0, 5.0), p(-2.0, 0.0), p(3.0, -1.0)];
        let b = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(b.min, p(-2.0, -1.0));
        assert_eq!(b.max, p(3.0, 5.0));
    }

    #[test]
    fn from_no_points() {
        assert!(BoundingBox::from_points(&Vec::<Point2>::new()).is_none());
    }

    #[test]
    fn containment_is_inclusive() {
        let outer = BoundingBox::new(p(0.0, 0.0), p(10.0, 10.0));
        assert!(outer.contains(&BoundingBox::new(p(0.0, 0.0), p(10.0, 5.0))));
        assert!(!outer.contains(&BoundingBox::new(p(5.0, 5.0), p(11.0, 6.0))));
    }
}
