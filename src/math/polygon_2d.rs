use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the arithmetic mean of the points, or `None` if there are none.
pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Point2> {
    let (sum, count) = points
        .into_iter()
        .fold((nalgebra::Vector2::zeros(), 0_usize), |(sum, n), p| {
            (sum + p.coords, n + 1)
        });
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / count as f64;
    Some(Point2::from(sum * inv_n))
}
