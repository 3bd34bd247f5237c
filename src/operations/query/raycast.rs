use crate::math::{distance, intersect_ray, Point2, Ray};
use crate::topology::{EdgeData, EdgeId, Geometry, Polygon};

/// One crossing of a ray with a wall edge.
///
/// A hit without polygon, edge and intersection is the "nothing in sight"
/// sentinel; its distance is infinite.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'g> {
    pub ray: Ray,
    pub polygon: Option<&'g Polygon>,
    pub edge: Option<(EdgeId, &'g EdgeData)>,
    pub intersection: Option<Point2>,
    /// Distance along the camera's view direction, corrected for fisheye.
    pub distance: f64,
}

impl RayHit<'_> {
    /// Creates the sentinel hit for a ray that meets nothing.
    #[must_use]
    pub fn infinity(ray: Ray) -> Self {
        Self {
            ray,
            polygon: None,
            edge: None,
            intersection: None,
            distance: f64::INFINITY,
        }
    }

    /// Returns `true` for the sentinel hit.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.edge.is_none()
    }

    /// Returns `true` if the edge hit is see-through.
    #[must_use]
    pub fn is_translucent(&self) -> bool {
        self.edge.is_some_and(|(_, e)| e.is_translucent())
    }

    /// Returns `true` if the edge hit does not block movement.
    #[must_use]
    pub fn is_immaterial(&self) -> bool {
        self.edge.is_some_and(|(_, e)| e.immaterial)
    }
}

/// How much of a ray's path runs through translucent walls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntersectionStats {
    /// Translucent hits in front of the first opaque one.
    pub amount: usize,
    /// `amount` as a fraction of all hits.
    pub percentage: f64,
}

impl IntersectionStats {
    /// Computes the statistics of hits sorted by distance.
    #[must_use]
    pub fn of(hits: &[RayHit<'_>]) -> Self {
        if hits.is_empty() {
            return Self::default();
        }
        let amount = hits.iter().take_while(|h| h.is_translucent()).count();
        #[allow(clippy::cast_precision_loss)]
        let percentage = amount as f64 / hits.len() as f64;
        Self { amount, percentage }
    }
}

/// The outcome of casting one ray.
#[derive(Debug, Clone)]
pub struct CastRay<'g> {
    /// Surviving hits, nearest first; never empty.
    pub hits: Vec<RayHit<'g>>,
    pub stats: IntersectionStats,
}

/// Decides which of a ray's hits are rendered.
///
/// Receives the hits sorted nearest first and removes the ones to skip.
/// Closures taking `&mut Vec<RayHit<'_>>` implement it too.
pub trait HitFilter {
    fn filter(&self, hits: &mut Vec<RayHit<'_>>);
}

impl<F> HitFilter for F
where
    F: Fn(&mut Vec<RayHit<'_>>),
{
    fn filter(&self, hits: &mut Vec<RayHit<'_>>) {
        self(hits);
    }
}

/// Keeps only the nearest hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestHit;

impl HitFilter for ClosestHit {
    fn filter(&self, hits: &mut Vec<RayHit<'_>>) {
        hits.truncate(1);
    }
}

/// Drops every hit on an immaterial edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughImmaterialEdges;

impl HitFilter for PassThroughImmaterialEdges {
    fn filter(&self, hits: &mut Vec<RayHit<'_>>) {
        hits.retain(|h| !h.is_immaterial());
    }
}

/// Keeps the translucent hits up to and including the first opaque one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughTranslucentEdges;

impl HitFilter for PassThroughTranslucentEdges {
    fn filter(&self, hits: &mut Vec<RayHit<'_>>) {
        if let Some(opaque) = hits.iter().position(|h| !h.is_translucent()) {
            hits.truncate(opaque + 1);
        }
    }
}

/// Intersects one ray with every edge of every polygon.
pub struct DetectCollisions {
    ray: Ray,
}

impl DetectCollisions {
    /// Creates a new `DetectCollisions` query.
    #[must_use]
    pub fn new(ray: Ray) -> Self {
        Self { ray }
    }

    /// Executes the query, returning hits in enumeration order.
    #[must_use]
    pub fn execute<'g>(&self, geometry: &'g Geometry) -> Vec<RayHit<'g>> {
        let correction = self.ray.angle.cos();
        let mut hits = Vec::new();
        for polygon in geometry.polygons() {
            for (id, edge, segment) in polygon.edges() {
                if let Some(point) = intersect_ray(&self.ray, &segment) {
                    hits.push(RayHit {
                        ray: self.ray,
                        polygon: Some(polygon.as_ref()),
                        edge: Some((id, edge)),
                        intersection: Some(point),
                        distance: distance(&self.ray.origin, &point) * correction,
                    });
                }
            }
        }
        hits
    }
}

/// Casts a batch of rays and filters each ray's hits.
pub struct CastRays<'r, F = ClosestHit> {
    rays: &'r [Ray],
    filter: F,
}

impl<'r> CastRays<'r> {
    /// Creates a new `CastRays` query that keeps the nearest hit of each ray.
    #[must_use]
    pub fn new(rays: &'r [Ray]) -> Self {
        Self {
            rays,
            filter: ClosestHit,
        }
    }
}

impl<'r, F: HitFilter> CastRays<'r, F> {
    /// Replaces the hit filter.
    #[must_use]
    pub fn with_filter<G: HitFilter>(self, filter: G) -> CastRays<'r, G> {
        CastRays {
            rays: self.rays,
            filter,
        }
    }

    /// Executes the query, one result per ray in input order.
    ///
    /// A ray without hits, or whose hits were all filtered out, yields the
    /// sentinel hit. Statistics are taken before filtering.
    #[must_use]
    pub fn execute<'g>(&self, geometry: &'g Geometry) -> Vec<CastRay<'g>> {
        self.rays.iter().map(|ray| self.cast(*ray, geometry)).collect()
    }

    fn cast<'g>(&self, ray: Ray, geometry: &'g Geometry) -> CastRay<'g> {
        let mut hits = DetectCollisions::new(ray).execute(geometry);
        if hits.is_empty() {
            return CastRay {
                hits: vec![RayHit::infinity(ray)],
                stats: IntersectionStats::default(),
            };
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        let stats = IntersectionStats::of(&hits);
        self.filter.filter(&mut hits);
        if hits.is_empty() {
            hits.push(RayHit::infinity(ray));
        }
        CastRay { hits, stats }
    }
}
