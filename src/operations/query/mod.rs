mod raycast;
mod select_region;

pub use hit_test::DetectCollisionAt;
pub use raycast::{
    CastRay, CastRays, ClosestHit, DetectCollisions, HitFilter, IntersectionStats,
    PassThroughImmaterialEdges, PassThroughTranslucentEdges, RayHit,
};
pub use select_region::SelectRegion;
