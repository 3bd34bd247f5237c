use thiserror::Error;

use crate::math::Point2;
use crate::topology::PolygonId;

/// Top-level error type for the polywall geometry kernel.
#[derive(Debug, Error)]
pub enum PolywallError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building a polygon from points or stored edges.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error(
        "polygon cannot contain jumps: start of edge should be equal to previous edge's end: \
         {previous} does not equal {next}"
    )]
    Malformed { previous: Point2, next: Point2 },

    #[error("polygon is not closed: last edge ends at {last} but the first edge starts at {first}")]
    NotClosed { first: Point2, last: Point2 },

    #[error("polygon needs at least 3 distinct vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// Errors related to entity lookup and cycle structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("broken edge cycle: {0}")]
    BrokenCycle(String),

    #[error("polygon id {0} is already present in the geometry")]
    DuplicateId(PolygonId),
}

/// Errors related to editing operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolywallError`].
pub type Result<T> = std::result::Result<T, PolywallError>;
