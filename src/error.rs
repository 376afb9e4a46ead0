use thiserror::Error;

/// Top-level error type for polygon inset operations.
#[derive(Debug, Error)]
pub enum InsetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by degenerate geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("zero-length edge between vertex {index} and its successor")]
    ZeroLengthEdge { index: usize },

    #[error("edges meeting at vertex {index} are parallel")]
    ParallelEdges { index: usize },

    #[error("degenerate ray: apex coincides with an endpoint")]
    DegenerateRay,
}

/// Errors related to inset operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("inset vertex {index} is not finite")]
    NonFiniteVertex { index: usize },
}

/// Convenience type alias for results using [`InsetError`].
pub type Result<T> = std::result::Result<T, InsetError>;
