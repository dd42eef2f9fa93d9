use thiserror::Error;

/// Top-level error type for the trigon crate.
#[derive(Debug, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("report output failed: {0}")]
    Report(#[from] std::io::Error),
}

/// Errors raised while validating triangle parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;
