//! Error types for clustering passes

use thiserror::Error;

/// Errors a projector can report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// The projector has no usable viewport yet.
    #[error("projection not ready: {0}")]
    NotReady(String),

    /// The projector produced a NaN or infinite coordinate.
    #[error("projection produced a non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors that abort a clustering pass
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusterError {
    /// Grid size must be a positive, finite number of pixels.
    #[error("invalid grid size {0}: must be a positive number of pixels")]
    InvalidGridSize(f64),

    /// The projector failed somewhere during the pass.
    #[error("projector failure: {0}")]
    Projection(#[from] ProjectionError),
}
