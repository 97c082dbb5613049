//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `dc-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("a route needs at least 2 points, got {0}")]
    DegenerateRoute(usize),

    #[error("route point {index} is not finite")]
    NonFinitePoint { index: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
