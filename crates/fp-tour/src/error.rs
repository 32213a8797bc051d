//! Tour-subsystem error type.

use thiserror::Error;

use fp_spatial::SpatialError;

/// Errors produced by `fp-tour`.
#[derive(Debug, Error)]
pub enum TourError {
    #[error("routing failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type TourResult<T> = Result<T, TourError>;
