//! Spatial-subsystem error type.

use thiserror::Error;

use fp_core::{NodeId, ZoneId};

/// Errors produced by `fp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("map has no launch point")]
    MissingLaunch,

    #[error("{zone} has {vertices} vertices; a zone needs at least 3")]
    DegenerateZone { zone: ZoneId, vertices: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
