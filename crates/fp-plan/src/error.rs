//! Planner error type.

use thiserror::Error;

use fp_core::{FpError, Position};
use fp_moves::MoveError;
use fp_spatial::SpatialError;
use fp_tour::TourError;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planner configuration error: {0}")]
    Config(#[from] FpError),

    #[error("map error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("tour error: {0}")]
    Tour(#[from] TourError),

    #[error("move synthesis error: {0}")]
    Moves(#[from] MoveError),

    #[error("{what} at {pos} lies outside the confinement area")]
    OutsideConfinement { what: String, pos: Position },

    #[error("{moves} moves needed with one survey left; limit is {limit}")]
    MoveBudgetExceeded { moves: usize, limit: usize },

    #[error("CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
