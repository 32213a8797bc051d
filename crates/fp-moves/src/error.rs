//! Move-synthesis error type.

use thiserror::Error;

use fp_core::{Position, SurveyId};

/// Errors produced by `fp-moves`.
#[derive(Debug, Error)]
pub enum MoveError {
    /// Every heading from every open leaf was blocked.
    #[error("no feasible move at search depth {depth} from {from}")]
    Boxed { depth: usize, from: Position },

    #[error("target not reached within {depth} moves from {from}")]
    SearchExhausted { depth: usize, from: Position },

    #[error("tour visits {0} but no such survey was supplied")]
    UnknownSurvey(SurveyId),
}

pub type MoveResult<T> = Result<T, MoveError>;
