//! A single fixed-length move.

use fp_core::{Position, SurveyId};

use crate::Heading;

/// One step of the flight: `move_size` along `heading` from `start`.
///
/// `reading` is set on the move after which a survey is read.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub heading: Heading,
    pub start:   Position,
    pub end:     Position,
    pub reading: Option<SurveyId>,
}

impl Move {
    pub fn new(heading: Heading, start: Position, length: f64) -> Self {
        Self {
            heading,
            start,
            end: start.project(heading.degrees() as f64, length),
            reading: None,
        }
    }

    /// The move straight back from this one's end.
    pub fn reversed(&self, length: f64) -> Self {
        Self::new(self.heading.reverse(), self.end, length)
    }
}
