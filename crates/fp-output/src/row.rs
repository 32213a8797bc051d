//! Plain data row types written by output backends.

use fp_core::{Reading, Survey};
use fp_moves::Move;

/// One line of the flight path.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRow {
    /// 1-based position in the plan.
    pub index:     usize,
    pub start_lon: f64,
    pub start_lat: f64,
    pub heading:   u16,
    pub end_lon:   f64,
    pub end_lat:   f64,
    /// Location token of the survey read after this move.
    pub location:  Option<String>,
}

impl MoveRow {
    /// Row for `moves[i]`, resolving its reading marker against `surveys`.
    pub fn from_move(i: usize, mv: &Move, surveys: &[Survey]) -> Self {
        Self {
            index:     i + 1,
            start_lon: mv.start.lon,
            start_lat: mv.start.lat,
            heading:   mv.heading.degrees(),
            end_lon:   mv.end.lon,
            end_lat:   mv.end.lat,
            location:  mv
                .reading
                .and_then(|id| surveys.get(id.index()))
                .map(|s| s.location.clone()),
        }
    }
}

/// Final state of one survey.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyStatusRow {
    pub location: String,
    pub lat:      f64,
    pub lon:      f64,
    pub battery:  f32,
    pub reading:  Reading,
    pub visited:  bool,
}

impl From<&Survey> for SurveyStatusRow {
    fn from(s: &Survey) -> Self {
        Self {
            location: s.location.clone(),
            lat:      s.pos.lat,
            lon:      s.pos.lon,
            battery:  s.battery,
            reading:  s.reading,
            visited:  s.visited,
        }
    }
}
