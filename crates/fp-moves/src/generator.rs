//! Tour → move sequence.

use log::debug;

use fp_core::{NodeId, PlannerConfig, Position, Survey};
use fp_spatial::{MapNode, SurveyMap};

use crate::{BeamSearch, Move, MoveError, MoveResult};

/// Walks a tour waypoint by waypoint, appending beam-search moves and
/// marking the move after which each survey is read.
///
/// A reading needs at least one move since the previous reading.  When a
/// survey is already in range with no move since the last one, a single move
/// is forced toward it, followed by the reverse move if that overshoots the
/// sensing radius.
pub struct MoveGenerator<'a> {
    map:    &'a SurveyMap,
    search: BeamSearch<'a>,

    moves:                    Vec<Move>,
    moved_since_last_reading: bool,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(map: &'a SurveyMap, config: &PlannerConfig) -> Self {
        Self {
            map,
            search: BeamSearch::new(map, config),
            moves: Vec::new(),
            moved_since_last_reading: false,
        }
    }

    /// Moves for `tour`, starting at its first waypoint.
    ///
    /// Sets `visited` on every survey read; `surveys` is indexed by
    /// `SurveyId`.
    pub fn generate(mut self, tour: &[NodeId], surveys: &mut [Survey]) -> MoveResult<Vec<Move>> {
        let Some((&first, rest)) = tour.split_first() else {
            return Ok(Vec::new());
        };
        let map = self.map;
        let origin = map.pos(first);
        for &next in rest {
            self.advance(origin, map.node(next), surveys)?;
        }
        debug!("{} waypoints -> {} moves", tour.len(), self.moves.len());
        Ok(self.moves)
    }

    fn position(&self, origin: Position) -> Position {
        self.moves.last().map_or(origin, |m| m.end)
    }

    fn advance(&mut self, origin: Position, next: &MapNode, surveys: &mut [Survey]) -> MoveResult<()> {
        let here = self.position(origin);
        if !next.within_range(here) {
            let leg = self.search.search(here, next)?;
            self.moves.extend(leg);
            self.moved_since_last_reading = true;
        }

        let Some(sid) = next.survey() else {
            return Ok(());
        };

        if !self.moved_since_last_reading {
            let here = self.position(origin);
            let mv = self
                .search
                .candidates(here, next.pos, 1)
                .into_iter()
                .next()
                .ok_or(MoveError::Boxed { depth: 1, from: here })?;
            self.moves.push(mv);
            if !next.within_range(mv.end) {
                self.moves.push(mv.reversed(self.search.move_size()));
            }
        }

        let survey = surveys.get_mut(sid.index()).ok_or(MoveError::UnknownSurvey(sid))?;
        if let Some(last) = self.moves.last_mut() {
            last.reading = Some(sid);
        }
        survey.visited = true;
        self.moved_since_last_reading = false;
        Ok(())
    }
}
