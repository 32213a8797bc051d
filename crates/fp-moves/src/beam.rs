//! Bounded-width beam search over quantized headings.
//!
//! # Search tree
//!
//! Tree nodes live in one arena `Vec<BeamNode>` and point at their parent by
//! index; the root (the start position) is implicit.  Each depth expands
//! every open leaf into up to `width` children, checking children in order
//! as they are made.  The first child that ends within the target's radius
//! wins, so the result is the shallowest hit, earliest in candidate order.
//! `width` shrinks by one per depth down to a floor of one.
//!
//! # Candidate order
//!
//! The bearing to the target is rounded to the nearest heading.  Then
//! headings alternate outward from it, one step up and one step down at a
//! time, the side nearer the true bearing first (ties try the lower heading
//! first).  A heading is feasible when its move neither crosses the
//! confinement boundary nor touches a zone.

use log::{debug, trace};

use fp_core::{PlannerConfig, Position};
use fp_spatial::{MapNode, SurveyMap};

use crate::{Heading, Move, MoveError, MoveResult};

struct BeamNode {
    parent: Option<usize>,
    mv:     Move,
}

/// Move search over one map.
pub struct BeamSearch<'a> {
    map:       &'a SurveyMap,
    move_size: f64,
    width:     usize,
    max_depth: usize,
}

impl<'a> BeamSearch<'a> {
    pub fn new(map: &'a SurveyMap, config: &PlannerConfig) -> Self {
        Self {
            map,
            move_size: config.move_size,
            width:     config.beam_width,
            max_depth: config.max_search_depth,
        }
    }

    pub fn move_size(&self) -> f64 {
        self.move_size
    }

    /// `true` if `mv` stays inside the confinement area and clear of zones.
    pub fn feasible(&self, mv: &Move) -> bool {
        !self.map.confinement.crossed_by(mv.start, mv.end)
            && !self.map.zones.any_intersects(mv.start, mv.end)
    }

    /// Up to `n` feasible moves from `start` toward `target`, best first.
    pub fn candidates(&self, start: Position, target: Position, n: usize) -> Vec<Move> {
        let bearing = start.bearing(target);
        let rounded = Heading::from_bearing(bearing);

        let mut order = Vec::with_capacity(Heading::COUNT as usize);
        order.push(rounded);
        let half = Heading::COUNT as i32 / 2;
        for k in 1..=half {
            let (up, down) = (rounded.rotate(k), rounded.rotate(-k));
            if up == down {
                order.push(up);
            } else if up.angular_distance(bearing) < down.angular_distance(bearing) {
                order.extend([up, down]);
            } else {
                order.extend([down, up]);
            }
        }

        order
            .into_iter()
            .map(|h| Move::new(h, start, self.move_size))
            .filter(|mv| self.feasible(mv))
            .take(n)
            .collect()
    }

    /// Moves from `start` until within `target`'s radius.  Empty if already
    /// there.
    pub fn search(&self, start: Position, target: &MapNode) -> MoveResult<Vec<Move>> {
        if target.within_range(start) {
            return Ok(Vec::new());
        }

        let mut arena: Vec<BeamNode> = Vec::new();
        // `None` is the root.
        let mut frontier: Vec<Option<usize>> = vec![None];
        let mut width = self.width.max(1);

        for depth in 1..=self.max_depth {
            let mut next = Vec::new();
            for &leaf in &frontier {
                let from = leaf.map_or(start, |i| arena[i].mv.end);
                for mv in self.candidates(from, target.pos, width) {
                    arena.push(BeamNode { parent: leaf, mv });
                    let ix = arena.len() - 1;
                    if target.within_range(mv.end) {
                        debug!("beam search reached {} in {depth} moves ({} nodes)", target.pos, arena.len());
                        return Ok(unwind(&arena, ix));
                    }
                    next.push(Some(ix));
                }
            }

            if next.is_empty() {
                return Err(MoveError::Boxed { depth, from: start });
            }
            trace!("depth {depth}: {} leaves, width {width}", next.len());
            frontier = next;
            width = width.saturating_sub(1).max(1);
        }

        Err(MoveError::SearchExhausted { depth: self.max_depth, from: start })
    }
}

/// Moves from the root down to `arena[ix]`.
fn unwind(arena: &[BeamNode], ix: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut cur = Some(ix);
    while let Some(i) = cur {
        moves.push(arena[i].mv);
        cur = arena[i].parent;
    }
    moves.reverse();
    moves
}
