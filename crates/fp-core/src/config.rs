//! Planner configuration.
//!
//! All distances are in degrees, the same planar units `Position` uses.  The
//! defaults describe a quadcopter surveying a university campus: readings
//! within 0.0002°, moves of 0.0003°, at most 150 moves per flight.

use crate::{segments_intersect, FpError, FpResult, Position};

// ── Confinement ───────────────────────────────────────────────────────────────

/// Axis-aligned rectangle the vehicle must never leave.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Confinement {
    pub north: f64,
    pub south: f64,
    pub west:  f64,
    pub east:  f64,
}

impl Confinement {
    /// Corners in ring order: NW, NE, SE, SW.
    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.north, self.west),
            Position::new(self.north, self.east),
            Position::new(self.south, self.east),
            Position::new(self.south, self.west),
        ]
    }

    /// Strictly inside the rectangle (the boundary itself is off limits).
    pub fn contains(&self, p: Position) -> bool {
        p.lat < self.north && p.lat > self.south && p.lon > self.west && p.lon < self.east
    }

    /// `true` if segment `a–b` touches any side of the rectangle.
    pub fn crossed_by(&self, a: Position, b: Position) -> bool {
        let c = self.corners();
        (0..4).any(|i| segments_intersect(a, b, c[i], c[(i + 1) % 4]))
    }
}

impl Default for Confinement {
    fn default() -> Self {
        Self {
            north: 55.946233,
            south: 55.942617,
            west:  -3.192473,
            east:  -3.184319,
        }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Top-level planning configuration.
///
/// Typically built from `Default` and tweaked by the application, or loaded
/// from a file with the `serde` feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// A reading counts when the vehicle ends a move closer than this to the
    /// survey point.
    pub sensing_radius: f64,

    /// The flight is complete once the vehicle is closer than this to the
    /// launch point.
    pub return_radius: f64,

    /// A zone-corner waypoint counts as passed within this radius.
    pub vertex_radius: f64,

    /// Length of every move.
    pub move_size: f64,

    /// Hard cap on the number of moves in a flight.
    pub move_limit: usize,

    /// Random restarts of the 2-opt tour heuristic.
    pub two_opt_restarts: usize,

    /// Branching factor at the first beam-search depth.  Shrinks by one per
    /// depth down to 1.
    pub beam_width: usize,

    /// Beam-search depth at which a leg is abandoned as unreachable.
    pub max_search_depth: usize,

    /// Seed for the tour heuristic.  The same seed always yields the same
    /// flight.
    pub seed: u64,

    pub confinement: Confinement,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            sensing_radius:   0.0002,
            return_radius:    0.0003,
            vertex_radius:    0.0003,
            move_size:        0.0003,
            move_limit:       150,
            two_opt_restarts: 100,
            beam_width:       7,
            max_search_depth: 500,
            seed:             0,
            confinement:      Confinement::default(),
        }
    }
}

impl PlannerConfig {
    /// Reject configurations the planner cannot run with.
    pub fn validate(&self) -> FpResult<()> {
        let positive = [
            ("sensing_radius", self.sensing_radius),
            ("return_radius", self.return_radius),
            ("vertex_radius", self.vertex_radius),
            ("move_size", self.move_size),
        ];
        for (name, v) in positive {
            if v.is_nan() || v <= 0.0 {
                return Err(FpError::Config(format!("{name} must be positive, got {v}")));
            }
        }
        if self.beam_width == 0 {
            return Err(FpError::Config("beam_width must be at least 1".into()));
        }
        if self.max_search_depth == 0 {
            return Err(FpError::Config("max_search_depth must be at least 1".into()));
        }
        let c = &self.confinement;
        if c.north <= c.south || c.east <= c.west {
            return Err(FpError::Config(format!(
                "confinement area is empty: north {} south {} west {} east {}",
                c.north, c.south, c.west, c.east
            )));
        }
        Ok(())
    }

    /// Launch-to-first-survey distance below which the first survey is
    /// better visited last (the mandatory first move would overshoot it).
    #[inline]
    pub fn first_leg_threshold(&self) -> f64 {
        self.move_size - self.sensing_radius
    }
}
