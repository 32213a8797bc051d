//! The `Planner` and its retry loop.

use log::{debug, info, warn};

use fp_core::{NodeId, PlannerConfig, Position, Survey, SurveyId};
use fp_moves::{Move, MoveGenerator};
use fp_spatial::{Router, SurveyMap};
use fp_tour::TourFinder;

use crate::{PlanError, PlanObserver, PlanResult};

// ── FlightPlan ────────────────────────────────────────────────────────────────

/// An accepted plan: moves within budget and the tour they follow.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    pub moves: Vec<Move>,
    /// Waypoints from launch back to launch, zone corners included.
    pub tour: Vec<NodeId>,
    /// Planning attempts made, including the accepted one.
    pub attempts: usize,
    /// Surveys dropped to fit the budget, in drop order.
    pub dropped: Vec<SurveyId>,

    pub launch:        Position,
    pub return_radius: f64,
}

impl FlightPlan {
    /// `true` if the last move ends within the return radius of launch.
    /// A plan with no moves never left.
    pub fn ends_near_launch(&self) -> bool {
        self.moves
            .last()
            .is_none_or(|m| m.end.distance(self.launch) < self.return_radius)
    }

    pub fn reading_count(&self) -> usize {
        self.moves.iter().filter(|m| m.reading.is_some()).count()
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Map, survey records and router for one planning run.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<R: Router> {
    pub config: PlannerConfig,

    /// Launch point, surveys and zones.  Immutable once built.
    pub map: SurveyMap,

    /// Survey records indexed by `SurveyId`.  `visited` reflects the most
    /// recent attempt.
    pub surveys: Vec<Survey>,

    pub router: R,
}

impl<R: Router> Planner<R> {
    /// Run the planning loop until a plan fits `move_limit`.
    ///
    /// Each over-budget attempt drops the survey with the highest summed
    /// path cost to the others, then retries from tour construction.  Fails
    /// with [`PlanError::MoveBudgetExceeded`] once a single survey remains
    /// and the plan still does not fit.
    pub fn plan<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<FlightPlan> {
        let limit = self.config.move_limit;
        let mut finder = TourFinder::new(&self.map, &self.router, &self.config)?;
        let mut dropped = Vec::new();
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!("attempt {attempt}: {} surveys", finder.survey_count());
            observer.on_attempt_start(attempt, finder.survey_count());

            for survey in &mut self.surveys {
                survey.visited = false;
            }

            let tour = finder.find_tour();
            observer.on_tour(attempt, &tour);

            let moves = MoveGenerator::new(&self.map, &self.config).generate(&tour, &mut self.surveys)?;
            observer.on_moves(attempt, &moves);

            if moves.len() <= limit {
                info!("accepted {} moves (limit {limit}) after {attempt} attempts", moves.len());
                let plan = FlightPlan {
                    moves,
                    tour,
                    attempts: attempt,
                    dropped,
                    launch: self.map.pos(self.map.launch()),
                    return_radius: self.config.return_radius,
                };
                observer.on_plan_end(&plan, &self.surveys);
                return Ok(plan);
            }
            debug!("{} moves over limit {limit}", moves.len());

            let Some(node) = finder.remove_most_isolated()? else {
                return Err(PlanError::MoveBudgetExceeded { moves: moves.len(), limit });
            };
            if let Some(id) = self.map.node(node).survey() {
                let survey = &self.surveys[id.index()];
                warn!("dropping {id} ({}) to fit {limit} moves", survey.location);
                observer.on_survey_dropped(id, survey);
                dropped.push(id);
            }
        }
    }
}
