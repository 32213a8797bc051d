//! Planner observer trait for progress reporting and output collection.

use fp_core::{NodeId, Survey, SurveyId};
use fp_moves::Move;

use crate::FlightPlan;

/// Callbacks invoked by [`Planner::plan`][crate::Planner::plan] at key points
/// in the planning loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — attempt printer
///
/// ```rust,ignore
/// struct AttemptPrinter;
///
/// impl PlanObserver for AttemptPrinter {
///     fn on_moves(&mut self, attempt: usize, moves: &[Move]) {
///         println!("attempt {attempt}: {} moves", moves.len());
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called before each attempt.  `surveys` is how many are still in play.
    fn on_attempt_start(&mut self, _attempt: usize, _surveys: usize) {}

    /// Called with the full waypoint tour of an attempt.
    fn on_tour(&mut self, _attempt: usize, _tour: &[NodeId]) {}

    /// Called with the moves of an attempt, before the budget check.
    fn on_moves(&mut self, _attempt: usize, _moves: &[Move]) {}

    /// Called when a survey is dropped to fit the move budget.
    fn on_survey_dropped(&mut self, _id: SurveyId, _survey: &Survey) {}

    /// Called once with the accepted plan and the final survey states.
    fn on_plan_end(&mut self, _plan: &FlightPlan, _surveys: &[Survey]) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
