//! `PlanOutputObserver<W>`: bridges `PlanObserver` to an `OutputWriter`.

use fp_core::Survey;
use fp_plan::{FlightPlan, PlanObserver};

use crate::row::{MoveRow, SurveyStatusRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that writes the accepted plan and survey states to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `PlanObserver`
/// methods have no return value.  After `planner.plan()` returns, check for
/// errors with [`take_error`][Self::take_error].  Nothing is written when
/// planning fails.
pub struct PlanOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlanOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `planner.plan()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlanObserver for PlanOutputObserver<W> {
    fn on_plan_end(&mut self, plan: &FlightPlan, surveys: &[Survey]) {
        let moves: Vec<MoveRow> = plan
            .moves
            .iter()
            .enumerate()
            .map(|(i, mv)| MoveRow::from_move(i, mv, surveys))
            .collect();
        let result = self.writer.write_moves(&moves);
        self.store_err(result);

        let status: Vec<SurveyStatusRow> = surveys.iter().map(SurveyStatusRow::from).collect();
        let result = self.writer.write_survey_status(&status);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
