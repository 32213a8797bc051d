//! The `OutputWriter` trait implemented by backend writers.

use crate::{MoveRow, OutputResult, SurveyStatusRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`PlanOutputObserver::take_error`][crate::PlanOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the accepted flight path, in order.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Write the final status of every survey.
    fn write_survey_status(&mut self, rows: &[SurveyStatusRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
