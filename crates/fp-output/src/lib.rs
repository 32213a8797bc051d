//! `fp-output` — flight plan writers for the survey flight planner.
//!
//! The CSV backend creates two files per plan, named after a caller-chosen
//! stem (typically the survey date):
//!
//! | File                    | Contents                                             |
//! |-------------------------|------------------------------------------------------|
//! | `flightpath-<stem>.txt` | One headerless line per move                         |
//! | `readings-<stem>.csv`   | One row per survey with its reading and visit status |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`PlanOutputObserver`], which implements `fp_plan::PlanObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fp_output::{CsvWriter, PlanOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"), "15-06-2021").unwrap();
//! let mut obs = PlanOutputObserver::new(writer);
//! planner.plan(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PlanOutputObserver;
pub use row::{MoveRow, SurveyStatusRow};
pub use writer::OutputWriter;
