//! `fp-plan` — the survey flight planning loop.
//!
//! # Planning loop
//!
//! ```text
//! route all pairs of {launch} ∪ surveys
//! loop:
//!   ① Tour   — 2-opt order, rotated to launch, sub-paths spliced in.
//!   ② Moves  — beam search between waypoints, reading markers attached.
//!   ③ Budget — moves ≤ move_limit → done.
//!              otherwise drop the most isolated survey, re-route, retry;
//!              with one survey left → MoveBudgetExceeded.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Builds path tables on Rayon's thread pool.             |
//! | `serde`    | Serde derives on core, spatial and move types.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fp_core::{PlannerConfig, Position};
//! use fp_plan::{load_surveys_csv, load_zones_csv, NoopObserver, PlannerBuilder};
//! use fp_spatial::VisibilityRouter;
//!
//! let surveys = load_surveys_csv("surveys.csv".as_ref())?;
//! let zones = load_zones_csv("zones.csv".as_ref())?;
//! let mut planner = PlannerBuilder::new(config, launch, surveys, VisibilityRouter)
//!     .zones(zones)
//!     .build()?;
//! let plan = planner.plan(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod observer;
pub mod planner;


pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use loader::{load_surveys_csv, load_surveys_reader, load_zones_csv, load_zones_reader};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{FlightPlan, Planner};
