//! `fp-core` — foundational types for the survey flight planner.
//!
//! Every other `fp-*` crate depends on this one.  It has no `fp-*`
//! dependencies and only `rand` and `thiserror` from outside (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `ZoneId`, `SurveyId`                             |
//! | [`geo`]      | `Position`, segment intersection, point-in-polygon         |
//! | [`survey`]   | `Survey`, `Reading`                                        |
//! | [`config`]   | `PlannerConfig`, `Confinement`                             |
//! | [`rng`]      | `TourRng`                                                  |
//! | [`error`]    | `FpError`, `FpResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod survey;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Confinement, PlannerConfig};
pub use error::{FpError, FpResult};
pub use geo::{point_in_polygon, segments_intersect, Position};
pub use ids::{NodeId, SurveyId, ZoneId};
pub use rng::TourRng;
pub use survey::{Reading, Survey};
