//! `fp-tour` — decide the visiting order and expand it into waypoints.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`two_opt`]  | Seeded multi-restart 2-opt over a `PathTable`             |
//! | [`finder`]   | `TourFinder`: rotation, first-leg reorder, splicing       |
//! | [`error`]    | `TourError`, `TourResult<T>`                              |
//!
//! # Tour shape
//!
//! A tour is a `Vec<NodeId>` that starts and ends at the launch point and
//! lists every zone corner the vehicle must pass on the way.  With no
//! surveys left it is just `[launch]`.

pub mod error;
pub mod finder;
pub mod two_opt;

#[cfg(test)]
mod tests;

pub use error::{TourError, TourResult};
pub use finder::TourFinder;
pub use two_opt::{tour_cost, two_opt};
