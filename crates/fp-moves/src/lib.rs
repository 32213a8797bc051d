//! `fp-moves` — turn a waypoint tour into fixed-length moves.
//!
//! The vehicle can only fly `move_size` at a time along one of 36 headings.
//! This crate searches for move sequences that reach each waypoint without
//! leaving the confinement area or touching a zone, and marks the move after
//! which each survey reading is taken.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`heading`]   | `Heading`, the 36 quantized directions                  |
//! | [`step`]      | `Move`                                                   |
//! | [`beam`]      | `BeamSearch`: candidate headings and bounded beam search |
//! | [`generator`] | `MoveGenerator`: tour → moves, reading markers           |
//! | [`error`]     | `MoveError`, `MoveResult<T>`                             |

pub mod beam;
pub mod error;
pub mod generator;
pub mod heading;
pub mod step;


pub use beam::BeamSearch;
pub use error::{MoveError, MoveResult};
pub use generator::MoveGenerator;
pub use heading::Heading;
pub use step::Move;
