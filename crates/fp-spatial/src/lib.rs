//! `fp-spatial` — survey map, exclusion zones, and zone-avoiding routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`map`]        | `SurveyMap` node arena, `MapNode`, `SurveyMapBuilder`     |
//! | [`zone`]       | `ExclusionZone`, `ZoneSet` (R-tree over zone envelopes)   |
//! | [`visibility`] | `VisibilityGraph`, `Edge`, Dijkstra over the graph        |
//! | [`router`]     | `Router` trait, `VisibilityRouter`, `Path`, `PathTable`   |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds `PathTable` pairs on Rayon's thread pool.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod error;
pub mod map;
pub mod router;
pub mod visibility;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use map::{MapNode, NodeKind, SurveyMap, SurveyMapBuilder};
pub use router::{Path, PathTable, Router, VisibilityRouter};
pub use visibility::{Edge, VisibilityGraph};
pub use zone::{ExclusionZone, ZoneSet};
