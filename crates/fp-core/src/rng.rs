//! Deterministic RNG for the tour heuristic.
//!
//! The 2-opt heuristic starts every restart from a random permutation.  All
//! of that randomness flows from one `SmallRng` seeded with the caller's
//! seed, so a given seed always reproduces the same tour.  Planning is
//! single-threaded; there is no per-thread seeding scheme.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seeded RNG used by the tour constructor.
pub struct TourRng(SmallRng);

impl TourRng {
    pub fn new(seed: u64) -> Self {
        TourRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
