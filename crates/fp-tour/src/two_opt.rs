//! Multi-restart 2-opt over a symmetric cost table.
//!
//! Each restart shuffles the table positions, then repeatedly applies the
//! single best segment reversal until no reversal shortens the closed tour.
//! The cheapest restart wins; ties keep the earlier one.  All shuffles come
//! from one `TourRng`, so a seed reproduces the tour exactly.

use fp_core::TourRng;
use fp_spatial::PathTable;

/// Reversals must gain more than this to count as an improvement.
const MIN_GAIN: f64 = 1e-12;

/// Cost of the closed tour visiting `order` (table positions) in sequence.
pub fn tour_cost(table: &PathTable, order: &[usize]) -> f64 {
    let n = order.len();
    (0..n).map(|i| table.cost(order[i], order[(i + 1) % n])).sum()
}

/// Best closed visiting order over every table position.
///
/// Tables of three or fewer positions have one distinct cycle up to
/// direction; they come back in table order without consuming randomness.
pub fn two_opt(table: &PathTable, restarts: usize, rng: &mut TourRng) -> Vec<usize> {
    let n = table.len();
    let identity: Vec<usize> = (0..n).collect();
    if n <= 3 {
        return identity;
    }

    let mut best = identity.clone();
    let mut best_cost = f64::INFINITY;
    for _ in 0..restarts.max(1) {
        let mut order = identity.clone();
        rng.shuffle(&mut order);
        improve(table, &mut order);
        let cost = tour_cost(table, &order);
        if cost < best_cost {
            best_cost = cost;
            best = order;
        }
    }
    best
}

/// Apply best-improvement 2-opt moves to `order` until none remain.
fn improve(table: &PathTable, order: &mut [usize]) {
    let n = order.len();
    loop {
        let mut best_gain = MIN_GAIN;
        let mut best_move = None;

        for i in 0..n - 1 {
            for j in (i + 2)..n {
                // Reversing the whole cycle but one node is a no-op.
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (a, b) = (order[i], order[i + 1]);
                let (c, d) = (order[j], order[(j + 1) % n]);
                let gain = table.cost(a, b) + table.cost(c, d)
                    - table.cost(a, c)
                    - table.cost(b, d);
                if gain > best_gain {
                    best_gain = gain;
                    best_move = Some((i, j));
                }
            }
        }

        match best_move {
            Some((i, j)) => order[i + 1..=j].reverse(),
            None => return,
        }
    }
}
