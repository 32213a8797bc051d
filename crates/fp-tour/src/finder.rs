//! Full-tour construction over the launch point and remaining surveys.
//!
//! `TourFinder` owns the working node set (`nodes[0]` is always the launch
//! point) and the all-pairs `PathTable` over it.  The table is rebuilt
//! whenever a node is dropped.
//!
//! # Assembly
//!
//! 1. 2-opt picks a closed visiting order over the table positions.
//! 2. The order is rotated so the launch point comes first.
//! 3. If the first survey is nearer to launch than
//!    `move_size - sensing_radius`, it is visited last instead.  The first
//!    reading needs a prior move, and a move that short would overshoot.
//! 4. Cached sub-paths are concatenated, dropping each duplicated join node,
//!    and the loop is closed back at launch.

use log::debug;

use fp_core::{NodeId, PlannerConfig, TourRng};
use fp_spatial::{PathTable, Router, SurveyMap};

use crate::two_opt::{tour_cost, two_opt};
use crate::TourResult;

pub struct TourFinder<'a, R: Router> {
    map:    &'a SurveyMap,
    router: &'a R,

    /// Launch point followed by every survey still in play.
    nodes: Vec<NodeId>,
    table: PathTable,

    restarts:            usize,
    seed:                u64,
    first_leg_threshold: f64,
}

impl<'a, R: Router> TourFinder<'a, R> {
    /// Route every pair of {launch} ∪ surveys on `map`.
    pub fn new(map: &'a SurveyMap, router: &'a R, config: &PlannerConfig) -> TourResult<Self> {
        let nodes: Vec<NodeId> = std::iter::once(map.launch())
            .chain(map.survey_nodes().iter().copied())
            .collect();
        let table = PathTable::build(router, map, &nodes)?;
        Ok(Self {
            map,
            router,
            nodes,
            table,
            restarts:            config.two_opt_restarts,
            seed:                config.seed,
            first_leg_threshold: config.first_leg_threshold(),
        })
    }

    /// Launch point followed by the surveys still in play.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn table(&self) -> &PathTable {
        &self.table
    }

    pub fn survey_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Table positions in visiting order, launch first, not closed.
    fn order(&self) -> Vec<usize> {
        let mut rng = TourRng::new(self.seed);
        let cycle = two_opt(&self.table, self.restarts, &mut rng);
        debug!("2-opt order over {} nodes, cost {:.6}", cycle.len(), tour_cost(&self.table, &cycle));

        let start = cycle.iter().position(|&i| i == 0).unwrap_or(0);
        let mut order: Vec<usize> = cycle[start..].iter().chain(&cycle[..start]).copied().collect();

        if order.len() >= 2 {
            let launch = self.map.pos(self.nodes[order[0]]);
            let first = self.map.pos(self.nodes[order[1]]);
            if launch.distance(first) < self.first_leg_threshold {
                let near = order.remove(1);
                order.push(near);
            }
        }
        order
    }

    /// Launch point and surveys in visiting order, without waypoints.
    pub fn visiting_order(&self) -> Vec<NodeId> {
        self.order().into_iter().map(|i| self.nodes[i]).collect()
    }

    /// Every waypoint from launch back to launch, zone corners included.
    ///
    /// The same seed gives the same tour on every call.
    pub fn find_tour(&self) -> Vec<NodeId> {
        let order = self.order();
        let n = order.len();
        if n == 1 {
            return vec![self.nodes[0]];
        }

        let mut tour: Vec<NodeId> = vec![self.nodes[order[0]]];
        for k in 0..n {
            let path = self.table.path(order[k], order[(k + 1) % n]);
            tour.extend(path.nodes.iter().skip(1));
        }
        debug!("tour: {} surveys, {} waypoints", n - 1, tour.len());
        tour
    }

    /// Drop the survey with the highest summed path cost to every other
    /// node and rebuild the table.
    ///
    /// Returns the dropped node, or `None` (leaving everything unchanged)
    /// when at most one survey remains.  Ties go to the earliest survey.
    pub fn remove_most_isolated(&mut self) -> TourResult<Option<NodeId>> {
        let n = self.nodes.len();
        if n <= 2 {
            return Ok(None);
        }

        let row_cost = |i: usize| (0..n).map(|j| self.table.cost(i, j)).sum::<f64>();
        let mut furthest = 1;
        let mut worst = row_cost(1);
        for i in 2..n {
            let cost = row_cost(i);
            if cost > worst {
                worst = cost;
                furthest = i;
            }
        }

        let mut nodes = self.nodes.clone();
        let removed = nodes.remove(furthest);
        self.table = PathTable::build(self.router, self.map, &nodes)?;
        self.nodes = nodes;
        debug!("removed {removed} (summed cost {worst:.6}), {} surveys left", n - 2);
        Ok(Some(removed))
    }
}
