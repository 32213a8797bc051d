//! Routing trait, the default zone-avoiding router and the all-pairs table.
//!
//! # Pluggability
//!
//! The tour layer routes through the [`Router`] trait, so applications can
//! swap in another engine without touching the planner.  The default
//! [`VisibilityRouter`] flies straight when the segment is clear and falls
//! back to a [`VisibilityGraph`] otherwise.
//!
//! # Cost units
//!
//! Costs are planar distance in coordinate degrees, the same unit as
//! `PlannerConfig::move_size`.

use fp_core::NodeId;

use crate::map::SurveyMap;
use crate::visibility::VisibilityGraph;
use crate::SpatialResult;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Ordered node sequence plus total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub cost:  f64,
}

impl Path {
    /// Zero-cost path that stays at `node`.
    pub fn single(node: NodeId) -> Self {
        Self { nodes: vec![node], cost: 0.0 }
    }

    /// `true` if the path never leaves its first node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn reversed(&self) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Self { nodes, cost: self.cost }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so the path table can fan pairs out
/// across Rayon workers under the `parallel` feature.
pub trait Router: Send + Sync {
    /// Shortest zone-avoiding path from `from` to `to`.
    ///
    /// `from == to` yields a single-node path, never an error.
    fn route(&self, map: &SurveyMap, from: NodeId, to: NodeId) -> SpatialResult<Path>;
}

// ── VisibilityRouter ──────────────────────────────────────────────────────────

/// Straight line when clear, visibility-graph Dijkstra when obstructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityRouter;

impl Router for VisibilityRouter {
    fn route(&self, map: &SurveyMap, from: NodeId, to: NodeId) -> SpatialResult<Path> {
        if from == to {
            return Ok(Path::single(from));
        }
        if map.is_clear(from, to) {
            let cost = map.pos(from).distance(map.pos(to));
            return Ok(Path { nodes: vec![from, to], cost });
        }
        VisibilityGraph::new(map, from, to).best_path()
    }
}

// ── PathTable ─────────────────────────────────────────────────────────────────

/// Dense all-pairs path table over a node subset.
///
/// `path(i, j)` is indexed by position in [`nodes`](Self::nodes), not by
/// arena id.  Only pairs `i < j` are routed; `path(j, i)` is the reverse with
/// the same cost, so the cost matrix is exactly symmetric.
#[derive(Debug, Clone)]
pub struct PathTable {
    nodes: Vec<NodeId>,
    /// Row-major `n × n`.
    paths: Vec<Path>,
}

impl PathTable {
    pub fn build<R: Router>(router: &R, map: &SurveyMap, nodes: &[NodeId]) -> SpatialResult<Self> {
        let n = nodes.len();
        let pairs: Vec<(usize, usize)> =
            (0..n).flat_map(|i| ((i + 1)..n).map(move |j| (i, j))).collect();

        #[cfg(feature = "parallel")]
        let routed: Vec<SpatialResult<Path>> = {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|&(i, j)| router.route(map, nodes[i], nodes[j]))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let routed: Vec<SpatialResult<Path>> = pairs
            .iter()
            .map(|&(i, j)| router.route(map, nodes[i], nodes[j]))
            .collect();

        let mut paths: Vec<Path> = (0..n * n).map(|k| Path::single(nodes[k / n])).collect();
        for (&(i, j), path) in pairs.iter().zip(routed) {
            let path = path?;
            paths[j * n + i] = path.reversed();
            paths[i * n + j] = path;
        }

        Ok(Self { nodes: nodes.to_vec(), paths })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    #[inline]
    pub fn path(&self, i: usize, j: usize) -> &Path {
        &self.paths[i * self.nodes.len() + j]
    }

    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.path(i, j).cost
    }

    /// Table position of an arena node, if present.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}
