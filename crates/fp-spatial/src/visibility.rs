//! Visibility graph over zone corners and Dijkstra shortest path.
//!
//! Built per obstructed query: the graph holds the two endpoints plus every
//! zone corner on the map.  Zone boundary edges are always present.  Any
//! other pair is joined when the straight segment between them stays clear
//! of the zones:
//!
//! - it touches no boundary edge other than those incident to either
//!   endpoint, and
//! - for two non-adjacent corners of the same zone, its midpoint is outside
//!   that zone (rules out chords through a zone's interior).
//!
//! Edge weights are planar distance; the graph is undirected.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use fp_core::{segments_intersect, NodeId};

use crate::map::{NodeKind, SurveyMap};
use crate::router::Path;
use crate::{SpatialError, SpatialResult};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// Undirected weighted edge.  Equality is by the unordered endpoint pair, so
/// `Edge { a, b }` equals `Edge { b, a }` whatever the weights.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a:      NodeId,
    pub b:      NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId, weight: f64) -> Self {
        Self { a, b, weight }
    }

    pub fn connects(&self, n: NodeId) -> bool {
        self.a == n || self.b == n
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

// ── VisibilityGraph ───────────────────────────────────────────────────────────

/// Visibility graph between `start` and `end` around every zone on `map`.
pub struct VisibilityGraph<'a> {
    map:   &'a SurveyMap,
    /// Arena id → local index, for nodes in the graph.
    local: Vec<Option<usize>>,
    /// Graph nodes.  `nodes[0]` is the start, `nodes[1]` the end (unless they
    /// coincide), then zone corners in zone order.
    nodes: Vec<NodeId>,
    edges: Vec<Edge>,
    /// `adjacency[i]` = (local index, weight) pairs reachable from `nodes[i]`.
    adjacency: Vec<Vec<(usize, f64)>>,
    start: usize,
    end:   usize,
}

impl<'a> VisibilityGraph<'a> {
    pub fn new(map: &'a SurveyMap, start: NodeId, end: NodeId) -> Self {
        let mut local: Vec<Option<usize>> = vec![None; map.node_count()];
        let mut nodes = Vec::new();

        let start_ix = insert(&mut local, &mut nodes, start);
        let end_ix = insert(&mut local, &mut nodes, end);
        for zone in map.zones.iter() {
            for &v in &zone.vertices {
                insert(&mut local, &mut nodes, v);
            }
        }

        let n = nodes.len();
        let mut graph = Self {
            map,
            local,
            nodes,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); n],
            start: start_ix,
            end: end_ix,
        };

        // Boundary edges first, remembered so the pair scan skips them.
        let mut linked = vec![false; n * n];
        for zone in map.zones.iter() {
            for (p, q) in zone.vertex_edges() {
                let (Some(i), Some(j)) = (graph.local[p.index()], graph.local[q.index()]) else {
                    continue;
                };
                if !linked[i * n + j] {
                    linked[i * n + j] = true;
                    linked[j * n + i] = true;
                    graph.link(i, j);
                }
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if !linked[i * n + j] && graph.visible(graph.nodes[i], graph.nodes[j]) {
                    graph.link(i, j);
                }
            }
        }

        graph
    }

    fn link(&mut self, i: usize, j: usize) {
        let (a, b) = (self.nodes[i], self.nodes[j]);
        let w = self.map.pos(a).distance(self.map.pos(b));
        self.edges.push(Edge::new(a, b, w));
        self.adjacency[i].push((j, w));
        self.adjacency[j].push((i, w));
    }

    /// Visibility test for a pair that is not a zone boundary edge.
    fn visible(&self, a: NodeId, b: NodeId) -> bool {
        let (pa, pb) = (self.map.pos(a), self.map.pos(b));

        let blocked = self.map.zones.candidates(pa, pb).any(|zone| {
            zone.vertex_edges()
                .filter(|&(p, q)| p != a && p != b && q != a && q != b)
                .any(|(p, q)| segments_intersect(pa, pb, self.map.pos(p), self.map.pos(q)))
        });
        if blocked {
            return false;
        }

        match (self.map.node(a).kind, self.map.node(b).kind) {
            (NodeKind::ZoneVertex(za), NodeKind::ZoneVertex(zb)) if za == zb => {
                match self.map.zones.get(za) {
                    Some(zone) if !zone.are_adjacent(a, b) => !zone.contains(pa.midpoint(pb)),
                    _ => true,
                }
            }
            _ => true,
        }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// `true` if the graph joins `a` and `b` directly.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a) && e.connects(b))
    }

    /// Dijkstra shortest path from start to end.
    pub fn best_path(&self) -> SpatialResult<Path> {
        let (from, to) = (self.nodes[self.start], self.nodes[self.end]);
        if self.start == self.end {
            return Ok(Path::single(from));
        }

        let n = self.nodes.len();
        let mut dist = vec![f64::INFINITY; n];
        // prev[v] = local index that reached v.
        let mut prev: Vec<Option<usize>> = vec![None; n];
        dist[self.start] = 0.0;

        // Secondary key (local index) makes tie-breaking deterministic.
        let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::new();
        heap.push(Reverse((Cost(0.0), self.start)));

        while let Some(Reverse((Cost(cost), node))) = heap.pop() {
            if node == self.end {
                return Ok(self.reconstruct(&prev, cost));
            }

            // Skip stale heap entries.
            if cost > dist[node] {
                continue;
            }

            for &(next, w) in &self.adjacency[node] {
                let new_cost = cost + w;
                if new_cost < dist[next] {
                    dist[next] = new_cost;
                    prev[next] = Some(node);
                    heap.push(Reverse((Cost(new_cost), next)));
                }
            }
        }

        Err(SpatialError::NoRoute { from, to })
    }

    fn reconstruct(&self, prev: &[Option<usize>], cost: f64) -> Path {
        let mut nodes = vec![self.nodes[self.end]];
        let mut cur = self.end;
        while let Some(p) = prev[cur] {
            nodes.push(self.nodes[p]);
            cur = p;
        }
        nodes.reverse();
        Path { nodes, cost }
    }
}

fn insert(local: &mut [Option<usize>], nodes: &mut Vec<NodeId>, n: NodeId) -> usize {
    *local[n.index()].get_or_insert_with(|| {
        nodes.push(n);
        nodes.len() - 1
    })
}

// ── Cost ──────────────────────────────────────────────────────────────────────

/// Total order over path costs for the heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
