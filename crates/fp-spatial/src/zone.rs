//! Exclusion zones and the zone set the planner queries against.
//!
//! # Spatial index
//!
//! `ZoneSet` keeps an R-tree (via `rstar`) of each zone's bounding box in
//! `[lon, lat]` space.  Aggregate queries first collect the zones whose box
//! meets the query's box and only run exact edge tests on those.  Box tests
//! are inclusive, so the answer is always the same as a scan over every
//! zone.

use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use fp_core::{point_in_polygon, segments_intersect, NodeId, Position, ZoneId};

// ── ExclusionZone ─────────────────────────────────────────────────────────────

/// A simple closed polygon the vehicle may not enter or touch.
///
/// `vertices[i]` is the arena node sitting at `ring[i]`; the two vectors are
/// parallel.  The ring is open: the edge from the last vertex back to the
/// first is implied.
#[derive(Debug, Clone)]
pub struct ExclusionZone {
    pub id:       ZoneId,
    pub vertices: Vec<NodeId>,
    pub ring:     Vec<Position>,
}

impl ExclusionZone {
    /// Ring edges as position pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let n = self.ring.len();
        (0..n).map(move |i| (self.ring[i], self.ring[(i + 1) % n]))
    }

    /// Ring edges as node pairs, closing edge included.
    pub fn vertex_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// `true` if segment `a–b` crosses or touches any edge of the ring.
    pub fn intersected_by(&self, a: Position, b: Position) -> bool {
        self.edges().any(|(p, q)| segments_intersect(a, b, p, q))
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, p: Position) -> bool {
        point_in_polygon(p, &self.ring)
    }

    /// `true` if `a` and `b` are consecutive around the ring.
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.vertex_edges()
            .any(|(p, q)| (p == a && q == b) || (p == b && q == a))
    }

    fn envelope(&self) -> AABB<[f64; 2]> {
        let mut lo = [f64::INFINITY, f64::INFINITY];
        let mut hi = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        for p in &self.ring {
            lo = [lo[0].min(p.lon), lo[1].min(p.lat)];
            hi = [hi[0].max(p.lon), hi[1].max(p.lat)];
        }
        AABB::from_corners(lo, hi)
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Bounding box of one zone, stored in the R-tree.
#[derive(Clone)]
struct ZoneEntry {
    envelope: AABB<[f64; 2]>,
    zone:     ZoneId,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Selects entries whose box overlaps the query box, boundary included.
struct Overlapping(AABB<[f64; 2]>);

impl SelectionFunction<ZoneEntry> for Overlapping {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.intersects(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &ZoneEntry) -> bool {
        leaf.envelope.intersects(&self.0)
    }
}

// ── ZoneSet ───────────────────────────────────────────────────────────────────

/// Every exclusion zone on the map, indexed by `ZoneId`.
pub struct ZoneSet {
    zones: Vec<ExclusionZone>,
    index: RTree<ZoneEntry>,
}

impl ZoneSet {
    /// Index `zones`.  `zones[i].id` must equal `ZoneId(i)`.
    pub fn new(zones: Vec<ExclusionZone>) -> Self {
        debug_assert!(zones.iter().enumerate().all(|(i, z)| z.id.index() == i));
        let entries: Vec<ZoneEntry> = zones
            .iter()
            .map(|z| ZoneEntry { envelope: z.envelope(), zone: z.id })
            .collect();
        Self { zones, index: RTree::bulk_load(entries) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: ZoneId) -> Option<&ExclusionZone> {
        self.zones.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExclusionZone> {
        self.zones.iter()
    }

    /// Zones whose bounding box meets the bounding box of segment `a–b`.
    pub fn candidates(&self, a: Position, b: Position) -> impl Iterator<Item = &ExclusionZone> {
        let query = Overlapping(AABB::from_corners(a.xy(), b.xy()));
        self.index
            .locate_with_selection_function(query)
            .map(|e| &self.zones[e.zone.index()])
    }

    /// `true` if segment `a–b` crosses or touches any zone.
    pub fn any_intersects(&self, a: Position, b: Position) -> bool {
        self.candidates(a, b).any(|z| z.intersected_by(a, b))
    }

    /// `true` if `p` lies in (or on the boundary of) any zone.
    pub fn any_contains(&self, p: Position) -> bool {
        self.candidates(p, p).any(|z| z.contains(p))
    }
}
