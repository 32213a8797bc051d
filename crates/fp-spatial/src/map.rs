//! The node arena every planning stage shares.
//!
//! # Data layout
//!
//! A `SurveyMap` owns one `Vec<MapNode>`.  The launch point, every survey
//! and every zone corner live in it, addressed by `NodeId`.  Zones refer to
//! their corners by `NodeId` and corners refer back to their zone by
//! `ZoneId`; neither owns the other.
//!
//! Each node carries its own arrival radius, fixed at build time from
//! `PlannerConfig`, so stages never need to match on the node kind to
//! decide whether the vehicle has arrived.

use fp_core::{Confinement, NodeId, PlannerConfig, Position, SurveyId, ZoneId};

use crate::zone::{ExclusionZone, ZoneSet};
use crate::{SpatialError, SpatialResult};

// ── MapNode ───────────────────────────────────────────────────────────────────

/// What a routable node stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Launch,
    Survey(SurveyId),
    ZoneVertex(ZoneId),
}

/// A routable point with its arrival radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapNode {
    pub pos:    Position,
    pub kind:   NodeKind,
    pub radius: f64,
}

impl MapNode {
    /// `true` once `p` is strictly closer than this node's radius.
    #[inline]
    pub fn within_range(&self, p: Position) -> bool {
        self.pos.distance(p) < self.radius
    }

    pub fn survey(&self) -> Option<SurveyId> {
        match self.kind {
            NodeKind::Survey(id) => Some(id),
            _ => None,
        }
    }

    pub fn zone(&self) -> Option<ZoneId> {
        match self.kind {
            NodeKind::ZoneVertex(id) => Some(id),
            _ => None,
        }
    }
}

// ── SurveyMap ─────────────────────────────────────────────────────────────────

/// Launch point, surveys, exclusion zones and confinement area.
///
/// Immutable once built.  Use [`SurveyMapBuilder`].
pub struct SurveyMap {
    /// Every routable node.  Indexed by `NodeId`.
    pub nodes: Vec<MapNode>,

    pub zones: ZoneSet,

    pub confinement: Confinement,

    launch:  NodeId,
    /// Arena id of each survey, indexed by `SurveyId`.
    surveys: Vec<NodeId>,
}

impl SurveyMap {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &MapNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn pos(&self, id: NodeId) -> Position {
        self.nodes[id.index()].pos
    }

    pub fn launch(&self) -> NodeId {
        self.launch
    }

    /// Arena ids of all surveys, in `SurveyId` order.
    pub fn survey_nodes(&self) -> &[NodeId] {
        &self.surveys
    }

    pub fn survey_node(&self, id: SurveyId) -> Option<NodeId> {
        self.surveys.get(id.index()).copied()
    }

    /// `true` if the straight segment between two nodes touches no zone.
    pub fn is_clear(&self, a: NodeId, b: NodeId) -> bool {
        !self.zones.any_intersects(self.pos(a), self.pos(b))
    }
}

// ── SurveyMapBuilder ──────────────────────────────────────────────────────────

/// Construct a [`SurveyMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use fp_core::{PlannerConfig, Position};
/// use fp_spatial::SurveyMapBuilder;
///
/// let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
/// b.set_launch(Position::new(55.9444, -3.1878));
/// b.add_survey(Position::new(55.9450, -3.1870));
/// b.add_zone(&[
///     Position::new(55.9446, -3.1876),
///     Position::new(55.9446, -3.1872),
///     Position::new(55.9448, -3.1872),
/// ]);
/// let map = b.build().unwrap();
/// assert_eq!(map.node_count(), 5);
/// assert_eq!(map.zones.len(), 1);
/// ```
pub struct SurveyMapBuilder {
    nodes:       Vec<MapNode>,
    launch:      Option<NodeId>,
    surveys:     Vec<NodeId>,
    rings:       Vec<Vec<NodeId>>,
    confinement: Confinement,

    sensing_radius: f64,
    return_radius:  f64,
    vertex_radius:  f64,
}

impl SurveyMapBuilder {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            nodes:          Vec::new(),
            launch:         None,
            surveys:        Vec::new(),
            rings:          Vec::new(),
            confinement:    config.confinement,
            sensing_radius: config.sensing_radius,
            return_radius:  config.return_radius,
            vertex_radius:  config.vertex_radius,
        }
    }

    fn push(&mut self, pos: Position, kind: NodeKind, radius: f64) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MapNode { pos, kind, radius });
        id
    }

    /// Place the launch point.  Calling again replaces the position.
    pub fn set_launch(&mut self, pos: Position) -> NodeId {
        if let Some(id) = self.launch {
            self.nodes[id.index()].pos = pos;
            return id;
        }
        let id = self.push(pos, NodeKind::Launch, self.return_radius);
        self.launch = Some(id);
        id
    }

    /// Add a survey point.  Surveys get sequential `SurveyId`s from 0, so
    /// adding them in the caller's list order keeps the ids aligned with it.
    pub fn add_survey(&mut self, pos: Position) -> SurveyId {
        let sid = SurveyId(self.surveys.len() as u32);
        let id = self.push(pos, NodeKind::Survey(sid), self.sensing_radius);
        self.surveys.push(id);
        sid
    }

    /// Add an exclusion zone from its ring of corners.
    ///
    /// A closing vertex equal to the first is dropped.  Rings left with fewer
    /// than three corners are rejected by [`build`](Self::build).
    pub fn add_zone(&mut self, ring: &[Position]) -> ZoneId {
        let zid = ZoneId(self.rings.len() as u32);
        let ring = match ring {
            [first, .., last] if first == last => &ring[..ring.len() - 1],
            _ => ring,
        };
        let vertices = ring
            .iter()
            .map(|&p| self.push(p, NodeKind::ZoneVertex(zid), self.vertex_radius))
            .collect();
        self.rings.push(vertices);
        zid
    }

    /// Consume the builder and produce a [`SurveyMap`].
    pub fn build(self) -> SpatialResult<SurveyMap> {
        let launch = self.launch.ok_or(SpatialError::MissingLaunch)?;

        let mut zones = Vec::with_capacity(self.rings.len());
        for (i, vertices) in self.rings.into_iter().enumerate() {
            let id = ZoneId(i as u32);
            if vertices.len() < 3 {
                return Err(SpatialError::DegenerateZone { zone: id, vertices: vertices.len() });
            }
            let ring = vertices.iter().map(|v| self.nodes[v.index()].pos).collect();
            zones.push(ExclusionZone { id, vertices, ring });
        }

        Ok(SurveyMap {
            nodes:       self.nodes,
            zones:       ZoneSet::new(zones),
            confinement: self.confinement,
            launch,
            surveys:     self.surveys,
        })
    }
}
