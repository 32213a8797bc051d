//! Unit tests for fp-spatial.

#[cfg(test)]
mod helpers {
    use fp_core::{PlannerConfig, Position};

    use crate::{SurveyMap, SurveyMapBuilder};

    pub fn p(lat: f64, lon: f64) -> Position {
        Position::new(lat, lon)
    }

    /// Unit square, corners listed (lat, lon).
    pub fn square() -> Vec<Position> {
        vec![p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)]
    }

    pub fn second_square() -> Vec<Position> {
        vec![p(1.0, 2.0), p(2.0, 2.0), p(2.0, 3.0), p(1.0, 3.0)]
    }

    /// U-shaped zone, 3 × 3 with a notch open to the north between lon 1
    /// and 2, reaching down to lat 1.
    pub fn u_zone() -> Vec<Position> {
        vec![
            p(0.0, 0.0),
            p(0.0, 3.0),
            p(3.0, 3.0),
            p(3.0, 2.0),
            p(1.0, 2.0),
            p(1.0, 1.0),
            p(3.0, 1.0),
            p(3.0, 0.0),
        ]
    }

    /// Strictly inside the U: the open outer square minus the closed notch.
    pub fn inside_u(q: Position) -> bool {
        let outer = q.lat > 0.0 && q.lat < 3.0 && q.lon > 0.0 && q.lon < 3.0;
        let notch = q.lat >= 1.0 && q.lon >= 1.0 && q.lon <= 2.0;
        outer && !notch
    }

    pub fn perimeter(ring: &[Position]) -> f64 {
        ring.iter()
            .zip(ring.iter().cycle().skip(1))
            .map(|(a, b)| a.distance(*b))
            .sum()
    }

    /// Launch at `start`, one survey at `end`, then `zones` in order.
    ///
    /// Arena layout: launch = 0, survey = 1, zone corners from 2.
    pub fn map(start: Position, end: Position, zones: &[Vec<Position>]) -> SurveyMap {
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.set_launch(start);
        b.add_survey(end);
        for z in zones {
            b.add_zone(z);
        }
        b.build().unwrap()
    }
}

#[cfg(test)]
mod builder {
    use fp_core::{NodeId, PlannerConfig, SurveyId, ZoneId};

    use super::helpers::{p, square};
    use crate::{NodeKind, SpatialError, SurveyMapBuilder};

    #[test]
    fn missing_launch_is_rejected() {
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.add_survey(p(0.0, 0.0));
        assert!(matches!(b.build(), Err(SpatialError::MissingLaunch)));
    }

    #[test]
    fn two_vertex_zone_is_rejected() {
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.set_launch(p(0.0, 0.0));
        b.add_zone(&[p(1.0, 1.0), p(2.0, 2.0)]);
        match b.build() {
            Err(SpatialError::DegenerateZone { zone, vertices }) => {
                assert_eq!(zone, ZoneId(0));
                assert_eq!(vertices, 2);
            }
            other => panic!("expected DegenerateZone, got {:?}", other.err()),
        }
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let mut ring = square();
        ring.push(ring[0]);
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.set_launch(p(5.0, 5.0));
        b.add_zone(&ring);
        let map = b.build().unwrap();
        assert_eq!(map.zones.get(ZoneId(0)).unwrap().vertices.len(), 4);
        assert_eq!(map.node_count(), 5);
    }

    #[test]
    fn radii_follow_config() {
        let cfg = PlannerConfig::default();
        let mut b = SurveyMapBuilder::new(&cfg);
        b.set_launch(p(5.0, 5.0));
        let s = b.add_survey(p(6.0, 6.0));
        b.add_zone(&square());
        let map = b.build().unwrap();

        assert_eq!(s, SurveyId(0));
        assert_eq!(map.node(map.launch()).radius, cfg.return_radius);
        let survey = map.node(map.survey_node(s).unwrap());
        assert_eq!(survey.radius, cfg.sensing_radius);
        assert_eq!(survey.survey(), Some(s));
        let corner = map.node(NodeId(2));
        assert_eq!(corner.kind, NodeKind::ZoneVertex(ZoneId(0)));
        assert_eq!(corner.radius, cfg.vertex_radius);
    }

    #[test]
    fn within_range_is_strict() {
        let cfg = PlannerConfig::default();
        let mut b = SurveyMapBuilder::new(&cfg);
        b.set_launch(p(0.0, 0.0));
        let map = b.build().unwrap();
        let launch = map.node(map.launch());
        assert!(launch.within_range(p(0.0, cfg.return_radius * 0.5)));
        assert!(!launch.within_range(p(0.0, cfg.return_radius * 2.0)));
    }
}

#[cfg(test)]
mod zones {
    use fp_core::{point_in_polygon, segments_intersect, Position};

    use super::helpers::{map, p, second_square, square};

    #[test]
    fn intersected_by_and_contains() {
        let m = map(p(5.0, 5.0), p(6.0, 6.0), &[square()]);
        let zone = m.zones.iter().next().unwrap();

        let p1 = p(0.5, 0.5);
        let p2 = p(0.0, 0.5);
        let p3 = p(-1.0, 0.5);
        let p4 = p(-2.0, 0.5);

        assert!(zone.intersected_by(p4, p1));
        assert!(zone.intersected_by(p4, p2), "touching the boundary counts");
        assert!(!zone.intersected_by(p4, p3));

        assert!(zone.contains(p1));
        assert!(zone.contains(p2), "boundary point is contained");
        assert!(!zone.contains(p3));
    }

    #[test]
    fn index_agrees_with_linear_scan() {
        let m = map(p(5.0, 5.0), p(6.0, 6.0), &[square(), second_square()]);

        let grid: Vec<Position> = (0..7)
            .flat_map(|i| (0..9).map(move |j| p(-0.5 + i as f64 * 0.5, -0.5 + j as f64 * 0.5)))
            .collect();

        for &a in &grid {
            let scan_contains = m.zones.iter().any(|z| point_in_polygon(a, &z.ring));
            assert_eq!(m.zones.any_contains(a), scan_contains, "contains {a}");

            for &b in &grid {
                let scan = m.zones.iter().any(|z| {
                    z.edges().any(|(q1, q2)| segments_intersect(a, b, q1, q2))
                });
                assert_eq!(m.zones.any_intersects(a, b), scan, "segment {a} -> {b}");
            }
        }
    }

    #[test]
    fn empty_set_blocks_nothing() {
        let m = map(p(0.0, 0.0), p(1.0, 1.0), &[]);
        assert!(m.zones.is_empty());
        assert!(!m.zones.any_intersects(p(0.0, 0.0), p(1.0, 1.0)));
        assert!(!m.zones.any_contains(p(0.5, 0.5)));
    }

    #[test]
    fn adjacency_wraps_around() {
        let m = map(p(5.0, 5.0), p(6.0, 6.0), &[square()]);
        let zone = m.zones.iter().next().unwrap();
        let v = &zone.vertices;
        assert!(zone.are_adjacent(v[0], v[1]));
        assert!(zone.are_adjacent(v[3], v[0]));
        assert!(!zone.are_adjacent(v[0], v[2]));
    }
}

#[cfg(test)]
mod visibility {
    use fp_core::NodeId;

    use super::helpers::{inside_u, map, p, perimeter, second_square, square, u_zone};
    use crate::{Edge, VisibilityGraph};

    const EPS: f64 = 1e-10;

    #[test]
    fn detour_around_one_zone() {
        let m = map(p(0.5, -0.5), p(0.5, 1.5), &[square()]);
        let path = VisibilityGraph::new(&m, NodeId(0), NodeId(1)).best_path().unwrap();
        let expected = 1.0 + 2.0 * 0.5f64.sqrt();
        assert!((path.cost - expected).abs() < EPS, "cost {}", path.cost);
        assert_eq!(path.nodes.first(), Some(&NodeId(0)));
        assert_eq!(path.nodes.last(), Some(&NodeId(1)));
        assert_eq!(path.nodes.len(), 4);
    }

    #[test]
    fn detour_around_two_zones() {
        let m = map(p(0.5, -0.5), p(1.5, 3.5), &[square(), second_square()]);
        let path = VisibilityGraph::new(&m, NodeId(0), NodeId(1)).best_path().unwrap();
        let expected = 3.0 + 2.0 * 0.5f64.sqrt();
        assert!((path.cost - expected).abs() < EPS, "cost {}", path.cost);
    }

    #[test]
    fn adding_zones_never_shortens_the_path() {
        let (start, end) = (p(0.5, -0.5), p(1.5, 3.5));
        let layers = [vec![], vec![square()], vec![square(), second_square()]];
        let straight = start.distance(end);
        let mut last = 0.0;
        for zones in &layers {
            let m = map(start, end, zones);
            let cost = VisibilityGraph::new(&m, NodeId(0), NodeId(1)).best_path().unwrap().cost;
            assert!(cost + EPS >= last, "{cost} < {last}");
            let bound = straight + zones.iter().map(|z| perimeter(z)).sum::<f64>();
            assert!(cost <= bound + EPS, "{cost} exceeds detour bound {bound}");
            last = cost;
        }
    }

    #[test]
    fn concave_zone_keeps_outside_chords_only() {
        let m = map(p(2.0, -1.0), p(2.0, 4.0), &[u_zone()]);
        let g = VisibilityGraph::new(&m, NodeId(0), NodeId(1));

        // Corners are arena nodes 2..=9, in ring order.
        assert!(g.has_edge(NodeId(5), NodeId(8)), "notch mouth tips see each other");
        assert!(g.has_edge(NodeId(5), NodeId(7)), "chord through the notch stays outside");
        assert!(!g.has_edge(NodeId(2), NodeId(6)), "chord through the body");
        assert!(!g.has_edge(NodeId(3), NodeId(7)), "chord through the body");
    }

    #[test]
    fn concave_zone_paths_stay_outside() {
        let pairs = [
            (p(2.0, -1.0), p(2.0, 4.0)),
            (p(1.5, 4.0), p(1.5, -1.0)),
            (p(-1.0, 1.5), p(2.0, 1.5)),
        ];
        for (start, end) in pairs {
            let m = map(start, end, &[u_zone()]);
            let path = VisibilityGraph::new(&m, NodeId(0), NodeId(1)).best_path().unwrap();
            for w in path.nodes.windows(2) {
                let (a, b) = (m.pos(w[0]), m.pos(w[1]));
                for k in 0..=50 {
                    let t = k as f64 / 50.0;
                    let q = p(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t);
                    assert!(!inside_u(q), "{start} -> {end} passes through {q}");
                }
            }
        }

        let m = map(p(2.0, -1.0), p(2.0, 4.0), &[u_zone()]);
        let cost = VisibilityGraph::new(&m, NodeId(0), NodeId(1)).best_path().unwrap().cost;
        let expected = 3.0 + 2.0 * 2.0f64.sqrt();
        assert!((cost - expected).abs() < EPS, "cost {cost}");
    }

    #[test]
    fn boundary_edges_present_and_chords_absent() {
        let m = map(p(0.5, -0.5), p(0.5, 1.5), &[square()]);
        let g = VisibilityGraph::new(&m, NodeId(0), NodeId(1));

        // Corners are arena nodes 2..=5, in ring order.
        assert!(g.has_edge(NodeId(2), NodeId(3)));
        assert!(g.has_edge(NodeId(5), NodeId(2)));
        assert!(!g.has_edge(NodeId(2), NodeId(4)));
        assert!(!g.has_edge(NodeId(3), NodeId(5)));
        assert!(!g.has_edge(NodeId(0), NodeId(1)), "start and end see through the zone");
        assert_eq!(g.nodes().len(), 6);
    }

    #[test]
    fn edge_equality_is_symmetric() {
        let e = Edge::new(NodeId(1), NodeId(2), 3.0);
        assert_eq!(e, Edge::new(NodeId(2), NodeId(1), 3.0));
        assert_eq!(e, Edge::new(NodeId(2), NodeId(1), 4.5), "weight is not part of identity");
        assert_ne!(e, Edge::new(NodeId(1), NodeId(3), 3.0));
        assert!(e.connects(NodeId(2)));
        assert!(!e.connects(NodeId(3)));
    }
}

#[cfg(test)]
mod router {
    use fp_core::{NodeId, PlannerConfig};

    use super::helpers::{map, p, second_square, square};
    use crate::{PathTable, Router, SurveyMap, SurveyMapBuilder, VisibilityRouter};

    #[test]
    fn clear_segment_is_direct() {
        let m = map(p(0.0, 0.0), p(3.0, 4.0), &[]);
        let path = VisibilityRouter.route(&m, NodeId(0), NodeId(1)).unwrap();
        assert_eq!(path.nodes, vec![NodeId(0), NodeId(1)]);
        assert!((path.cost - 5.0).abs() < 1e-12);
    }

    #[test]
    fn same_node_is_trivial() {
        let m = map(p(0.0, 0.0), p(3.0, 4.0), &[]);
        let path = VisibilityRouter.route(&m, NodeId(1), NodeId(1)).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn obstructed_segment_detours() {
        let m = map(p(0.5, -0.5), p(0.5, 1.5), &[square()]);
        let path = VisibilityRouter.route(&m, NodeId(0), NodeId(1)).unwrap();
        assert!(path.nodes.len() > 2);
        assert!(path.cost > 2.0);
    }

    fn table_map() -> SurveyMap {
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.set_launch(p(0.5, -0.5));
        b.add_survey(p(1.5, 3.5));
        b.add_survey(p(0.5, 1.5));
        b.add_survey(p(-0.5, 2.5));
        b.add_survey(p(2.5, 0.5));
        b.add_zone(&square());
        b.add_zone(&second_square());
        b.build().unwrap()
    }

    fn table_nodes(m: &SurveyMap) -> Vec<NodeId> {
        std::iter::once(m.launch()).chain(m.survey_nodes().iter().copied()).collect()
    }

    #[test]
    fn table_is_symmetric_with_zero_diagonal() {
        let m = table_map();
        let nodes = table_nodes(&m);
        let t = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();
        assert_eq!(t.len(), 5);
        for i in 0..t.len() {
            assert_eq!(t.cost(i, i), 0.0);
            assert_eq!(t.path(i, i).nodes, vec![nodes[i]]);
            for j in 0..t.len() {
                assert_eq!(t.cost(i, j), t.cost(j, i));
                let mut back = t.path(j, i).nodes.clone();
                back.reverse();
                assert_eq!(t.path(i, j).nodes, back);
            }
        }
    }

    #[test]
    fn table_is_deterministic() {
        let m = table_map();
        let nodes = table_nodes(&m);
        let a = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();
        let b = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();
        for i in 0..a.len() {
            for j in 0..a.len() {
                assert_eq!(a.path(i, j), b.path(i, j));
            }
        }
    }

    #[test]
    fn position_maps_arena_ids() {
        let m = table_map();
        let nodes = table_nodes(&m);
        let t = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();
        assert_eq!(t.position(nodes[3]), Some(3));
        assert_eq!(t.position(NodeId(99)), None);
    }
}
