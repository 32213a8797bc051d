//! Unit tests for fp-tour.

#[cfg(test)]
mod helpers {
    use fp_core::{PlannerConfig, Position};
    use fp_spatial::{SurveyMap, SurveyMapBuilder};

    pub fn p(lat: f64, lon: f64) -> Position {
        Position::new(lat, lon)
    }

    pub fn map(launch: Position, surveys: &[Position], zones: &[Vec<Position>]) -> SurveyMap {
        let mut b = SurveyMapBuilder::new(&PlannerConfig::default());
        b.set_launch(launch);
        for &s in surveys {
            b.add_survey(s);
        }
        for z in zones {
            b.add_zone(z);
        }
        b.build().unwrap()
    }

    /// `n` points evenly spaced on a circle of radius `r` around `c`.
    pub fn ring(c: Position, r: f64, n: usize) -> Vec<Position> {
        (0..n).map(|k| c.project(k as f64 * 360.0 / n as f64, r)).collect()
    }
}

#[cfg(test)]
mod two_opt {
    use fp_core::TourRng;
    use fp_spatial::{PathTable, VisibilityRouter};

    use super::helpers::{map, p, ring};
    use crate::{tour_cost, two_opt};

    #[test]
    fn convex_points_get_hull_order() {
        let centre = p(0.0, 0.0);
        let pts = ring(centre, 1.0, 8);
        let m = map(pts[0], &pts[1..], &[]);
        let nodes: Vec<_> = std::iter::once(m.launch()).chain(m.survey_nodes().iter().copied()).collect();
        let table = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();

        let order = two_opt(&table, 20, &mut TourRng::new(1));
        let side = pts[0].distance(pts[1]);
        assert!((tour_cost(&table, &order) - 8.0 * side).abs() < 1e-9);

        let mut seen = order.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn small_tables_keep_table_order() {
        let m = map(p(0.0, 0.0), &[p(1.0, 0.0), p(0.0, 1.0)], &[]);
        let nodes: Vec<_> = std::iter::once(m.launch()).chain(m.survey_nodes().iter().copied()).collect();
        let table = PathTable::build(&VisibilityRouter, &m, &nodes).unwrap();
        assert_eq!(two_opt(&table, 5, &mut TourRng::new(0)), vec![0, 1, 2]);
    }
}

#[cfg(test)]
mod finder {
    use fp_core::{PlannerConfig, Position};
    use fp_spatial::{NodeKind, VisibilityRouter};

    use super::helpers::{map, p, ring};
    use crate::TourFinder;

    fn cfg() -> PlannerConfig {
        PlannerConfig { two_opt_restarts: 10, ..PlannerConfig::default() }
    }

    fn campus_surveys() -> Vec<Position> {
        vec![
            p(55.9440, -3.1880),
            p(55.9452, -3.1862),
            p(55.9445, -3.1900),
            p(55.9430, -3.1870),
            p(55.9458, -3.1889),
            p(55.9436, -3.1851),
        ]
    }

    #[test]
    fn launch_only_tour() {
        let m = map(p(0.0, 0.0), &[], &[]);
        let finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        assert_eq!(finder.find_tour(), vec![m.launch()]);
    }

    #[test]
    fn single_survey_out_and_back() {
        let m = map(p(0.0, 0.0), &[p(0.001, 0.001)], &[]);
        let finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        let s = m.survey_nodes()[0];
        assert_eq!(finder.find_tour(), vec![m.launch(), s, m.launch()]);
    }

    #[test]
    fn tour_is_closed_and_visits_every_survey_once() {
        let m = map(p(55.9444, -3.1878), &campus_surveys(), &[]);
        let finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        let tour = finder.find_tour();

        assert_eq!(tour.first(), Some(&m.launch()));
        assert_eq!(tour.last(), Some(&m.launch()));
        for &s in m.survey_nodes() {
            assert_eq!(tour.iter().filter(|&&n| n == s).count(), 1, "{s}");
        }
    }

    #[test]
    fn same_seed_same_tour() {
        let m = map(p(55.9444, -3.1878), &campus_surveys(), &[]);
        let a = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        let b = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        assert_eq!(a.find_tour(), b.find_tour());
        assert_eq!(a.find_tour(), a.find_tour());
    }

    #[test]
    fn near_first_survey_is_visited_last() {
        let launch = p(0.0, 0.0);
        let near = p(0.00005, 0.0);
        let far = p(0.001, 0.001);
        let m = map(launch, &[near, far], &[]);
        let finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();

        let order = finder.visiting_order();
        let near_id = m.survey_nodes()[0];
        assert_eq!(order.first(), Some(&m.launch()));
        assert_eq!(order.last(), Some(&near_id));
    }

    #[test]
    fn obstructed_legs_are_spliced_with_corners() {
        let square = vec![p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)];
        let m = map(p(0.5, -0.5), &[p(0.5, 1.5)], &[square]);
        let finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();
        let tour = finder.find_tour();

        assert_eq!(tour.first(), Some(&m.launch()));
        assert_eq!(tour.last(), Some(&m.launch()));
        assert!(tour.len() > 3);
        let corners = tour
            .iter()
            .filter(|&&n| matches!(m.node(n).kind, NodeKind::ZoneVertex(_)))
            .count();
        assert!(corners >= 4, "expected detour corners both ways, got {corners}");
        // No node repeats back to back at the joins.
        assert!(tour.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn removes_the_outlier() {
        let mut surveys = ring(p(0.0, 0.0), 0.001, 5);
        surveys.push(p(0.02, 0.02));
        let m = map(p(0.0, 0.0), &surveys, &[]);
        let mut finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();

        let removed = finder.remove_most_isolated().unwrap();
        assert_eq!(removed, Some(m.survey_nodes()[5]));
        assert_eq!(finder.survey_count(), 5);
        assert_eq!(finder.table().len(), 6);
        assert!(!finder.find_tour().contains(&m.survey_nodes()[5]));
    }

    #[test]
    fn removal_stops_at_one_survey() {
        let m = map(p(0.0, 0.0), &[p(0.001, 0.0), p(0.0, 0.002)], &[]);
        let mut finder = TourFinder::new(&m, &VisibilityRouter, &cfg()).unwrap();

        assert!(finder.remove_most_isolated().unwrap().is_some());
        assert_eq!(finder.survey_count(), 1);
        let before = finder.nodes().to_vec();
        assert_eq!(finder.remove_most_isolated().unwrap(), None);
        assert_eq!(finder.remove_most_isolated().unwrap(), None);
        assert_eq!(finder.nodes(), &before[..]);
    }
}
