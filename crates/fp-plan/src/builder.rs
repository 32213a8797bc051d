//! Fluent builder for constructing a [`Planner`].

use fp_core::{PlannerConfig, Position, Survey};
use fp_spatial::{Router, SurveyMapBuilder};

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner<R>`].
///
/// # Required inputs
///
/// - [`PlannerConfig`]: radii, move size, budget, seed, confinement
/// - launch `Position`
/// - `Vec<Survey>`: `SurveyId(i)` refers to `surveys[i]`
/// - `R: Router`: the routing algorithm (e.g. [`fp_spatial::VisibilityRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default       |
/// |--------------|---------------|
/// | `.zones(v)`  | No zones      |
///
/// # Example
///
/// ```
/// use fp_core::{PlannerConfig, Position, Reading, Survey};
/// use fp_plan::{NoopObserver, PlannerBuilder};
/// use fp_spatial::VisibilityRouter;
///
/// let launch = Position::new(55.9444, -3.1878);
/// let surveys = vec![Survey::new("a.b.c", Position::new(55.9450, -3.1870), 90.0, Reading::Value(12.5))];
/// let mut planner = PlannerBuilder::new(PlannerConfig::default(), launch, surveys, VisibilityRouter)
///     .build()
///     .unwrap();
/// let plan = planner.plan(&mut NoopObserver).unwrap();
/// assert_eq!(plan.reading_count(), 1);
/// assert!(plan.ends_near_launch());
/// ```
pub struct PlannerBuilder<R: Router> {
    config:  PlannerConfig,
    launch:  Position,
    surveys: Vec<Survey>,
    zones:   Vec<Vec<Position>>,
    router:  R,
}

impl<R: Router> PlannerBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: PlannerConfig, launch: Position, surveys: Vec<Survey>, router: R) -> Self {
        Self {
            config,
            launch,
            surveys,
            zones: Vec::new(),
            router,
        }
    }

    /// Supply exclusion zones, each an open ring of corners.
    pub fn zones(mut self, zones: Vec<Vec<Position>>) -> Self {
        self.zones = zones;
        self
    }

    /// Validate the config, build the map arena and return a ready-to-run
    /// [`Planner`].
    ///
    /// The launch point and every survey must lie strictly inside
    /// `config.confinement`; anything else is unreachable.
    pub fn build(self) -> PlanResult<Planner<R>> {
        self.config.validate()?;

        let area = &self.config.confinement;
        if !area.contains(self.launch) {
            return Err(PlanError::OutsideConfinement { what: "launch point".into(), pos: self.launch });
        }
        if let Some(s) = self.surveys.iter().find(|s| !area.contains(s.pos)) {
            return Err(PlanError::OutsideConfinement { what: format!("survey {}", s.location), pos: s.pos });
        }

        let mut b = SurveyMapBuilder::new(&self.config);
        b.set_launch(self.launch);
        for survey in &self.surveys {
            b.add_survey(survey.pos);
        }
        for ring in &self.zones {
            b.add_zone(ring);
        }
        let map = b.build()?;

        Ok(Planner {
            config:  self.config,
            map,
            surveys: self.surveys,
            router:  self.router,
        })
    }
}
