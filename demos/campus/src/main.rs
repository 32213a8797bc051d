//! campus — plan a survey flight around a small university campus.
//!
//! Loads twelve sensors and three buildings from embedded CSV, plans a
//! closed flight from the launch point, writes the flight path and the
//! readings table to `output/campus/`, and prints a summary.
//!
//! Set `RUST_LOG=info` (or `debug`) to watch the planner work.

mod campus;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::info;

use fp_core::{NodeId, PlannerConfig, Position, Survey, SurveyId};
use fp_moves::Move;
use fp_output::{CsvWriter, OutputWriter, PlanOutputObserver};
use fp_plan::{FlightPlan, PlanObserver, PlannerBuilder, load_surveys_reader, load_zones_reader};
use fp_spatial::VisibilityRouter;

use campus::{LAUNCH_LAT, LAUNCH_LON, SURVEYS_CSV, ZONES_CSV};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64   = 5678;
const MOVE_LIMIT: usize = 150;
const STEM:       &str  = "campus";

// ── Observer wrapper to count attempts ───────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:    PlanOutputObserver<W>,
    attempts: usize,
    dropped:  Vec<String>,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: PlanOutputObserver<W>) -> Self {
        Self { inner, attempts: 0, dropped: Vec::new() }
    }
}

impl<W: OutputWriter> PlanObserver for CountingObserver<W> {
    fn on_attempt_start(&mut self, attempt: usize, surveys: usize) {
        self.attempts = attempt;
        self.inner.on_attempt_start(attempt, surveys);
    }

    fn on_tour(&mut self, attempt: usize, tour: &[NodeId]) {
        info!("attempt {attempt}: tour of {} waypoints", tour.len());
        self.inner.on_tour(attempt, tour);
    }

    fn on_moves(&mut self, attempt: usize, moves: &[Move]) {
        println!("  attempt {attempt}: {} moves", moves.len());
        self.inner.on_moves(attempt, moves);
    }

    fn on_survey_dropped(&mut self, id: SurveyId, survey: &Survey) {
        self.dropped.push(survey.location.clone());
        self.inner.on_survey_dropped(id, survey);
    }

    fn on_plan_end(&mut self, plan: &FlightPlan, surveys: &[Survey]) {
        self.inner.on_plan_end(plan, surveys);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== campus — survey flight planner ===");
    println!("Seed: {SEED}  |  Move limit: {MOVE_LIMIT}");
    println!();

    // 1. Load inputs.
    let surveys = load_surveys_reader(Cursor::new(SURVEYS_CSV))?;
    let zones = load_zones_reader(Cursor::new(ZONES_CSV))?;
    println!("Loaded {} surveys, {} exclusion zones", surveys.len(), zones.len());

    // 2. Config: defaults apart from seed and budget.
    let config = PlannerConfig {
        seed:       SEED,
        move_limit: MOVE_LIMIT,
        ..PlannerConfig::default()
    };

    // 3. Build planner.
    let launch = Position::new(LAUNCH_LAT, LAUNCH_LON);
    let mut planner = PlannerBuilder::new(config, launch, surveys, VisibilityRouter)
        .zones(zones)
        .build()?;
    println!("Map: {} routable nodes", planner.map.node_count());
    println!();

    // 4. Set up output.
    let out_dir = Path::new("output/campus");
    std::fs::create_dir_all(out_dir)?;
    let writer = CsvWriter::new(out_dir, STEM)?;
    let mut obs = CountingObserver::new(PlanOutputObserver::new(writer));

    // 5. Plan.
    let t0 = Instant::now();
    let plan = planner.plan(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!();
    println!("Planned in {:.3} s after {} attempt(s)", elapsed.as_secs_f64(), obs.attempts);
    println!("  moves            : {}", plan.moves.len());
    println!("  readings         : {}", plan.reading_count());
    println!("  ends near launch : {}", plan.ends_near_launch());
    if !obs.dropped.is_empty() {
        println!("  dropped          : {}", obs.dropped.join(", "));
    }
    println!("  written          : {}/flightpath-{STEM}.txt, readings-{STEM}.csv", out_dir.display());
    println!();

    // 7. Per-survey table.
    println!("{:<20} {:<8} {:<10}", "Location", "Visited", "Reading");
    println!("{}", "-".repeat(40));
    for s in &planner.surveys {
        println!(
            "{:<20} {:<8} {:<10}",
            s.location,
            if s.visited { "yes" } else { "no" },
            s.reading.to_string(),
        );
    }

    Ok(())
}
