//! CSV survey and zone loaders.
//!
//! # Survey CSV
//!
//! One row per survey.  Row order fixes `SurveyId`s.
//!
//! ```csv
//! location,lat,lon,battery,reading
//! slips.mass.baking,55.9451,-3.1876,96.3,118.42
//! ever.pale.nest,55.9437,-3.1863,12.0,null
//! ```
//!
//! **`reading`** field:
//!
//! | Value                  | Meaning                 |
//! |------------------------|-------------------------|
//! | *f64*                  | `Reading::Value`        |
//! | `null`, `NaN`, empty   | `Reading::Unavailable`  |
//!
//! # Zone CSV
//!
//! One row per corner, in ring order.  Rows sharing a `zone` label form one
//! ring; rings come out in order of each label's first row.  Do not repeat
//! the first corner at the end.
//!
//! ```csv
//! zone,lat,lon
//! library,55.9429,-3.1891
//! library,55.9429,-3.1883
//! library,55.9435,-3.1883
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fp_core::{Position, Reading, Survey};

use crate::{PlanError, PlanResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SurveyRecord {
    location: String,
    lat:      f64,
    lon:      f64,
    battery:  f32,
    reading:  String,
}

#[derive(Deserialize)]
struct ZoneRecord {
    zone: String,
    lat:  f64,
    lon:  f64,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load survey records from a CSV file.
pub fn load_surveys_csv(path: &Path) -> PlanResult<Vec<Survey>> {
    let file = std::fs::File::open(path)?;
    load_surveys_reader(file)
}

/// Like [`load_surveys_csv`] but accepts any `Read` source.
pub fn load_surveys_reader<R: Read>(reader: R) -> PlanResult<Vec<Survey>> {
    let mut surveys = Vec::new();
    for (row, result) in csv_reader(reader).deserialize::<SurveyRecord>().enumerate() {
        let r = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let reading: Reading = r
            .reading
            .parse()
            .map_err(|e| PlanError::Parse(format!("survey row {}: {e}", row + 1)))?;
        surveys.push(Survey::new(r.location, Position::new(r.lat, r.lon), r.battery, reading));
    }
    Ok(surveys)
}

/// Load zone rings from a CSV file.
pub fn load_zones_csv(path: &Path) -> PlanResult<Vec<Vec<Position>>> {
    let file = std::fs::File::open(path)?;
    load_zones_reader(file)
}

/// Like [`load_zones_csv`] but accepts any `Read` source.
pub fn load_zones_reader<R: Read>(reader: R) -> PlanResult<Vec<Vec<Position>>> {
    let mut slot: HashMap<String, usize> = HashMap::new();
    let mut rings: Vec<Vec<Position>> = Vec::new();

    for result in csv_reader(reader).deserialize::<ZoneRecord>() {
        let r = result.map_err(|e| PlanError::Parse(e.to_string()))?;
        let ix = *slot.entry(r.zone).or_insert_with(|| {
            rings.push(Vec::new());
            rings.len() - 1
        });
        rings[ix].push(Position::new(r.lat, r.lon));
    }
    Ok(rings)
}
