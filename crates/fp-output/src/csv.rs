//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `flightpath-<stem>.txt`: no header,
//!   `index,start_lon,start_lat,heading,end_lon,end_lat,location` with
//!   `null` when no reading was taken
//! - `readings-<stem>.csv`: header row, then one row per survey

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, SurveyStatusRow};

/// Writes a flight plan to two CSV files.
pub struct CsvWriter {
    flightpath: Writer<File>,
    readings:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) both files in `dir` and write the readings header.
    pub fn new(dir: &Path, stem: &str) -> OutputResult<Self> {
        let flightpath = WriterBuilder::new()
            .has_headers(false)
            .from_path(dir.join(format!("flightpath-{stem}.txt")))?;

        let mut readings = Writer::from_path(dir.join(format!("readings-{stem}.csv")))?;
        readings.write_record(["location", "lat", "lon", "battery", "reading", "visited"])?;

        Ok(Self {
            flightpath,
            readings,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            self.flightpath.write_record(&[
                row.index.to_string(),
                row.start_lon.to_string(),
                row.start_lat.to_string(),
                row.heading.to_string(),
                row.end_lon.to_string(),
                row.end_lat.to_string(),
                row.location.clone().unwrap_or_else(|| "null".to_owned()),
            ])?;
        }
        Ok(())
    }

    fn write_survey_status(&mut self, rows: &[SurveyStatusRow]) -> OutputResult<()> {
        for row in rows {
            self.readings.write_record(&[
                row.location.clone(),
                row.lat.to_string(),
                row.lon.to_string(),
                row.battery.to_string(),
                row.reading.to_string(),
                (row.visited as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flightpath.flush()?;
        self.readings.flush()?;
        Ok(())
    }
}
