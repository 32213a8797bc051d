//! Survey point records.
//!
//! A `Survey` is what the caller hands in: where the sensor is, how it
//! identifies itself, and what it will report when read.  The planner only
//! ever mutates `visited`.

use std::fmt;
use std::str::FromStr;

use crate::{FpError, Position};

/// A sensor reading, or the sentinel for "the sensor had nothing to report".
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading {
    Value(f64),
    #[default]
    Unavailable,
}

impl Reading {
    pub fn value(self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::Unavailable => None,
        }
    }
}

impl FromStr for Reading {
    type Err = FpError;

    /// `"null"`, `"NaN"` and the empty string map to `Unavailable`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "null" | "NaN" => Ok(Reading::Unavailable),
            v => v
                .parse::<f64>()
                .map(|x| if x.is_nan() { Reading::Unavailable } else { Reading::Value(x) })
                .map_err(|_| FpError::Parse(format!("invalid reading {v:?}"))),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(v) => write!(f, "{v}"),
            Reading::Unavailable => f.write_str("null"),
        }
    }
}

/// One survey point the vehicle should fly to and read.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Survey {
    /// Location token the sensor is addressed by (e.g. a three-word address).
    pub location: String,
    /// Battery percentage reported by the sensor.
    pub battery: f32,
    pub reading: Reading,
    pub pos: Position,
    /// Set by the move synthesizer when a reading is recorded.  Callers reset
    /// it before every re-plan.
    pub visited: bool,
}

impl Survey {
    pub fn new(location: impl Into<String>, pos: Position, battery: f32, reading: Reading) -> Self {
        Self {
            location: location.into(),
            battery,
            reading,
            pos,
            visited: false,
        }
    }
}
