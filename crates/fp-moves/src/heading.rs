//! The 36 headings a move may take.

use std::fmt;

/// A move direction: a multiple of 10° in `[0, 360)`, counter-clockwise
/// from east.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading(u16);

impl Heading {
    pub const STEP:  u16 = 10;
    pub const COUNT: u16 = 36;

    pub const EAST:  Heading = Heading(0);
    pub const NORTH: Heading = Heading(90);
    pub const WEST:  Heading = Heading(180);
    pub const SOUTH: Heading = Heading(270);

    /// `None` unless `degrees` is a multiple of 10 below 360.
    pub fn new(degrees: u16) -> Option<Self> {
        (degrees < 360 && degrees % Self::STEP == 0).then_some(Heading(degrees))
    }

    /// Nearest heading to a bearing in degrees.  Halves round up.
    pub fn from_bearing(bearing: f64) -> Self {
        let tens = (bearing / Self::STEP as f64).round() as i64;
        Heading((tens * Self::STEP as i64).rem_euclid(360) as u16)
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Turn by `steps` multiples of 10°; positive is counter-clockwise.
    pub fn rotate(self, steps: i32) -> Self {
        let deg = self.0 as i32 + steps * Self::STEP as i32;
        Heading(deg.rem_euclid(360) as u16)
    }

    pub fn reverse(self) -> Self {
        self.rotate(18)
    }

    /// Smallest angle between this heading and `bearing`, in `[0, 180]`.
    pub fn angular_distance(self, bearing: f64) -> f64 {
        let d = (self.0 as f64 - bearing).rem_euclid(360.0);
        d.min(360.0 - d)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
