//! Planar position type and the geometric predicates the planner is built on.
//!
//! The operating area is a few hundred metres across, so all operations use
//! planar approximations on raw degrees: `lon` is the x axis (east) and
//! `lat` the y axis (north).  Bearings are measured counter-clockwise from
//! east.  Move steps are 3·10⁻⁴ degrees, below what `f32` resolves at
//! these magnitudes, so everything is `f64`.
//!
//! Degenerate inputs (coincident points, zero-length segments) are not
//! special-cased; results are whatever the arithmetic below produces.

/// A geographic coordinate treated as a point in the plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean distance in degree space.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        ((self.lon - other.lon).powi(2) + (self.lat - other.lat).powi(2)).sqrt()
    }

    /// Bearing from `self` to `other` in degrees, counter-clockwise from
    /// east, in `[0, 360)`.
    pub fn bearing(self, other: Position) -> f64 {
        let deg = (other.lat - self.lat).atan2(other.lon - self.lon).to_degrees();
        let deg = if deg < 0.0 { deg + 360.0 } else { deg };
        // -1e-15 + 360.0 rounds to 360.0
        if deg >= 360.0 { 0.0 } else { deg }
    }

    /// The point `length` away from `self` along `bearing` (degrees).
    #[inline]
    pub fn project(self, bearing: f64, length: f64) -> Position {
        let rad = bearing.to_radians();
        Position {
            lat: self.lat + length * rad.sin(),
            lon: self.lon + length * rad.cos(),
        }
    }

    #[inline]
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }

    /// `[lon, lat]`, the x/y order used by the spatial index.
    #[inline]
    pub fn xy(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Predicates ────────────────────────────────────────────────────────────────

/// Twice the signed area of triangle `a, b, c`.  Positive when `c` lies to
/// the left of `a → b`.
#[inline]
fn orientation(a: Position, b: Position, c: Position) -> f64 {
    (b.lon - a.lon) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lon - a.lon)
}

/// `p` lies within the bounding box of `a, b`.  Only meaningful once `p` is
/// known to be collinear with the segment.
#[inline]
fn within_span(a: Position, b: Position, p: Position) -> bool {
    p.lon >= a.lon.min(b.lon)
        && p.lon <= a.lon.max(b.lon)
        && p.lat >= a.lat.min(b.lat)
        && p.lat <= a.lat.max(b.lat)
}

#[inline]
fn on_segment(a: Position, b: Position, p: Position) -> bool {
    orientation(a, b, p) == 0.0 && within_span(a, b, p)
}

/// `true` if closed segments `p1–p2` and `p3–p4` share at least one point.
///
/// Touching counts: a shared endpoint, an endpoint lying on the other
/// segment, and collinear overlap all return `true`.  Zone edges rely on
/// this so that grazing a zone boundary is never a clear path.
pub fn segments_intersect(p1: Position, p2: Position, p3: Position, p4: Position) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    let straddles_34 = (d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0);
    let straddles_12 = (d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0);
    if straddles_34 && straddles_12 {
        return true;
    }

    (d1 == 0.0 && within_span(p3, p4, p1))
        || (d2 == 0.0 && within_span(p3, p4, p2))
        || (d3 == 0.0 && within_span(p1, p2, p3))
        || (d4 == 0.0 && within_span(p1, p2, p4))
}

/// Boundary-inclusive point-in-polygon test (crossing number).
///
/// `ring` is an open ring: the closing edge from the last vertex back to the
/// first is implied.  Rings with fewer than three vertices contain nothing.
pub fn point_in_polygon(p: Position, ring: &[Position]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if on_segment(a, b, p) {
            return true;
        }
        if (a.lat > p.lat) != (b.lat > p.lat) {
            let x = (b.lon - a.lon) * (p.lat - a.lat) / (b.lat - a.lat) + a.lon;
            if p.lon < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
