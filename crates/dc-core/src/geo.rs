//! Coordinate types.
//!
//! Two coordinate spaces coexist:
//!
//! - [`Position`]: the abstract schematic space of the resort map (canvas
//!   units, origin top-left, `y` grows downward).  All simulated motion
//!   happens here.
//! - [`GeoPoint`]: WGS-84 latitude/longitude, used only by the amenity
//!   directory for real-world lookups.

/// Distances below this are treated as zero when normalising a direction.
pub const DIRECTION_EPSILON: f32 = 1e-4;

// ── Position ──────────────────────────────────────────────────────────────────

/// A point on the schematic resort map.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (f32, f32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance in map units.
    #[inline]
    pub fn distance(self, other: Position) -> f32 {
        let (dx, dy) = self.delta_to(other);
        dx.hypot(dy)
    }

    /// Move `step` units along the straight line toward `target`.
    ///
    /// Never overshoots: if `target` is closer than `step` the result is
    /// `target` itself.  A zero-length direction also yields `target`, so the
    /// result is never NaN.
    pub fn step_toward(self, target: Position, step: f32) -> Position {
        let (dx, dy) = self.delta_to(target);
        let dist = dx.hypot(dy);
        if dist < DIRECTION_EPSILON || dist <= step {
            return target;
        }
        Position {
            x: self.x + dx / dist * step,
            y: self.y + dy / dist * step,
        }
    }

    /// `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy is about ±0.5 % with f32 rounding, plenty for telling two
    /// resort amenities apart.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
