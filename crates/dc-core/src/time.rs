//! Virtual time.
//!
//! Simulations are driven by a virtual millisecond clock rather than the
//! host's timers.  The clock only moves when the driver advances it, so a
//! paused session accumulates no time at all and tests can step through a
//! whole delivery without sleeping.

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// Milliseconds since the owning session was created.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Return the instant `ms` milliseconds after `self`, saturating at
    /// the end of time.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self` (saturating at zero).
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        self.offset(rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T+{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Monotonic virtual clock owned by one session.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: Millis,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Advance the clock by `ms` milliseconds.
    #[inline]
    pub fn advance_by(&mut self, ms: u64) {
        self.now = self.now.offset(ms);
    }

    /// Move the clock forward to `t`.  Earlier instants are ignored.
    #[inline]
    pub fn advance_to(&mut self, t: Millis) {
        if t > self.now {
            self.now = t;
        }
    }

    /// Break elapsed time into whole (minutes, seconds).
    pub fn elapsed_min_sec(&self) -> (u64, u64) {
        let secs = self.now.0 / 1_000;
        (secs / 60, secs % 60)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_min_sec();
        write!(f, "{} ({:02}:{:02})", self.now, m, s)
    }
}
