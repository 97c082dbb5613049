//! Navigator state, configuration, and snapshots.

use dc_core::Position;
use dc_spatial::Route;

use crate::{MobilityError, MobilityResult};

// ── NavState ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavState {
    #[default]
    Idle,
    Navigating,
    Paused,
    /// Terminal until `reset`.
    Arrived,
}

impl NavState {
    pub fn as_str(self) -> &'static str {
        match self {
            NavState::Idle       => "idle",
            NavState::Navigating => "navigating",
            NavState::Paused     => "paused",
            NavState::Arrived    => "arrived",
        }
    }
}

impl std::fmt::Display for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Tuning for the navigator.  Defaults match the courier portal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Milliseconds between ticks.
    pub tick_interval_ms: u64,
    /// Map units moved per tick.
    pub step: f32,
    /// Distance below which the courier counts as arrived.  Must be positive
    /// so the direction vector is never computed at zero distance.
    pub arrival_radius: f32,
    /// ETA shown before the run starts, in minutes.
    pub initial_eta: f32,
    /// ETA subtracted per tick, floored at zero.
    pub eta_decrement: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            step:             2.5,
            arrival_radius:   20.0,
            initial_eta:      5.0,
            eta_decrement:    0.1,
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> MobilityResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(MobilityError::Config("tick_interval_ms must be > 0".into()));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(MobilityError::Config(format!("step must be > 0, got {}", self.step)));
        }
        if !(self.arrival_radius.is_finite() && self.arrival_radius > 0.0) {
            return Err(MobilityError::Config(format!(
                "arrival_radius must be > 0, got {}",
                self.arrival_radius
            )));
        }
        if !(self.initial_eta.is_finite() && self.initial_eta >= 0.0) {
            return Err(MobilityError::Config(format!(
                "initial_eta must be >= 0, got {}",
                self.initial_eta
            )));
        }
        if !(self.eta_decrement.is_finite() && self.eta_decrement >= 0.0) {
            return Err(MobilityError::Config(format!(
                "eta_decrement must be >= 0, got {}",
                self.eta_decrement
            )));
        }
        Ok(())
    }
}

// ── NavSnapshot ───────────────────────────────────────────────────────────────

/// Everything a view needs to draw one navigator frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavSnapshot {
    pub state:    NavState,
    pub position: Position,
    /// Percentage in `[0, 100]`; 100 only once arrived.
    pub progress: f32,
    /// Minutes remaining.
    pub eta:      f32,
    pub route:    Route,
    /// Ticks applied since the last reset.
    pub ticks:    u64,
}

impl NavSnapshot {
    /// Rounded-up ETA for display, e.g. `"5 min"` or `"Arrived"`.
    pub fn eta_label(&self) -> String {
        if self.state == NavState::Arrived {
            return "Arrived".to_string();
        }
        if self.eta < 1.0 {
            return "< 1 min".to_string();
        }
        format!("{} min", self.eta.ceil() as u32)
    }
}
