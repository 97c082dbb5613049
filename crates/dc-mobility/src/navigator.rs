//! The waypoint navigator.

use dc_core::Position;
use dc_core::geo::DIRECTION_EPSILON;
use dc_spatial::Route;

use crate::{MobilityResult, NavConfig, NavSnapshot, NavState};

/// Outcome of one [`Navigator::tick`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum NavTick {
    /// Not navigating; nothing changed.
    Inactive,
    /// The courier moved one step.
    Moved,
    /// The courier reached the destination on this tick.  Returned once per
    /// run; the navigator is `Arrived` until reset.
    Arrived,
}

/// Walks a courier marker from the route start straight toward the route
/// destination.
///
/// All mutation goes through the transition methods (`start`, `pause`,
/// `resume`, `reset`) and `tick`.  Transitions that do not apply in the
/// current state are ignored and return `false`.
#[derive(Clone, Debug)]
pub struct Navigator {
    config:         NavConfig,
    route:          Route,
    state:          NavState,
    position:       Position,
    progress:       f32,
    eta:            f32,
    /// Start-to-destination distance, fixed for the navigator's lifetime.
    total_distance: f32,
    ticks:          u64,
}

impl Navigator {
    /// Create an idle navigator at the route's start.
    pub fn new(route: Route, config: NavConfig) -> MobilityResult<Self> {
        config.validate()?;
        let total_distance = route.start().distance(route.destination());
        Ok(Self {
            state:    NavState::Idle,
            position: route.start(),
            progress: 0.0,
            eta:      config.initial_eta,
            total_distance,
            ticks:    0,
            config,
            route,
        })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Idle → Navigating.
    pub fn start(&mut self) -> bool {
        self.transition(NavState::Idle, NavState::Navigating)
    }

    /// Navigating → Paused.  Position, progress, and ETA are kept as is.
    pub fn pause(&mut self) -> bool {
        self.transition(NavState::Navigating, NavState::Paused)
    }

    /// Paused → Navigating.
    pub fn resume(&mut self) -> bool {
        self.transition(NavState::Paused, NavState::Navigating)
    }

    /// Any state → Idle, back at the start with the initial ETA.
    pub fn reset(&mut self) {
        tracing::debug!(from = %self.state, "navigator reset");
        self.state    = NavState::Idle;
        self.position = self.route.start();
        self.progress = 0.0;
        self.eta      = self.config.initial_eta;
        self.ticks    = 0;
    }

    fn transition(&mut self, from: NavState, to: NavState) -> bool {
        if self.state != from {
            return false;
        }
        tracing::debug!(%from, %to, "navigator transition");
        self.state = to;
        true
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation by one timer tick.
    pub fn tick(&mut self) -> NavTick {
        if self.state != NavState::Navigating {
            return NavTick::Inactive;
        }
        self.ticks += 1;

        let destination = self.route.destination();
        let remaining = self.position.distance(destination);
        if remaining < self.config.arrival_radius {
            self.state    = NavState::Arrived;
            self.progress = 100.0;
            self.eta      = 0.0;
            tracing::info!(ticks = self.ticks, position = %self.position, "courier arrived");
            return NavTick::Arrived;
        }

        self.position = self.position.step_toward(destination, self.config.step);
        self.eta      = (self.eta - self.config.eta_decrement).max(0.0);
        self.progress = self.moving_progress();
        NavTick::Moved
    }

    /// `100 × (1 − remaining / total)`, held in `[0, 99]`.
    fn moving_progress(&self) -> f32 {
        if self.total_distance < DIRECTION_EPSILON {
            return 0.0;
        }
        let remaining = self.position.distance(self.route.destination());
        (100.0 * (1.0 - remaining / self.total_distance)).clamp(0.0, 99.0)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn eta(&self) -> f32 {
        self.eta
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Distance left to the destination in map units.
    pub fn remaining_distance(&self) -> f32 {
        self.position.distance(self.route.destination())
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            state:    self.state,
            position: self.position,
            progress: self.progress,
            eta:      self.eta,
            route:    self.route.clone(),
            ticks:    self.ticks,
        }
    }
}
