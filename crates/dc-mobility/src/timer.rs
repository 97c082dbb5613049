//! Linear progress timer used for room deliveries.
//!
//! Time here is tick-counted: a paused timer simply receives no effective
//! ticks, and nothing catches up on resume.

use crate::{MobilityError, MobilityResult};

// ── DeliveryPhase ─────────────────────────────────────────────────────────────

/// Phases of a room delivery.  Only ever advance, except on reset.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliveryPhase {
    #[default]
    Walking,
    Approaching,
    Arrived,
}

impl DeliveryPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryPhase::Walking     => "walking",
            DeliveryPhase::Approaching => "approaching",
            DeliveryPhase::Arrived     => "arrived",
        }
    }

    /// Status line shown to the courier.
    pub fn label(self) -> &'static str {
        match self {
            DeliveryPhase::Walking     => "Walking to the room",
            DeliveryPhase::Approaching => "Approaching the room",
            DeliveryPhase::Arrived     => "Arrived at the room",
        }
    }
}

impl std::fmt::Display for DeliveryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TimerConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Milliseconds between ticks.
    pub tick_interval_ms:   u64,
    /// Percentage points added per tick.
    pub increment:          u8,
    /// Progress at which walking becomes approaching.
    pub approach_threshold: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:   1_000,
            increment:          5,
            approach_threshold: 80,
        }
    }
}

impl TimerConfig {
    pub fn validate(&self) -> MobilityResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(MobilityError::Config("tick_interval_ms must be > 0".into()));
        }
        if self.increment == 0 || self.increment > 100 {
            return Err(MobilityError::Config(format!(
                "increment must be in 1..=100, got {}",
                self.increment
            )));
        }
        if self.approach_threshold == 0 || self.approach_threshold > 100 {
            return Err(MobilityError::Config(format!(
                "approach_threshold must be in 1..=100, got {}",
                self.approach_threshold
            )));
        }
        Ok(())
    }
}

// ── TimerSnapshot ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerSnapshot {
    pub phase:        DeliveryPhase,
    pub progress:     u8,
    pub elapsed_secs: u64,
    pub paused:       bool,
    pub completed:    bool,
}

// ── ProgressTimer ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ProgressTimer {
    config:       TimerConfig,
    phase:        DeliveryPhase,
    progress:     u8,
    elapsed_secs: u64,
    paused:       bool,
    completed:    bool,
}

impl ProgressTimer {
    pub fn new(config: TimerConfig) -> MobilityResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase:        DeliveryPhase::Walking,
            progress:     0,
            elapsed_secs: 0,
            paused:       false,
            completed:    false,
        })
    }

    /// `true` while ticks still change state.
    pub fn is_running(&self) -> bool {
        !self.paused && !self.completed && self.phase != DeliveryPhase::Arrived
    }

    /// Advance by one tick.
    ///
    /// Returns the phases entered on this tick, in order.  Each phase is
    /// entered at most once per run, so every returned entry is a one-shot
    /// notification.
    pub fn tick(&mut self) -> Vec<DeliveryPhase> {
        if !self.is_running() {
            return Vec::new();
        }

        self.elapsed_secs += 1;
        self.progress = self.progress.saturating_add(self.config.increment).min(100);

        let mut entered = Vec::new();
        if self.phase == DeliveryPhase::Walking && self.progress >= self.config.approach_threshold {
            self.phase = DeliveryPhase::Approaching;
            entered.push(DeliveryPhase::Approaching);
        }
        if self.progress >= 100 {
            self.phase = DeliveryPhase::Arrived;
            entered.push(DeliveryPhase::Arrived);
        }
        for phase in &entered {
            tracing::info!(%phase, progress = self.progress, "delivery phase changed");
        }
        entered
    }

    pub fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        true
    }

    /// Flip the pause flag; returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Mark the delivery handed over.  Returns `true` only on the first call
    /// of a run; the caller fires its completion callback on that result.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        tracing::info!(phase = %self.phase, progress = self.progress, "delivery completed");
        true
    }

    /// Back to walking at 0 %, unpaused, ready for a new run.
    pub fn reset(&mut self) {
        self.phase        = DeliveryPhase::Walking;
        self.progress     = 0;
        self.elapsed_secs = 0;
        self.paused       = false;
        self.completed    = false;
    }

    pub fn phase(&self) -> DeliveryPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase:        self.phase,
            progress:     self.progress,
            elapsed_secs: self.elapsed_secs,
            paused:       self.paused,
            completed:    self.completed,
        }
    }
}
