//! Plain data rows written by trace writers.

use dc_core::{Millis, OrderId};
use dc_mobility::{NavSnapshot, TimerSnapshot};

/// One navigator tick.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTraceRow {
    pub order_id: u32,
    pub time_ms:  u64,
    pub x:        f32,
    pub y:        f32,
    pub progress: f32,
    /// Minutes remaining.
    pub eta:      f32,
    pub state:    &'static str,
}

impl NavTraceRow {
    pub fn from_snapshot(order: OrderId, now: Millis, snap: &NavSnapshot) -> Self {
        Self {
            order_id: order.0,
            time_ms:  now.0,
            x:        snap.position.x,
            y:        snap.position.y,
            progress: snap.progress,
            eta:      snap.eta,
            state:    snap.state.as_str(),
        }
    }
}

/// One progress-timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTraceRow {
    pub order_id:     u32,
    pub time_ms:      u64,
    pub progress:     u8,
    pub elapsed_secs: u64,
    pub phase:        &'static str,
}

impl TimerTraceRow {
    pub fn from_snapshot(order: OrderId, now: Millis, snap: &TimerSnapshot) -> Self {
        Self {
            order_id:     order.0,
            time_ms:      now.0,
            progress:     snap.progress,
            elapsed_secs: snap.elapsed_secs,
            phase:        snap.phase.as_str(),
        }
    }
}

/// A one-shot session event: a phase entered, or completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub order_id: u32,
    pub time_ms:  u64,
    pub event:    &'static str,
}
