//! Session observer trait for progress reporting and trace collection.

use dc_core::{Millis, OrderId};
use dc_mobility::{DeliveryPhase, NavSnapshot, TimerSnapshot};
use dc_render::Frame;

/// State of whichever simulator a session mounted.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionView {
    Navigation(NavSnapshot),
    Timer(TimerSnapshot),
}

impl SessionView {
    /// Completion percentage in `[0, 100]`.
    pub fn progress(&self) -> f32 {
        match self {
            SessionView::Navigation(s) => s.progress,
            SessionView::Timer(s)      => f32::from(s.progress),
        }
    }
}

/// Callbacks invoked by [`DeliverySession`][crate::DeliverySession] while
/// it is driven.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SessionObserver for ProgressPrinter {
///     fn on_tick(&mut self, order: OrderId, now: Millis, view: &SessionView) {
///         println!("{order} {now}: {:.0}%", view.progress());
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called after every simulator tick that changed state.
    fn on_tick(&mut self, _order: OrderId, _now: Millis, _view: &SessionView) {}

    /// Called once for each room-delivery phase entered.
    fn on_phase_change(&mut self, _order: OrderId, _now: Millis, _phase: DeliveryPhase) {}

    /// Return `true` to receive a rendered frame after every tick.
    fn wants_frames(&self) -> bool {
        false
    }

    /// Called after every tick when [`wants_frames`][Self::wants_frames] is
    /// `true`.
    fn on_frame(&mut self, _order: OrderId, _now: Millis, _frame: &Frame) {}

    /// Called exactly once per completed run, right after the session's own
    /// completion hook.
    fn on_complete(&mut self, _order: OrderId, _now: Millis) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
