//! The `DeliverySession` struct and its driving loop.

use dc_core::{DeliveryType, Millis, OrderId, SimClock, TaskId};
use dc_mobility::{DeliveryPhase, NavState, NavTick, Navigator, ProgressTimer};
use dc_render::{Frame, render_navigation, render_timer};
use dc_schedule::Scheduler;
use dc_spatial::{MapLocation, ResortLayout};

use crate::{SessionError, SessionObserver, SessionResult, SessionView};

/// Callback invoked exactly once when a run completes.
pub type CompletionHook = Box<dyn FnMut(OrderId) + Send>;

/// The simulator a session mounted for its delivery type.
#[derive(Clone, Debug)]
pub enum Simulator {
    /// Waypoint map with a walking courier marker.
    Navigation {
        navigator: Navigator,
        locations: Vec<MapLocation>,
    },
    /// Linear room-delivery timer.
    Timer(ProgressTimer),
}

impl Simulator {
    fn tick_interval_ms(&self) -> u64 {
        match self {
            Simulator::Navigation { navigator, .. } => navigator.config().tick_interval_ms,
            Simulator::Timer(timer)                 => timer.config().tick_interval_ms,
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Simulator::Navigation { navigator, .. } => navigator.state() == NavState::Navigating,
            Simulator::Timer(timer)                 => timer.is_running(),
        }
    }

    fn has_arrived(&self) -> bool {
        match self {
            Simulator::Navigation { navigator, .. } => navigator.state() == NavState::Arrived,
            Simulator::Timer(timer)                 => timer.phase() == DeliveryPhase::Arrived,
        }
    }
}

/// One order's delivery simulation.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct DeliverySession {
    pub(crate) order:         OrderId,
    pub(crate) destination:   String,
    pub(crate) delivery_type: DeliveryType,
    pub(crate) layout:        ResortLayout,
    pub(crate) simulator:     Simulator,
    pub(crate) clock:         SimClock,
    pub(crate) scheduler:     Scheduler,
    /// The single repeating task driving the simulator while it runs.
    pub(crate) task:          Option<TaskId>,
    pub(crate) on_complete:   Option<CompletionHook>,
    /// Completion already reported for the current run.
    pub(crate) completed:     bool,
    pub(crate) disposed:      bool,
}

impl DeliverySession {
    // ── Controls ──────────────────────────────────────────────────────────

    /// Begin the run.  Returns `false` if the simulator was not startable
    /// (already running, paused, or finished).
    pub fn start(&mut self) -> SessionResult<bool> {
        self.ensure_live()?;
        let started = match &mut self.simulator {
            Simulator::Navigation { navigator, .. } => navigator.start(),
            Simulator::Timer(timer) => timer.is_running() && self.task.is_none(),
        };
        if started {
            tracing::info!(order = %self.order, destination = %self.destination, "delivery started");
            self.arm()?;
        }
        Ok(started)
    }

    /// Stop ticking without losing any progress.
    pub fn pause(&mut self) -> SessionResult<bool> {
        self.ensure_live()?;
        let paused = match &mut self.simulator {
            Simulator::Navigation { navigator, .. } => navigator.pause(),
            Simulator::Timer(timer) => self.task.is_some() && timer.pause(),
        };
        if paused {
            self.disarm();
        }
        Ok(paused)
    }

    /// Continue from exactly where `pause` left off.
    pub fn resume(&mut self) -> SessionResult<bool> {
        self.ensure_live()?;
        let resumed = match &mut self.simulator {
            Simulator::Navigation { navigator, .. } => navigator.resume(),
            Simulator::Timer(timer) => timer.resume(),
        };
        if resumed && self.simulator.is_running() {
            self.arm()?;
        }
        Ok(resumed)
    }

    /// Pause if running, resume if paused.  Returns `true` when the session
    /// is paused afterwards.
    pub fn toggle_pause(&mut self) -> SessionResult<bool> {
        if self.pause()? {
            return Ok(true);
        }
        self.resume()?;
        Ok(self.is_paused())
    }

    /// Throw the run away: back to the start, ready for a fresh `start`.
    pub fn reset(&mut self) -> SessionResult<()> {
        self.ensure_live()?;
        self.disarm();
        match &mut self.simulator {
            Simulator::Navigation { navigator, .. } => navigator.reset(),
            Simulator::Timer(timer) => timer.reset(),
        }
        self.completed = false;
        tracing::info!(order = %self.order, "delivery reset");
        Ok(())
    }

    /// The courier's explicit "delivered" action on a room delivery.
    ///
    /// Fires the completion hook once per run and stops the timer.
    /// Navigator sessions complete on arrival instead, so this returns
    /// `false` for them.
    pub fn complete<O: SessionObserver>(&mut self, observer: &mut O) -> SessionResult<bool> {
        self.ensure_live()?;
        let Simulator::Timer(timer) = &mut self.simulator else {
            return Ok(false);
        };
        if !timer.complete() {
            return Ok(false);
        }
        self.disarm();
        self.fire_complete(observer);
        Ok(true)
    }

    /// Cancel the timer for good.  Every later call returns
    /// [`SessionError::Disposed`].
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disarm();
        self.scheduler.clear();
        self.disposed = true;
        tracing::debug!(order = %self.order, "session disposed");
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Advance virtual time by `ms`, running every tick that falls due.
    ///
    /// Returns the number of ticks applied.
    pub fn advance<O: SessionObserver>(&mut self, ms: u64, observer: &mut O) -> SessionResult<usize> {
        self.ensure_live()?;
        let target = self.clock.now().offset(ms);
        let mut applied = 0;

        while let Some((due, task)) = self.scheduler.pop_due(target) {
            self.clock.advance_to(due);
            if Some(task) != self.task {
                continue;
            }
            self.process_tick(observer);
            applied += 1;
        }

        self.clock.advance_to(target);
        Ok(applied)
    }

    /// Advance until the simulator reaches its arrived state, giving up
    /// after `limit_ms` of virtual time.
    ///
    /// Returns the arrival instant.  The session must have been started.
    pub fn run_until_arrived<O: SessionObserver>(
        &mut self,
        limit_ms: u64,
        observer: &mut O,
    ) -> SessionResult<Millis> {
        self.ensure_live()?;
        let deadline = self.clock.now().offset(limit_ms);
        while !self.simulator.has_arrived() {
            let Some(due) = self.scheduler.next_due().filter(|&d| d <= deadline) else {
                return Err(SessionError::Timeout { limit_ms });
            };
            self.advance(due.since(self.clock.now()), observer)?;
        }
        Ok(self.clock.now())
    }

    fn process_tick<O: SessionObserver>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        let mut arrived = false;

        match &mut self.simulator {
            Simulator::Navigation { navigator, .. } => match navigator.tick() {
                NavTick::Inactive => return,
                NavTick::Moved    => {}
                NavTick::Arrived  => arrived = true,
            },
            Simulator::Timer(timer) => {
                if !timer.is_running() {
                    return;
                }
                for phase in timer.tick() {
                    observer.on_phase_change(self.order, now, phase);
                    if phase == DeliveryPhase::Arrived {
                        arrived = true;
                    }
                }
            }
        }

        tracing::debug!(order = %self.order, %now, "tick");
        let view = self.view();
        observer.on_tick(self.order, now, &view);
        if observer.wants_frames() {
            observer.on_frame(self.order, now, &self.frame());
        }

        if arrived {
            self.disarm();
            tracing::info!(order = %self.order, %now, "courier arrived");
            // Room deliveries wait for the explicit complete action.
            if matches!(self.simulator, Simulator::Navigation { .. }) {
                self.fire_complete(observer);
            }
        }
    }

    fn fire_complete<O: SessionObserver>(&mut self, observer: &mut O) {
        if self.completed {
            return;
        }
        self.completed = true;
        let now = self.clock.now();
        tracing::info!(order = %self.order, %now, "delivery complete");
        if let Some(hook) = self.on_complete.as_mut() {
            hook(self.order);
        }
        observer.on_complete(self.order, now);
    }

    fn arm(&mut self) -> SessionResult<()> {
        if self.task.is_none() {
            let interval = self.simulator.tick_interval_ms();
            self.task = Some(self.scheduler.schedule_repeating(interval, self.clock.now())?);
        }
        Ok(())
    }

    fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            self.scheduler.cancel(task);
        }
    }

    fn ensure_live(&self) -> SessionResult<()> {
        if self.disposed {
            return Err(SessionError::Disposed);
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn order(&self) -> OrderId {
        self.order
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn delivery_type(&self) -> DeliveryType {
        self.delivery_type
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    /// `true` while a timer task is armed.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn is_paused(&self) -> bool {
        match &self.simulator {
            Simulator::Navigation { navigator, .. } => navigator.state() == NavState::Paused,
            Simulator::Timer(timer) => timer.is_paused(),
        }
    }

    pub fn has_arrived(&self) -> bool {
        self.simulator.has_arrived()
    }

    /// `true` once the completion hook has fired for the current run.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of active scheduler tasks (0 or 1).
    pub fn active_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn view(&self) -> SessionView {
        match &self.simulator {
            Simulator::Navigation { navigator, .. } => SessionView::Navigation(navigator.snapshot()),
            Simulator::Timer(timer) => SessionView::Timer(timer.snapshot()),
        }
    }

    /// Render the current state.
    pub fn frame(&self) -> Frame {
        match &self.simulator {
            Simulator::Navigation { navigator, locations } => {
                render_navigation(&navigator.snapshot(), locations, &self.layout)
            }
            Simulator::Timer(timer) => render_timer(&timer.snapshot()),
        }
    }
}

impl std::fmt::Debug for DeliverySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverySession")
            .field("order", &self.order)
            .field("destination", &self.destination)
            .field("delivery_type", &self.delivery_type)
            .field("now", &self.clock.now())
            .field("task", &self.task)
            .field("completed", &self.completed)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
