//! `TraceObserver<W>` bridges `SessionObserver` to a `TraceWriter`.

use dc_core::{Millis, OrderId};
use dc_mobility::DeliveryPhase;
use dc_sim::{SessionObserver, SessionView};

use crate::row::{EventRow, NavTraceRow, TimerTraceRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that records every tick and event to a
/// [`TraceWriter`].
///
/// One observer may be shared by many sessions in turn; rows carry the
/// order id.  Write errors are kept (first one wins) and surfaced by
/// [`take_error`][Self::take_error] or [`finish`][Self::finish].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush the writer and report the first error seen.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => self.rows += 1,
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl<W: TraceWriter> SessionObserver for TraceObserver<W> {
    fn on_tick(&mut self, order: OrderId, now: Millis, view: &SessionView) {
        let result = match view {
            SessionView::Navigation(snap) => {
                self.writer.write_nav(&NavTraceRow::from_snapshot(order, now, snap))
            }
            SessionView::Timer(snap) => {
                self.writer.write_timer(&TimerTraceRow::from_snapshot(order, now, snap))
            }
        };
        self.store(result);
    }

    fn on_phase_change(&mut self, order: OrderId, now: Millis, phase: DeliveryPhase) {
        let row = EventRow { order_id: order.0, time_ms: now.0, event: phase.as_str() };
        let result = self.writer.write_event(&row);
        self.store(result);
    }

    fn on_complete(&mut self, order: OrderId, now: Millis) {
        let row = EventRow { order_id: order.0, time_ms: now.0, event: "completed" };
        let result = self.writer.write_event(&row);
        self.store(result);
    }
}
