//! The `TraceWriter` trait implemented by trace backends.

use crate::{EventRow, NavTraceRow, OutputResult, TimerTraceRow};

/// Sink for session trace rows.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] because
/// observer callbacks have no return value.
pub trait TraceWriter {
    fn write_nav(&mut self, row: &NavTraceRow) -> OutputResult<()>;

    fn write_timer(&mut self, row: &TimerTraceRow) -> OutputResult<()>;

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
