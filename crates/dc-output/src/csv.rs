//! CSV trace backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{EventRow, NavTraceRow, OutputResult, TimerTraceRow};

/// Writes session traces to `nav_trace.csv`, `timer_trace.csv`, and
/// `events.csv`.
pub struct CsvTraceWriter {
    nav:      Writer<File>,
    timer:    Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create the three CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nav = Writer::from_path(dir.join("nav_trace.csv"))?;
        nav.write_record(["order_id", "time_ms", "x", "y", "progress", "eta", "state"])?;

        let mut timer = Writer::from_path(dir.join("timer_trace.csv"))?;
        timer.write_record(["order_id", "time_ms", "progress", "elapsed_secs", "phase"])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["order_id", "time_ms", "event"])?;

        Ok(Self { nav, timer, events, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_nav(&mut self, row: &NavTraceRow) -> OutputResult<()> {
        self.nav.write_record(&[
            row.order_id.to_string(),
            row.time_ms.to_string(),
            format!("{:.2}", row.x),
            format!("{:.2}", row.y),
            format!("{:.1}", row.progress),
            format!("{:.1}", row.eta),
            row.state.to_string(),
        ])?;
        Ok(())
    }

    fn write_timer(&mut self, row: &TimerTraceRow) -> OutputResult<()> {
        self.timer.write_record(&[
            row.order_id.to_string(),
            row.time_ms.to_string(),
            row.progress.to_string(),
            row.elapsed_secs.to_string(),
            row.phase.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.order_id.to_string(),
            row.time_ms.to_string(),
            row.event.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nav.flush()?;
        self.timer.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
