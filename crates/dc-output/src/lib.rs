//! `dc-output` — trace writers for delivery sessions.
//!
//! [`CsvTraceWriter`] creates three files in the output directory:
//!
//! | File              | One row per                                     |
//! |-------------------|-------------------------------------------------|
//! | `nav_trace.csv`   | navigator tick (position, progress, ETA, state) |
//! | `timer_trace.csv` | progress-timer tick                             |
//! | `events.csv`      | phase change or completion                      |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `dc_sim::SessionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dc_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! session.run_until_arrived(60_000, &mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{EventRow, NavTraceRow, TimerTraceRow};
pub use writer::TraceWriter;
