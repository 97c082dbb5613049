//! `dc-schedule` — the timer abstraction behind every running simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `Scheduler` (`BTreeMap<(Millis, u64), TaskId>`)           |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Model
//!
//! A simulation registers one repeating task while it runs and cancels it
//! when it pauses, arrives, completes, or is disposed.  The driver advances
//! a virtual clock and pops due tasks one at a time:
//!
//! ```text
//! while let Some((due, task)) = scheduler.pop_due(now):
//!     dispatch tick for `task` at `due`
//! ```
//!
//! Because the queue is drained sequentially a task's ticks never overlap,
//! and a task cancelled by one tick's handler never fires again, even if
//! it was already due.

pub mod error;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::Scheduler;
