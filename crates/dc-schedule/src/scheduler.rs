//! `Scheduler`: a sparse queue of repeating tasks keyed by due time.
//!
//! `BTreeMap` gives O(log Q) insert and pop where Q is the number of queued
//! entries.  A session owns at most one active task, so Q is almost always 1.

use std::collections::{BTreeMap, HashMap};

use dc_core::{Millis, TaskId};

use crate::{ScheduleError, ScheduleResult};

/// An active task: its repeat interval and the sequence number it was first
/// armed with.
#[derive(Copy, Clone, Debug)]
struct Armed {
    interval_ms: u64,
    seq:         u64,
}

/// Repeating tasks ordered by their next due instant.
///
/// Tasks due at the same instant fire in the order they were first armed
/// with [`schedule_repeating`][Self::schedule_repeating].  Re-arming keeps
/// a task's original place among its ties.
#[derive(Default, Debug)]
pub struct Scheduler {
    /// Keyed by `(due, arm sequence)`.
    queue:    BTreeMap<(Millis, u64), TaskId>,
    /// A task id still sitting in `queue` but absent here has been cancelled.
    active:   HashMap<TaskId, Armed>,
    next_id:  u32,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task that fires every `interval_ms`, first at
    /// `now + interval_ms`.
    pub fn schedule_repeating(&mut self, interval_ms: u64, now: Millis) -> ScheduleResult<TaskId> {
        if interval_ms == 0 {
            return Err(ScheduleError::ZeroInterval);
        }
        let task = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.active.insert(task, Armed { interval_ms, seq });
        self.queue.insert((now.offset(interval_ms), seq), task);
        tracing::debug!(%task, interval_ms, %now, "scheduled repeating task");
        Ok(task)
    }

    /// Cancel `task`.  Returns `false` if it was not active.
    ///
    /// The queue entry is dropped lazily by [`pop_due`][Self::pop_due].
    pub fn cancel(&mut self, task: TaskId) -> bool {
        let was_active = self.active.remove(&task).is_some();
        if was_active {
            tracing::debug!(%task, "cancelled task");
        }
        was_active
    }

    /// Remove and return the earliest active task due at or before `now`,
    /// re-arming it one interval later.
    ///
    /// Returns `None` when nothing is due.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, TaskId)> {
        loop {
            let entry = self.queue.first_entry()?;
            let (due, seq) = *entry.key();
            if due > now {
                return None;
            }
            let task = entry.remove();

            // Skip tasks cancelled since they were armed.
            let Some(armed) = self.active.get(&task) else {
                continue;
            };
            self.queue.insert((due.offset(armed.interval_ms), seq), task);
            return Some((due, task));
        }
    }

    /// The earliest instant at which an active task is due.
    pub fn next_due(&self) -> Option<Millis> {
        self.queue
            .iter()
            .find(|(_, task)| self.active.contains_key(task))
            .map(|(&(due, _), _)| due)
    }

    /// `true` if `task` is registered and not cancelled.
    pub fn is_active(&self, task: TaskId) -> bool {
        self.active.contains_key(&task)
    }

    /// Number of active tasks.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Cancel every task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.active.clear();
    }
}
