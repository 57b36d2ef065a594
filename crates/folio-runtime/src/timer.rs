#![forbid(unsafe_code)]

//! Timer queue with cancel handles.
//!
//! # Invariants
//!
//! 1. Each scheduled entry gets a fresh [`TimerId`]; ids are never reused.
//! 2. Due entries are released in deadline order; equal deadlines release in
//!    scheduling order.
//! 3. A cancelled entry is never released.
//! 4. An entry is released at most once.

use tracing::trace;
use web_time::Instant;

/// Cancel handle for a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id (for logging).
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Instant,
    task: T,
}

/// Pending deferred tasks keyed by deadline.
///
/// The queue is expected to hold a handful of entries, so it is a plain
/// vector scanned linearly.
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `task` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, deadline, task });
        trace!(timer_id = id.0, pending = self.entries.len(), "timer.schedule");
        id
    }

    /// Cancel a scheduled entry, returning its task if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        trace!(timer_id = id.0, "timer.cancel");
        Some(self.entries.remove(idx).task)
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return the earliest entry due at `now`, if any.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, T)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(idx, _)| idx)?;
        let entry = self.entries.remove(idx);
        trace!(timer_id = entry.id.0, "timer.fire");
        Some((entry.id, entry.task))
    }

    /// Remove every entry due at `now`, in release order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(TimerId, T)> {
        let mut due = Vec::new();
        while let Some(item) = self.pop_due(now) {
            due.push(item);
        }
        due
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
