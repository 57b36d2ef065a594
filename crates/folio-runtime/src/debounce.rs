#![forbid(unsafe_code)]

//! Debouncing: coalesce a burst of calls into one deferred execution.
//!
//! [`Debouncer`] is the scheduling state alone: it remembers the latest
//! arguments and when they become due, and hands them back from
//! [`Debouncer::poll`]. Use it directly when the action needs borrowed
//! context at execution time (the page controller passes its surface).
//! [`Debounced`] pairs a debouncer with an owned action closure; build one
//! with [`debounce`].
//!
//! # Invariants
//!
//! 1. At most one execution per quiescent period of length `delay`.
//! 2. The executed arguments are those of the most recent call.
//! 3. Every call before the deadline cancels the pending entry and
//!    reschedules at `call_time + delay`, so a call stream with gaps shorter
//!    than `delay` never executes.

use tracing::trace;
use web_time::{Duration, Instant};

use crate::timer::{TimerId, TimerQueue};

/// Pending-call state for a debounced action.
#[derive(Debug)]
pub struct Debouncer<A> {
    delay: Duration,
    timers: TimerQueue<A>,
    pending: Option<TimerId>,
    calls: u64,
    runs: u64,
}

impl<A> Debouncer<A> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timers: TimerQueue::new(),
            pending: None,
            calls: 0,
            runs: 0,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a call made at `now`, replacing any pending arguments.
    pub fn call(&mut self, args: A, now: Instant) {
        let rescheduled = match self.pending.take() {
            Some(id) => self.timers.cancel(id).is_some(),
            None => false,
        };
        self.pending = Some(self.timers.schedule(now + self.delay, args));
        self.calls += 1;
        trace!(
            rescheduled,
            delay_ms = self.delay.as_millis() as u64,
            "debounce.call"
        );
    }

    /// Take the pending arguments if their quiescent period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let (id, args) = self.timers.pop_due(now)?;
        if self.pending == Some(id) {
            self.pending = None;
        }
        self.runs += 1;
        Some(args)
    }

    /// Drop the pending call, returning its arguments.
    pub fn cancel(&mut self) -> Option<A> {
        let id = self.pending.take()?;
        self.timers.cancel(id)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending call becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Total calls recorded.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Total executions released by [`Debouncer::poll`].
    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

/// A debounced action: `action` runs with the latest arguments once calls
/// have been quiet for `delay`.
pub struct Debounced<A, F> {
    action: F,
    state: Debouncer<A>,
}

/// Wrap `action` so bursts of calls collapse into one execution after
/// `delay` of quiescence.
///
/// ```
/// use folio_runtime::{LabClock, debounce};
/// use web_time::Duration;
///
/// let clock = LabClock::new();
/// let mut seen = Vec::new();
/// let mut on_scroll = debounce(|y: f64| seen.push(y), Duration::from_millis(10));
/// for y in [10.0, 20.0, 30.0] {
///     on_scroll.call(y, clock.now());
///     clock.advance_ms(3);
/// }
/// clock.advance_ms(10);
/// assert!(on_scroll.poll(clock.now()));
/// drop(on_scroll);
/// assert_eq!(seen, vec![30.0]);
/// ```
pub fn debounce<A, F>(action: F, delay: Duration) -> Debounced<A, F>
where
    F: FnMut(A),
{
    Debounced {
        action,
        state: Debouncer::new(delay),
    }
}

impl<A, F> Debounced<A, F>
where
    F: FnMut(A),
{
    /// Schedule the action with `args`, cancelling any pending execution.
    pub fn call(&mut self, args: A, now: Instant) {
        self.state.call(args, now);
    }

    /// Run the action if due. Returns whether it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state.poll(now) {
            Some(args) => {
                (self.action)(args);
                true
            }
            None => false,
        }
    }

    /// Cancel the pending execution. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.state.cancel().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.next_deadline()
    }

    /// Scheduling state (counters, delay).
    #[must_use]
    pub fn state(&self) -> &Debouncer<A> {
        &self.state
    }
}

impl<A, F> std::fmt::Debug for Debounced<A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.state.delay)
            .field("pending", &self.state.pending)
            .field("calls", &self.state.calls)
            .field("runs", &self.state.runs)
            .finish()
    }
}
