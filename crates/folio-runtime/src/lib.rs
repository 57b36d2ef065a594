#![forbid(unsafe_code)]

//! Host-driven deferred execution.
//!
//! Nothing here owns a thread or a real timer. Deferred work is stored as an
//! explicit entry in a [`TimerQueue`] with a cancel handle, and the host
//! advances time by calling `poll`/`pop_due` with the current instant. The
//! [`Debouncer`] is built on the same queue.

pub mod debounce;
pub mod timer;

pub use debounce::{Debounced, Debouncer, debounce};
pub use folio_core::clock::{Clock, LabClock};
pub use timer::{TimerId, TimerQueue};
