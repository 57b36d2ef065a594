#![forbid(unsafe_code)]

//! Core: page events, the bound-element surface, lab clocks, and errors.

pub mod clock;
pub mod error;
pub mod event;
pub mod surface;

pub use error::{FolioError, Result};
pub use event::{ClickTarget, Event, KeyCode};
pub use surface::{FieldKind, Node, Surface};
