#![forbid(unsafe_code)]

//! Host-driven page controller for the Folio site.
//!
//! [`PageCore`] is the whole interaction layer, generic over the bound
//! element [`Surface`](folio_core::Surface), and runs natively under tests.
//! On `wasm32` the [`FolioPage`] export wraps `PageCore<DomSurface>` for the
//! browser: the JS host forwards DOM events and calls `tick()` at
//! `nextDeadlineMs()`.

pub mod config;
pub mod encoded_input;
pub mod page_core;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use config::{PageConfig, Selectors};
pub use encoded_input::decode_event;
pub use page_core::{Dispatch, PageCore};

#[cfg(target_arch = "wasm32")]
pub use wasm::{DomSurface, FolioPage};
