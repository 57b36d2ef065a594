#![forbid(unsafe_code)]

//! Test harness for the Folio page controller.
//!
//! [`MemorySurface`] implements [`Surface`](folio_core::Surface) without a
//! document: every mutation lands in plain maps that tests read back, and
//! geometry (section offsets, header height) is configured up front.

pub mod memory_surface;

pub use memory_surface::{MemorySurface, NavSurfaces};
