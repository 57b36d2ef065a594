#![forbid(unsafe_code)]

//! Page controllers built on the bound-element [`Surface`](folio_core::Surface).
//!
//! - [`nav`]: mobile navigation open/closed state machine.
//! - [`validation`]: pure contact-field validators.
//! - [`contact_form`]: field error display and the submission protocol.
//! - [`scroll_style`]: header style tier derived from scroll offset.
//! - [`anchor`]: in-page anchor smooth scrolling.
//! - [`image_fallback`]: decorative fallback for images that fail to load.

pub mod anchor;
pub mod contact_form;
pub mod image_fallback;
pub mod nav;
pub mod scroll_style;
pub mod validation;

pub use contact_form::{ContactForm, FieldState, Settlement, SubmitOutcome};
pub use nav::{NavMenu, NavPhase, NavTransition, NavTrigger};
pub use scroll_style::{ScrollStyle, ScrollTier};
pub use validation::ValidationResult;

/// Class toggled on the nav toggle and menu panel while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// Class marking an invalid form field.
pub const ERROR_CLASS: &str = "error";
