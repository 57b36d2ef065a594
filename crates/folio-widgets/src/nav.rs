#![forbid(unsafe_code)]
//! Mobile navigation state machine.
//!
//! Tracks whether the collapsible navigation menu is open and mirrors that
//! state into the page.
//!
//! # State transitions
//!
//! ```text
//!             Toggle
//!  ┌────────┐ ─────────────────────────▶ ┌──────┐
//!  │ Closed │                            │ Open │
//!  └────────┘ ◀───────────────────────── └──────┘
//!      ▲       Toggle | LinkClicked |
//!      │       OutsideClick | EscapeKey
//!      │
//!      └── LinkClicked, OutsideClick, EscapeKey: no-op while Closed
//! ```
//!
//! # Invariants
//!
//! 1. After every transition, and after [`NavMenu::sync`], the three
//!    observable surfaces agree with the phase:
//!    - toggle: `active` class and `aria-expanded`,
//!    - menu panel: `active` class,
//!    - body: `overflow: hidden` while open, cleared while closed.
//! 2. Surfaces are written before the transition method returns.
//! 3. An Escape-driven close moves focus back to the toggle.
//! 4. Ignored triggers write nothing.

use folio_core::event::{ClickTarget, KeyCode};
use folio_core::surface::{Node, Surface};
use tracing::debug;

use crate::ACTIVE_CLASS;

/// Menu phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPhase {
    #[default]
    Closed,
    Open,
}

impl NavPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

/// What asked the menu to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    /// Hamburger activated.
    Toggle,
    /// A navigation link was selected.
    LinkClicked,
    /// A click landed outside the menu panel and the toggle.
    OutsideClick,
    /// Escape pressed.
    EscapeKey,
}

impl NavTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::LinkClicked => "link_clicked",
            Self::OutsideClick => "outside_click",
            Self::EscapeKey => "escape_key",
        }
    }
}

/// A transition that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTransition {
    pub from: NavPhase,
    pub to: NavPhase,
    pub trigger: NavTrigger,
}

/// Navigation menu controller.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    phase: NavPhase,
}

impl NavMenu {
    /// A closed menu. Call [`NavMenu::sync`] once the surface is bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: NavPhase::Closed,
        }
    }

    #[must_use]
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == NavPhase::Open
    }

    /// Write the current phase to all three surfaces.
    pub fn sync<S: Surface + ?Sized>(&self, surface: &mut S) {
        let open = self.is_open();
        surface.set_class(Node::NavToggle, ACTIVE_CLASS, open);
        surface.set_attribute(
            Node::NavToggle,
            "aria-expanded",
            if open { "true" } else { "false" },
        );
        surface.set_class(Node::NavMenu, ACTIVE_CLASS, open);
        surface.set_style(Node::Body, "overflow", if open { "hidden" } else { "" });
    }

    /// Apply `trigger`. Returns the transition, or `None` if the trigger is
    /// ignored in the current phase.
    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        trigger: NavTrigger,
        surface: &mut S,
    ) -> Option<NavTransition> {
        let from = self.phase;
        let to = match (from, trigger) {
            (NavPhase::Closed, NavTrigger::Toggle) => NavPhase::Open,
            (NavPhase::Open, _) => NavPhase::Closed,
            (NavPhase::Closed, _) => return None,
        };
        self.phase = to;
        self.sync(surface);
        if trigger == NavTrigger::EscapeKey {
            surface.focus(Node::NavToggle);
        }
        debug!(
            from = from.as_str(),
            to = to.as_str(),
            trigger = trigger.as_str(),
            "nav.transition"
        );
        Some(NavTransition { from, to, trigger })
    }

    pub fn toggle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<NavTransition> {
        self.handle(NavTrigger::Toggle, surface)
    }

    pub fn close_for_link<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Option<NavTransition> {
        self.handle(NavTrigger::LinkClicked, surface)
    }

    pub fn escape<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<NavTransition> {
        self.handle(NavTrigger::EscapeKey, surface)
    }

    /// Route a classified click.
    ///
    /// Toggle clicks toggle; link clicks close; anything outside both the
    /// toggle and the panel closes. Clicks inside the panel that are not on
    /// a link are ignored.
    pub fn handle_click<S: Surface + ?Sized>(
        &mut self,
        target: &ClickTarget,
        surface: &mut S,
    ) -> Option<NavTransition> {
        if target.in_toggle {
            self.handle(NavTrigger::Toggle, surface)
        } else if target.nav_link {
            self.handle(NavTrigger::LinkClicked, surface)
        } else if target.is_outside_nav() {
            self.handle(NavTrigger::OutsideClick, surface)
        } else {
            None
        }
    }

    /// Route a key press; only Escape matters.
    pub fn handle_key<S: Surface + ?Sized>(
        &mut self,
        key: &KeyCode,
        surface: &mut S,
    ) -> Option<NavTransition> {
        match key {
            KeyCode::Escape => self.handle(NavTrigger::EscapeKey, surface),
            _ => None,
        }
    }
}
