#![forbid(unsafe_code)]

//! Header style derived from the scroll offset.
//!
//! Stateless: the tier is a pure function of the offset, so applying it any
//! number of times for the same offset writes the same styles.

use folio_core::surface::{Node, Surface};
use tracing::trace;

/// Offsets strictly above this select [`ScrollTier::Scrolled`].
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

/// Header visual tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTier {
    /// At (or near) the top of the page.
    Top,
    /// Scrolled past the threshold.
    Scrolled,
}

impl ScrollTier {
    /// Tier for `offset`. NaN counts as the top of the page.
    #[must_use]
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    /// Header background colour.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Top => "rgba(255, 255, 255, 0.95)",
            Self::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    /// Header bottom border colour.
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Top => "rgba(0, 0, 0, 0.05)",
            Self::Scrolled => "rgba(0, 0, 0, 0.1)",
        }
    }
}

/// Writes the header tier for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    threshold: f64,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollStyle {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn tier(&self, offset: f64) -> ScrollTier {
        ScrollTier::from_offset(offset, self.threshold)
    }

    /// Style the header for `offset` and return the tier applied.
    pub fn apply<S: Surface + ?Sized>(&self, offset: f64, surface: &mut S) -> ScrollTier {
        let tier = self.tier(offset);
        surface.set_style(Node::Header, "background", tier.background());
        surface.set_style(Node::Header, "border-bottom-color", tier.border_color());
        trace!(offset, ?tier, "scroll_style.apply");
        tier
    }
}
