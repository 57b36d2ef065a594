#![forbid(unsafe_code)]

//! In-page anchor scrolling.
//!
//! The fixed header covers the top of the viewport, so the scroll target is
//! the section's offset minus the header height. Anchors that name no
//! element are ignored.

use folio_core::surface::{Node, Surface};
use tracing::debug;

/// Element id named by an in-page `href` (`"#about"` → `"about"`).
///
/// Returns `None` for non-fragment hrefs and for a bare `"#"`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section just below the header.
#[must_use]
pub fn scroll_offset(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Smooth-scroll to the section named by `href`.
///
/// Returns the offset scrolled to, or `None` if nothing was scrolled.
pub fn scroll_to_anchor<S: Surface + ?Sized>(href: &str, surface: &mut S) -> Option<f64> {
    let id = fragment_id(href)?;
    let Some(top) = surface.section_offset_top(id) else {
        debug!(href, "anchor.missing_target");
        return None;
    };
    let y = scroll_offset(top, surface.height(Node::Header));
    surface.scroll_to(y);
    debug!(href, y, "anchor.scroll");
    Some(y)
}
