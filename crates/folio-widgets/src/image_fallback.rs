#![forbid(unsafe_code)]

//! Decorative fallback for images that fail to load.

use folio_core::surface::{Node, Surface};
use tracing::debug;

/// Background painted on the frame of a broken image.
pub const FALLBACK_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

/// Hide the broken image at `index` and paint its frame.
pub fn apply_image_fallback<S: Surface + ?Sized>(index: usize, surface: &mut S) {
    surface.set_style(Node::Image(index), "display", "none");
    surface.set_style(Node::ImageFrame(index), "background", FALLBACK_BACKGROUND);
    debug!(index, "image.fallback");
}
