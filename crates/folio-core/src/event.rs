#![forbid(unsafe_code)]

//! Canonical page input events.
//!
//! The host (browser glue or a test harness) translates raw DOM events into
//! these values before handing them to the page controller. Click targets are
//! classified by the host against the bound elements, so the controller never
//! walks the document itself.

use crate::surface::FieldKind;

/// A discrete input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A click anywhere on the page.
    Click(ClickTarget),
    /// A contact-form field lost focus.
    Blur(FieldKind),
    /// The user typed into a contact-form field.
    Input(FieldKind),
    /// The contact form was submitted.
    Submit,
    /// A key was pressed while the page had focus.
    Key(KeyCode),
    /// The window scrolled to vertical offset `y` (CSS pixels).
    Scroll { y: f64 },
    /// The image at `index` (document order) failed to load.
    ImageError { index: usize },
}

/// Where a click landed, relative to the bound navigation elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Target is the menu toggle or one of its descendants.
    pub in_toggle: bool,
    /// Target is inside the navigation menu panel.
    pub in_menu: bool,
    /// Target is (inside) a navigation link.
    pub nav_link: bool,
    /// `href` of the closest in-page anchor (`#...`), if any.
    pub anchor: Option<String>,
}

impl ClickTarget {
    /// A click that touched none of the navigation elements.
    #[must_use]
    pub fn outside() -> Self {
        Self::default()
    }

    /// A click on the menu toggle.
    #[must_use]
    pub fn toggle() -> Self {
        Self {
            in_toggle: true,
            ..Self::default()
        }
    }

    /// A click on a navigation link inside the menu.
    #[must_use]
    pub fn nav_link(href: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            in_menu: true,
            nav_link: true,
            anchor: href.starts_with('#').then_some(href),
            ..Self::default()
        }
    }

    /// A click on an in-page anchor outside the navigation menu.
    #[must_use]
    pub fn anchor(href: impl Into<String>) -> Self {
        Self {
            anchor: Some(href.into()),
            ..Self::default()
        }
    }

    /// A click inside the menu panel that is not on a link.
    #[must_use]
    pub fn inside_menu() -> Self {
        Self {
            in_menu: true,
            ..Self::default()
        }
    }

    /// Whether the click landed outside both the menu panel and the toggle.
    #[inline]
    #[must_use]
    pub fn is_outside_nav(&self) -> bool {
        !self.in_toggle && !self.in_menu
    }
}

/// Keys the controller distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Char(char),
    /// Any other DOM `KeyboardEvent.key` value.
    Other(String),
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` string.
    ///
    /// Legacy `"Esc"` (old Edge/IE) maps to [`KeyCode::Escape`].
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other(key.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys_map_to_codes() {
        assert_eq!(KeyCode::from_dom_key("Escape"), KeyCode::Escape);
        assert_eq!(KeyCode::from_dom_key("Esc"), KeyCode::Escape);
        assert_eq!(KeyCode::from_dom_key("Enter"), KeyCode::Enter);
        assert_eq!(KeyCode::from_dom_key("a"), KeyCode::Char('a'));
        assert_eq!(
            KeyCode::from_dom_key("ArrowDown"),
            KeyCode::Other("ArrowDown".into())
        );
    }

    #[test]
    fn nav_link_with_fragment_carries_anchor() {
        let target = ClickTarget::nav_link("#about");
        assert!(target.nav_link);
        assert!(target.in_menu);
        assert_eq!(target.anchor.as_deref(), Some("#about"));
        assert!(!target.is_outside_nav());
    }

    #[test]
    fn nav_link_to_other_page_has_no_anchor() {
        let target = ClickTarget::nav_link("/blog");
        assert_eq!(target.anchor, None);
    }

    #[test]
    fn outside_and_toggle_classification() {
        assert!(ClickTarget::outside().is_outside_nav());
        assert!(ClickTarget::anchor("#contact").is_outside_nav());
        assert!(!ClickTarget::toggle().is_outside_nav());
        assert!(!ClickTarget::inside_menu().is_outside_nav());
    }
}
