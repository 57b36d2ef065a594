#![forbid(unsafe_code)]

//! Bound-element surface.
//!
//! Every DOM element the controllers touch is resolved once, at page
//! initialization, and addressed afterwards through a [`Node`] id. The
//! [`Surface`] trait is the whole read/write contract the controllers depend
//! on: class, attribute, text, value and inline-style mutation, focus, a
//! little geometry, scrolling, and the modal alert.
//!
//! Implementations: the browser adapter in `folio-web` (behind
//! `target_arch = "wasm32"`) and the in-memory `MemorySurface` in
//! `folio-harness`.
//!
//! # Invariants
//!
//! 1. Mutations are applied synchronously; a read issued right after a write
//!    observes the write.
//! 2. Operations on an unbound node are silent no-ops (reads return empty
//!    text, zero geometry).

/// One of the three validated contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    /// All fields, in form order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// The field's form name (also its element id).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Parse a form field name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// Position in [`FieldKind::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Handle for a bound element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// `document.body`; carries the scroll lock.
    Body,
    /// The fixed page header.
    Header,
    /// The hamburger control.
    NavToggle,
    /// The collapsible navigation panel.
    NavMenu,
    /// A contact-form input.
    Field(FieldKind),
    /// The dedicated error slot under a field.
    ErrorSlot(FieldKind),
    /// The contact form's submit control.
    SubmitButton,
    /// The `n`th image in document order.
    Image(usize),
    /// The container wrapping the `n`th image.
    ImageFrame(usize),
}

/// The read/write contract between the controllers and the document.
pub trait Surface {
    /// Add (`enabled == true`) or remove a class.
    fn set_class(&mut self, node: Node, class: &str, enabled: bool);

    /// Whether `node` currently carries `class`.
    fn has_class(&self, node: Node, class: &str) -> bool;

    fn set_attribute(&mut self, node: Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Node, name: &str);

    /// Text content of `node` (empty when unbound).
    fn text(&self, node: Node) -> String;

    fn set_text(&mut self, node: Node, text: &str);

    /// Current value of a form field.
    fn value(&self, field: FieldKind) -> String;

    fn set_value(&mut self, field: FieldKind, value: &str);

    /// Set an inline style property (CSS name). An empty value removes it.
    fn set_style(&mut self, node: Node, property: &str, value: &str);

    fn set_disabled(&mut self, node: Node, disabled: bool);

    /// Move keyboard focus to `node`.
    fn focus(&mut self, node: Node);

    /// Rendered height of `node` in CSS pixels.
    fn height(&self, node: Node) -> f64;

    /// Document offset of the element with id `id`, or `None` if no such
    /// element exists.
    fn section_offset_top(&self, id: &str) -> Option<f64>;

    /// Smooth-scroll the window to vertical offset `y`.
    fn scroll_to(&mut self, y: f64);

    /// Show a blocking modal message.
    fn alert(&mut self, message: &str);
}
