#![forbid(unsafe_code)]

//! In-memory [`Surface`] for deterministic tests.

use std::collections::{BTreeMap, BTreeSet};

use folio_core::surface::{FieldKind, Node, Surface};

/// Snapshot of the three navigation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSurfaces {
    pub toggle_active: bool,
    pub toggle_expanded: Option<bool>,
    pub menu_active: bool,
    pub body_locked: bool,
}

impl NavSurfaces {
    /// `Some(open)` when every surface says the same thing, else `None`.
    #[must_use]
    pub fn agreed(&self) -> Option<bool> {
        let open = self.toggle_active;
        let consistent = self.toggle_expanded == Some(open)
            && self.menu_active == open
            && self.body_locked == open;
        consistent.then_some(open)
    }
}

/// Records every surface mutation in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    classes: BTreeMap<Node, BTreeSet<String>>,
    attributes: BTreeMap<Node, BTreeMap<String, String>>,
    text: BTreeMap<Node, String>,
    values: BTreeMap<FieldKind, String>,
    styles: BTreeMap<Node, BTreeMap<String, String>>,
    disabled: BTreeSet<Node>,
    focused: Option<Node>,
    heights: BTreeMap<Node, f64>,
    sections: BTreeMap<String, f64>,
    scroll_log: Vec<f64>,
    alerts: Vec<String>,
    mutations: usize,
}

impl MemorySurface {
    /// An empty surface: no text, no geometry, no sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A typical one-page portfolio layout.
    ///
    /// Submit label "Send Message", 80px header, sections `home`, `about`,
    /// `projects`, `contact`.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new()
            .with_text(Node::SubmitButton, "Send Message")
            .with_height(Node::Header, 80.0)
            .with_section("home", 0.0)
            .with_section("about", 720.0)
            .with_section("projects", 1480.0)
            .with_section("contact", 2600.0)
    }

    #[must_use]
    pub fn with_section(mut self, id: &str, offset_top: f64) -> Self {
        self.sections.insert(id.to_string(), offset_top);
        self
    }

    #[must_use]
    pub fn with_height(mut self, node: Node, height: f64) -> Self {
        self.heights.insert(node, height);
        self
    }

    #[must_use]
    pub fn with_text(mut self, node: Node, text: &str) -> Self {
        self.text.insert(node, text.to_string());
        self
    }

    #[must_use]
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.attributes
            .get(&node)
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.styles
            .get(&node)
            .and_then(|styles| styles.get(property))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_disabled(&self, node: Node) -> bool {
        self.disabled.contains(&node)
    }

    #[must_use]
    pub fn focused(&self) -> Option<Node> {
        self.focused
    }

    /// Every `scroll_to` target, oldest first.
    #[must_use]
    pub fn scroll_log(&self) -> &[f64] {
        &self.scroll_log
    }

    /// Every alert shown, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Number of write operations applied so far.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    #[must_use]
    pub fn nav_surfaces(&self) -> NavSurfaces {
        NavSurfaces {
            toggle_active: self.has_class(Node::NavToggle, "active"),
            toggle_expanded: self
                .attribute(Node::NavToggle, "aria-expanded")
                .map(|v| v == "true"),
            menu_active: self.has_class(Node::NavMenu, "active"),
            body_locked: self.style(Node::Body, "overflow") == Some("hidden"),
        }
    }
}

impl Surface for MemorySurface {
    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        self.mutations += 1;
        let set = self.classes.entry(node).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.classes
            .get(&node)
            .is_some_and(|set| set.contains(class))
    }

    fn set_attribute(&mut self, node: Node, name: &str, value: &str) {
        self.mutations += 1;
        self.attributes
            .entry(node)
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, node: Node, name: &str) {
        self.mutations += 1;
        if let Some(attrs) = self.attributes.get_mut(&node) {
            attrs.remove(name);
        }
    }

    fn text(&self, node: Node) -> String {
        self.text.get(&node).cloned().unwrap_or_default()
    }

    fn set_text(&mut self, node: Node, text: &str) {
        self.mutations += 1;
        self.text.insert(node, text.to_string());
    }

    fn value(&self, field: FieldKind) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: FieldKind, value: &str) {
        self.mutations += 1;
        self.values.insert(field, value.to_string());
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        self.mutations += 1;
        let styles = self.styles.entry(node).or_default();
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_disabled(&mut self, node: Node, disabled: bool) {
        self.mutations += 1;
        if disabled {
            self.disabled.insert(node);
        } else {
            self.disabled.remove(&node);
        }
    }

    fn focus(&mut self, node: Node) {
        self.mutations += 1;
        self.focused = Some(node);
    }

    fn height(&self, node: Node) -> f64 {
        self.heights.get(&node).copied().unwrap_or(0.0)
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        self.sections.get(id).copied()
    }

    fn scroll_to(&mut self, y: f64) {
        self.mutations += 1;
        self.scroll_log.push(y);
    }

    fn alert(&mut self, message: &str) {
        self.mutations += 1;
        self.alerts.push(message.to_string());
    }
}
