#![forbid(unsafe_code)]

//! Browser binding: a `web-sys` [`Surface`] and the `wasm-bindgen` export.
//!
//! Elements are looked up once, in [`DomSurface::bind`], from the configured
//! selectors. The toggle, the menu panel and `<body>` are required; every
//! other element is optional and operations on a missing one are no-ops.
//!
//! The JS host owns event listeners and timers:
//!
//! ```text
//! const page = new FolioPage(JSON.stringify(config));
//! document.addEventListener("click", e => { if (page.click(e.target)) e.preventDefault(); });
//! form.addEventListener("submit", e => { if (page.submit()) e.preventDefault(); });
//! window.addEventListener("scroll", () => page.scroll(window.scrollY));
//! // after each call: schedule page.tick() at page.nextDeadlineMs()
//! ```

use folio_core::event::{ClickTarget, Event, KeyCode};
use folio_core::surface::{FieldKind, Node, Surface};
use folio_core::{FolioError, Result};
use js_sys::{Object, Reflect};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollToOptions, Window,
};
use web_time::Instant;

use crate::config::{PageConfig, Selectors};
use crate::page_core::PageCore;

fn js_err(err: FolioError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[derive(Debug, Clone)]
enum FieldElement {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldElement {
    fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea),
        }
    }

    fn as_html(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }
}

/// Bound DOM elements.
#[derive(Debug, Clone)]
pub struct DomSurface {
    window: Window,
    document: Document,
    body: HtmlElement,
    header: Option<HtmlElement>,
    toggle: HtmlElement,
    menu: HtmlElement,
    fields: [Option<FieldElement>; 3],
    error_slots: [Option<HtmlElement>; 3],
    submit: Option<HtmlElement>,
    images: Vec<HtmlElement>,
    nav_link_selector: String,
    anchor_selector: String,
}

impl DomSurface {
    /// Resolve every bound element from `selectors`.
    pub fn bind(selectors: &Selectors) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::unbound("window"))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::unbound("document"))?;
        let body = document.body().ok_or_else(|| FolioError::unbound("body"))?;

        let html = |selector: &str| -> Option<HtmlElement> {
            document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };
        let required = |selector: &str| html(selector).ok_or_else(|| FolioError::unbound(selector));

        let toggle = required(&selectors.nav_toggle)?;
        let menu = required(&selectors.nav_menu)?;
        let header = html(&selectors.header);
        let submit = html(&selectors.submit_button);

        let fields = FieldKind::ALL.map(|field| {
            document
                .get_element_by_id(field.as_str())
                .and_then(FieldElement::from_element)
        });
        let error_slots = FieldKind::ALL.map(|field| {
            document
                .get_element_by_id(&format!("{}{}", field.as_str(), selectors.error_slot_suffix))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        });

        let mut images = Vec::new();
        if let Ok(list) = document.query_selector_all(&selectors.image) {
            for i in 0..list.length() {
                if let Some(img) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    images.push(img);
                }
            }
        }

        debug!(
            header = header.is_some(),
            submit = submit.is_some(),
            images = images.len(),
            "dom.bind"
        );
        Ok(Self {
            window,
            document,
            body,
            header,
            toggle,
            menu,
            fields,
            error_slots,
            submit,
            images,
            nav_link_selector: selectors.nav_link.clone(),
            anchor_selector: selectors.anchor.clone(),
        })
    }

    fn element(&self, node: Node) -> Option<HtmlElement> {
        match node {
            Node::Body => Some(self.body.clone()),
            Node::Header => self.header.clone(),
            Node::NavToggle => Some(self.toggle.clone()),
            Node::NavMenu => Some(self.menu.clone()),
            Node::Field(field) => self.fields[field.index()]
                .as_ref()
                .map(|f| f.as_html().clone()),
            Node::ErrorSlot(field) => self.error_slots[field.index()].clone(),
            Node::SubmitButton => self.submit.clone(),
            Node::Image(i) => self.images.get(i).cloned(),
            Node::ImageFrame(i) => self
                .images
                .get(i)
                .and_then(|img| img.parent_element())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        }
    }

    /// Classify a click target against the bound navigation elements.
    #[must_use]
    pub fn classify_click(&self, target: &Element) -> ClickTarget {
        let node: &web_sys::Node = target.as_ref();
        let closest = |selector: &str| target.closest(selector).ok().flatten();
        ClickTarget {
            in_toggle: self.toggle.contains(Some(node)),
            in_menu: self.menu.contains(Some(node)),
            nav_link: closest(&self.nav_link_selector).is_some(),
            anchor: closest(&self.anchor_selector)
                .and_then(|a| a.get_attribute("href"))
                .filter(|href| href.starts_with('#')),
        }
    }

    /// Index of `target` among the bound images.
    #[must_use]
    pub fn image_index(&self, target: &Element) -> Option<usize> {
        let node: &web_sys::Node = target.as_ref();
        self.images
            .iter()
            .position(|img| img.is_same_node(Some(node)))
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        if let Some(el) = self.element(node) {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_attribute(&mut self, node: Node, name: &str, value: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn remove_attribute(&mut self, node: Node, name: &str) {
        if let Some(el) = self.element(node) {
            let _ = el.remove_attribute(name);
        }
    }

    fn text(&self, node: Node) -> String {
        self.element(node)
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(el) = self.element(node) {
            el.set_text_content(Some(text));
        }
    }

    fn value(&self, field: FieldKind) -> String {
        self.fields[field.index()]
            .as_ref()
            .map(FieldElement::value)
            .unwrap_or_default()
    }

    fn set_value(&mut self, field: FieldKind, value: &str) {
        if let Some(el) = &self.fields[field.index()] {
            el.set_value(value);
        }
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        if let Some(el) = self.element(node) {
            let style = el.style();
            if value.is_empty() {
                let _ = style.remove_property(property);
            } else {
                let _ = style.set_property(property, value);
            }
        }
    }

    fn set_disabled(&mut self, node: Node, disabled: bool) {
        if let Some(el) = self.element(node) {
            let _ = el.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn focus(&mut self, node: Node) {
        if let Some(el) = self.element(node) {
            let _ = el.focus();
        }
    }

    fn height(&self, node: Node) -> f64 {
        self.element(node)
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or(0.0)
    }

    fn section_offset_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()))
    }

    fn scroll_to(&mut self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// JS-facing page controller.
#[wasm_bindgen]
pub struct FolioPage {
    core: PageCore<DomSurface>,
}

#[wasm_bindgen]
impl FolioPage {
    /// Bind the page. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> std::result::Result<FolioPage, JsValue> {
        let config = PageConfig::from_json(config_json).map_err(js_err)?;
        let surface = DomSurface::bind(&config.selectors).map_err(js_err)?;
        let core = PageCore::new(surface, config).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Returns whether the host must call `preventDefault()`.
    pub fn click(&mut self, target: &Element) -> bool {
        let target = self.core.surface().classify_click(target);
        self.core
            .dispatch(Event::Click(target), Instant::now())
            .prevent_default
    }

    /// Returns `false` for an unknown field name.
    pub fn blur(&mut self, field: &str) -> bool {
        self.field_event(field, Event::Blur)
    }

    /// Returns `false` for an unknown field name.
    pub fn input(&mut self, field: &str) -> bool {
        self.field_event(field, Event::Input)
    }

    fn field_event(&mut self, field: &str, make: fn(FieldKind) -> Event) -> bool {
        match FieldKind::from_name(field) {
            Some(field) => self.core.dispatch(make(field), Instant::now()).handled,
            None => false,
        }
    }

    /// Returns whether the host must call `preventDefault()` (always true).
    pub fn submit(&mut self) -> bool {
        self.core
            .dispatch(Event::Submit, Instant::now())
            .prevent_default
    }

    /// Forward `KeyboardEvent.key`. Returns whether it changed state.
    pub fn key(&mut self, key: &str) -> bool {
        self.core
            .dispatch(Event::Key(KeyCode::from_dom_key(key)), Instant::now())
            .handled
    }

    pub fn scroll(&mut self, y: f64) {
        self.core.dispatch(Event::Scroll { y }, Instant::now());
    }

    /// Forward an image `error` event. Returns `false` for unbound images.
    #[wasm_bindgen(js_name = imageError)]
    pub fn image_error(&mut self, target: &Element) -> bool {
        match self.core.surface().image_index(target) {
            Some(index) => {
                self.core
                    .dispatch(Event::ImageError { index }, Instant::now());
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = pushEncodedInput)]
    pub fn push_encoded_input(&mut self, json: &str) -> bool {
        self.core.push_encoded_input(json, Instant::now())
    }

    /// Run due timers. Returns how many fired.
    pub fn tick(&mut self) -> u32 {
        self.core.advance(Instant::now()) as u32
    }

    /// Milliseconds until `tick()` has work, or `undefined` if idle.
    #[wasm_bindgen(js_name = nextDeadlineMs)]
    pub fn next_deadline_ms(&self) -> Option<f64> {
        let now = Instant::now();
        self.core
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now).as_secs_f64() * 1000.0)
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.core.nav().is_open()
    }

    #[wasm_bindgen(js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.core.form().is_pending()
    }

    /// Plain object with the controller state, for debugging overlays.
    pub fn snapshot(&self) -> JsValue {
        let obj = Object::new();
        let set = |key: &str, value: JsValue| {
            let _ = Reflect::set(&obj, &JsValue::from_str(key), &value);
        };
        set("menuOpen", JsValue::from_bool(self.core.nav().is_open()));
        set("submitting", JsValue::from_bool(self.core.form().is_pending()));
        set(
            "eventsProcessed",
            JsValue::from_f64(self.core.events_processed() as f64),
        );
        set(
            "nextDeadlineMs",
            self.next_deadline_ms()
                .map_or(JsValue::UNDEFINED, JsValue::from_f64),
        );
        obj.into()
    }
}
