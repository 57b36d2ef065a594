#![forbid(unsafe_code)]

//! End-to-end navigation flows through `PageCore` on a `MemorySurface`.

use folio_core::clock::LabClock;
use folio_core::event::{ClickTarget, Event, KeyCode};
use folio_core::surface::Node;
use folio_harness::MemorySurface;
use folio_web::{PageConfig, PageCore};
use folio_widgets::NavPhase;
use pretty_assertions::assert_eq;

fn page() -> PageCore<MemorySurface> {
    PageCore::new(MemorySurface::portfolio(), PageConfig::default()).expect("default config")
}

fn click(core: &mut PageCore<MemorySurface>, clock: &LabClock, target: ClickTarget) {
    core.dispatch(Event::Click(target), clock.now());
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Toggle
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn toggle_opens_and_closes() {
    let clock = LabClock::new();
    let mut core = page();

    click(&mut core, &clock, ClickTarget::toggle());
    assert_eq!(core.nav().phase(), NavPhase::Open);
    let surfaces = core.surface().nav_surfaces();
    assert!(surfaces.toggle_active);
    assert_eq!(surfaces.toggle_expanded, Some(true));
    assert!(surfaces.menu_active);
    assert!(surfaces.body_locked);
    assert_eq!(core.surface().style(Node::Body, "overflow"), Some("hidden"));

    click(&mut core, &clock, ClickTarget::toggle());
    assert_eq!(core.nav().phase(), NavPhase::Closed);
    assert_eq!(core.surface().nav_surfaces().agreed(), Some(false));
    assert_eq!(core.surface().style(Node::Body, "overflow"), None);
}

#[test]
fn aria_expanded_is_written_as_string() {
    let clock = LabClock::new();
    let mut core = page();
    assert_eq!(
        core.surface().attribute(Node::NavToggle, "aria-expanded"),
        Some("false")
    );
    click(&mut core, &clock, ClickTarget::toggle());
    assert_eq!(
        core.surface().attribute(Node::NavToggle, "aria-expanded"),
        Some("true")
    );
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Dismissal
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn outside_click_closes_open_menu() {
    let clock = LabClock::new();
    let mut core = page();
    click(&mut core, &clock, ClickTarget::toggle());
    click(&mut core, &clock, ClickTarget::outside());
    assert!(!core.nav().is_open());
    assert_eq!(core.surface().nav_surfaces().agreed(), Some(false));
}

#[test]
fn click_inside_menu_panel_keeps_it_open() {
    let clock = LabClock::new();
    let mut core = page();
    click(&mut core, &clock, ClickTarget::toggle());
    let d = core.dispatch(Event::Click(ClickTarget::inside_menu()), clock.now());
    assert!(!d.handled);
    assert!(core.nav().is_open());
}

#[test]
fn nav_link_closes_menu() {
    let clock = LabClock::new();
    let mut core = page();
    click(&mut core, &clock, ClickTarget::toggle());
    click(&mut core, &clock, ClickTarget::nav_link("#projects"));
    assert!(!core.nav().is_open());
    assert_eq!(core.surface().scroll_log(), &[1400.0]);
}

#[test]
fn escape_closes_and_returns_focus() {
    let clock = LabClock::new();
    let mut core = page();
    click(&mut core, &clock, ClickTarget::toggle());
    let d = core.dispatch(Event::Key(KeyCode::from_dom_key("Escape")), clock.now());
    assert!(d.handled);
    assert!(!core.nav().is_open());
    assert_eq!(core.surface().focused(), Some(Node::NavToggle));
}

// ═════════════════════════════════════════════════════════════════════════
// 3. No-ops while closed
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn closed_menu_ignores_escape_and_outside_clicks() {
    let clock = LabClock::new();
    let mut core = page();
    let before = core.surface().mutation_count();

    let d = core.dispatch(Event::Key(KeyCode::Escape), clock.now());
    assert!(!d.handled);
    let d = core.dispatch(Event::Click(ClickTarget::outside()), clock.now());
    assert!(!d.handled);

    assert_eq!(core.surface().mutation_count(), before);
    assert_eq!(core.surface().focused(), None);
}

#[test]
fn other_keys_are_ignored() {
    let clock = LabClock::new();
    let mut core = page();
    click(&mut core, &clock, ClickTarget::toggle());
    for key in ["Enter", "Tab", "a", "ArrowDown"] {
        let d = core.dispatch(Event::Key(KeyCode::from_dom_key(key)), clock.now());
        assert!(!d.handled, "{key}");
    }
    assert!(core.nav().is_open());
}
