#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use folio_core::clock::LabClock;
use folio_core::event::{ClickTarget, Event, KeyCode};
use folio_core::surface::{FieldKind, Node, Surface};
use folio_harness::MemorySurface;
use folio_web::{PageConfig, PageCore};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzStep {
    Toggle,
    Outside,
    InsideMenu,
    NavLink(u8),
    Escape,
    Type { field: u8, text: String },
    Blur(u8),
    Submit,
    Scroll(u16),
    ImageError(u8),
    Wait(u16),
}

const SECTIONS: [&str; 5] = ["#home", "#about", "#projects", "#contact", "#missing"];

fn field(n: u8) -> FieldKind {
    FieldKind::ALL[usize::from(n) % FieldKind::ALL.len()]
}

fuzz_target!(|steps: Vec<FuzzStep>| {
    let clock = LabClock::new();
    let Ok(mut core) = PageCore::new(MemorySurface::portfolio(), PageConfig::default()) else {
        return;
    };
    for step in steps.into_iter().take(256) {
        let event = match step {
            FuzzStep::Toggle => Event::Click(ClickTarget::toggle()),
            FuzzStep::Outside => Event::Click(ClickTarget::outside()),
            FuzzStep::InsideMenu => Event::Click(ClickTarget::inside_menu()),
            FuzzStep::NavLink(n) => {
                Event::Click(ClickTarget::nav_link(SECTIONS[usize::from(n) % SECTIONS.len()]))
            }
            FuzzStep::Escape => Event::Key(KeyCode::Escape),
            FuzzStep::Type { field: n, text } => {
                core.surface_mut().set_value(field(n), &text);
                Event::Input(field(n))
            }
            FuzzStep::Blur(n) => Event::Blur(field(n)),
            FuzzStep::Submit => Event::Submit,
            FuzzStep::Scroll(y) => Event::Scroll { y: f64::from(y) },
            FuzzStep::ImageError(i) => Event::ImageError { index: usize::from(i) },
            FuzzStep::Wait(ms) => {
                clock.advance(Duration::from_millis(u64::from(ms)));
                core.advance(clock.now());
                continue;
            }
        };
        core.dispatch(event, clock.now());

        let open = core.nav().is_open();
        assert_eq!(core.surface().nav_surfaces().agreed(), Some(open));
        let pending = core.form().is_pending();
        assert_eq!(core.surface().is_disabled(Node::SubmitButton), pending);
        if let Some(&y) = core.surface().scroll_log().last() {
            assert!(y >= 0.0);
        }
    }
});
