//! The navigation machine and form emit structured `tracing` events for
//! every transition.

use std::sync::{Arc, Mutex};

use folio_core::FieldKind;
use folio_core::surface::Surface;
use folio_harness::MemorySurface;
use folio_widgets::{ContactForm, NavMenu};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Default)]
struct Captured {
    messages: Vec<String>,
    triggers: Vec<String>,
}

struct CaptureLayer {
    state: Arc<Mutex<Captured>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        #[derive(Default)]
        struct Fields {
            message: Option<String>,
            trigger: Option<String>,
        }
        impl tracing::field::Visit for Fields {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                match field.name() {
                    "message" => self.message = Some(value.to_string()),
                    "trigger" => self.trigger = Some(value.to_string()),
                    _ => {}
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                }
            }
        }
        let mut fields = Fields::default();
        event.record(&mut fields);
        let mut state = self.state.lock().expect("capture lock");
        if let Some(message) = fields.message {
            state.messages.push(message);
        }
        if let Some(trigger) = fields.trigger {
            state.triggers.push(trigger);
        }
    }
}

fn capture<F: FnOnce()>(f: F) -> Captured {
    let state = Arc::new(Mutex::new(Captured::default()));
    let subscriber = tracing_subscriber::registry().with(CaptureLayer {
        state: Arc::clone(&state),
    });
    tracing::subscriber::with_default(subscriber, f);
    let mut guard = state.lock().expect("capture lock");
    std::mem::take(&mut *guard)
}

#[test]
fn nav_transitions_are_traced_with_trigger() {
    let captured = capture(|| {
        let mut surface = MemorySurface::portfolio();
        let mut nav = NavMenu::new();
        nav.toggle(&mut surface);
        nav.escape(&mut surface);
        // Ignored while closed: no event.
        nav.escape(&mut surface);
    });
    let transitions = captured
        .messages
        .iter()
        .filter(|m| m.as_str() == "nav.transition")
        .count();
    assert_eq!(transitions, 2);
    assert_eq!(captured.triggers, vec!["toggle", "escape_key"]);
}

#[test]
fn form_submission_lifecycle_is_traced() {
    let captured = capture(|| {
        let mut surface = MemorySurface::portfolio();
        surface.set_value(FieldKind::Name, "Grace");
        surface.set_value(FieldKind::Email, "grace@navy.mil");
        surface.set_value(FieldKind::Message, "Found a moth in the relay.");
        let mut form = ContactForm::default();
        form.submit(&mut surface);
        form.submit(&mut surface);
        form.settle(folio_widgets::Settlement::Delivered, &mut surface);
    });
    for expected in ["form.submit.started", "form.submit.rejected", "form.settle"] {
        assert!(
            captured.messages.iter().any(|m| m == expected),
            "missing {expected} in {:?}",
            captured.messages
        );
    }
}
