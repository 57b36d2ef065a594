#![forbid(unsafe_code)]

//! Host-driven page controller.
//!
//! [`PageCore`] owns the navigation machine, the contact form, the debounced
//! header styler and the submission timer, plus the bound [`Surface`]. The
//! host feeds it events with [`PageCore::dispatch`] and advances time with
//! [`PageCore::advance`]; nothing runs on its own.
//!
//! Scroll events go through the debouncer only; there is no unthrottled
//! scroll path.
//!
//! # Ordering
//!
//! Events are handled in delivery order and each runs to completion. Timers
//! fire only inside `advance`, in deadline order. Scroll handling keeps
//! working while a submission is pending.

use folio_core::event::{ClickTarget, Event};
use folio_core::surface::Surface;
use folio_core::Result;
use folio_runtime::{Debouncer, TimerQueue};
use folio_widgets::anchor::scroll_to_anchor;
use folio_widgets::image_fallback::apply_image_fallback;
use folio_widgets::{ContactForm, NavMenu, ScrollStyle, Settlement, SubmitOutcome};
use tracing::{debug, warn};
use web_time::Instant;

use crate::config::PageConfig;
use crate::encoded_input::decode_event;

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// The event changed controller or surface state.
    pub handled: bool,
    /// The browser default action must be cancelled.
    pub prevent_default: bool,
}

impl Dispatch {
    const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    const HANDLED: Self = Self {
        handled: true,
        prevent_default: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageTask {
    /// The simulated transport finished.
    SettleSubmission,
}

/// The page controller.
#[derive(Debug)]
pub struct PageCore<S> {
    surface: S,
    config: PageConfig,
    nav: NavMenu,
    form: ContactForm,
    scroll_style: ScrollStyle,
    scroll: Debouncer<f64>,
    timers: TimerQueue<PageTask>,
    events_processed: u64,
}

impl<S: Surface> PageCore<S> {
    /// Bind controllers to `surface` and write the initial nav state.
    pub fn new(surface: S, config: PageConfig) -> Result<Self> {
        config.validate()?;
        let mut core = Self {
            surface,
            nav: NavMenu::new(),
            form: ContactForm::new(config.busy_label.clone()),
            scroll_style: ScrollStyle::new(config.scroll_threshold_px),
            scroll: Debouncer::new(config.scroll_debounce()),
            timers: TimerQueue::new(),
            events_processed: 0,
            config,
        };
        core.nav.sync(&mut core.surface);
        debug!(
            debounce_ms = core.config.scroll_debounce_ms,
            submit_delay_ms = core.config.submit_delay_ms,
            "page.init"
        );
        Ok(core)
    }

    // ── Accessors ────────────────────────────────────────────────────

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn events_processed(&self) -> u64 {
        self.events_processed
    }

    /// Earliest instant at which [`PageCore::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scroll.next_deadline(), self.timers.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Handle one event delivered at `now`.
    pub fn dispatch(&mut self, event: Event, now: Instant) -> Dispatch {
        self.events_processed += 1;
        match event {
            Event::Click(target) => self.on_click(&target),
            Event::Blur(field) => {
                self.form.blur(field, &mut self.surface);
                Dispatch::HANDLED
            }
            Event::Input(field) => {
                self.form.input(field, &mut self.surface);
                Dispatch::HANDLED
            }
            Event::Submit => self.on_submit(now),
            Event::Key(key) => match self.nav.handle_key(&key, &mut self.surface) {
                Some(_) => Dispatch::HANDLED,
                None => Dispatch::IGNORED,
            },
            Event::Scroll { y } => {
                self.scroll.call(y, now);
                Dispatch::HANDLED
            }
            Event::ImageError { index } => {
                apply_image_fallback(index, &mut self.surface);
                Dispatch::HANDLED
            }
        }
    }

    /// Decode and dispatch a JSON-encoded event. Returns `false` (and
    /// dispatches nothing) if the input is malformed.
    pub fn push_encoded_input(&mut self, json: &str, now: Instant) -> bool {
        match decode_event(json) {
            Ok(event) => {
                self.dispatch(event, now);
                true
            }
            Err(err) => {
                warn!(%err, "page.encoded_input.rejected");
                false
            }
        }
    }

    fn on_click(&mut self, target: &ClickTarget) -> Dispatch {
        let mut handled = self.nav.handle_click(target, &mut self.surface).is_some();
        let mut prevent_default = false;
        if let Some(href) = target.anchor.as_deref() {
            prevent_default = true;
            handled |= scroll_to_anchor(href, &mut self.surface).is_some();
        }
        Dispatch {
            handled,
            prevent_default,
        }
    }

    fn on_submit(&mut self, now: Instant) -> Dispatch {
        let handled = match self.form.submit(&mut self.surface) {
            SubmitOutcome::Started => {
                self.timers
                    .schedule(now + self.config.submit_delay(), PageTask::SettleSubmission);
                true
            }
            SubmitOutcome::Invalid { .. } | SubmitOutcome::Rejected => false,
        };
        Dispatch {
            handled,
            prevent_default: true,
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Run everything due at `now`. Returns the number of deferred actions
    /// executed.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        if let Some(y) = self.scroll.poll(now) {
            self.scroll_style.apply(y, &mut self.surface);
            fired += 1;
        }
        while let Some((_, task)) = self.timers.pop_due(now) {
            match task {
                PageTask::SettleSubmission => {
                    if self.form.settle(Settlement::Delivered, &mut self.surface) {
                        self.surface.alert(&self.config.success_message);
                    }
                }
            }
            fired += 1;
        }
        fired
    }
}
