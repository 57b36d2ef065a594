#![forbid(unsafe_code)]

//! Contact form controller: field error display and the submission protocol.
//!
//! # Error display
//!
//! An invalid field gets the `error` class, its message in the field's error
//! slot, and `aria-live="polite"` on the slot so assistive technology
//! announces it. A valid field has all three removed. Typing into a field
//! clears its error state regardless of validity; errors only surface on
//! blur or submit.
//!
//! # Submission
//!
//! ```text
//!  submit ──▶ pending? ──yes──▶ Rejected
//!               │ no
//!               ▼
//!        validate all three (no short-circuit)
//!               │ any invalid ──▶ Invalid { fields }
//!               ▼
//!        pending = true, busy label, disabled ──▶ Started
//!               ⋮  (host transport / simulated delay)
//!        settle(Delivered | Failed)
//!               ▼
//!        original label, enabled, pending = false
//!        (Delivered also clears every field)
//! ```
//!
//! [`ContactForm::settle`] is the only way out of the pending state and it
//! unconditionally restores the control, so no path leaves it disabled.

use folio_core::surface::{FieldKind, Node, Surface};
use tracing::debug;

use crate::ERROR_CLASS;
use crate::validation::{ValidationResult, validate};

/// Per-field state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    raw_value: String,
    error: Option<&'static str>,
}

impl FieldState {
    /// Last value read from the field.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Message currently displayed for the field.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Rejected,
    /// At least one field failed validation; all failures are displayed.
    Invalid { fields: Vec<FieldKind> },
    /// Submission started; the host must eventually call `settle`.
    Started,
}

/// How an in-flight submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Delivered,
    Failed,
}

#[derive(Debug, Clone, Default)]
struct SubmissionState {
    pending: bool,
    saved_label: Option<String>,
}

/// Contact form controller.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FieldState; 3],
    submission: SubmissionState,
    busy_label: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(busy_label: impl Into<String>) -> Self {
        Self {
            fields: Default::default(),
            submission: SubmissionState::default(),
            busy_label: busy_label.into(),
        }
    }

    #[must_use]
    pub fn field(&self, field: FieldKind) -> &FieldState {
        &self.fields[field.index()]
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.submission.pending
    }

    #[must_use]
    pub fn busy_label(&self) -> &str {
        &self.busy_label
    }

    fn display<S: Surface + ?Sized>(
        &mut self,
        field: FieldKind,
        result: ValidationResult,
        surface: &mut S,
    ) {
        let slot = Node::ErrorSlot(field);
        match result {
            ValidationResult::Invalid(message) => {
                surface.set_class(Node::Field(field), ERROR_CLASS, true);
                surface.set_text(slot, message);
                surface.set_attribute(slot, "aria-live", "polite");
                self.fields[field.index()].error = Some(message);
            }
            ValidationResult::Valid => {
                surface.set_class(Node::Field(field), ERROR_CLASS, false);
                surface.set_text(slot, "");
                surface.remove_attribute(slot, "aria-live");
                self.fields[field.index()].error = None;
            }
        }
    }

    fn check<S: Surface + ?Sized>(&mut self, field: FieldKind, surface: &mut S) -> ValidationResult {
        let raw = surface.value(field);
        let result = validate(field, &raw);
        self.fields[field.index()].raw_value = raw;
        self.display(field, result, surface);
        result
    }

    /// Field lost focus: validate it and display the result.
    pub fn blur<S: Surface + ?Sized>(&mut self, field: FieldKind, surface: &mut S) -> ValidationResult {
        let result = self.check(field, surface);
        debug!(
            field = field.as_str(),
            valid = result.is_valid(),
            "form.blur"
        );
        result
    }

    /// User typed: record the value and clear the field's error state.
    pub fn input<S: Surface + ?Sized>(&mut self, field: FieldKind, surface: &mut S) {
        self.fields[field.index()].raw_value = surface.value(field);
        self.display(field, ValidationResult::Valid, surface);
    }

    /// Run the submission protocol up to the hand-off to the transport.
    pub fn submit<S: Surface + ?Sized>(&mut self, surface: &mut S) -> SubmitOutcome {
        if self.submission.pending {
            debug!(pending = true, "form.submit.rejected");
            return SubmitOutcome::Rejected;
        }

        let mut invalid = Vec::new();
        for field in FieldKind::ALL {
            if !self.check(field, surface).is_valid() {
                invalid.push(field);
            }
        }
        if !invalid.is_empty() {
            debug!(invalid = invalid.len(), "form.submit.invalid");
            return SubmitOutcome::Invalid { fields: invalid };
        }

        self.submission.pending = true;
        self.submission.saved_label = Some(surface.text(Node::SubmitButton));
        surface.set_text(Node::SubmitButton, &self.busy_label);
        surface.set_disabled(Node::SubmitButton, true);
        debug!(pending = true, "form.submit.started");
        SubmitOutcome::Started
    }

    /// Finish an in-flight submission. Returns `false` if none was pending.
    pub fn settle<S: Surface + ?Sized>(&mut self, settlement: Settlement, surface: &mut S) -> bool {
        if !self.submission.pending {
            return false;
        }
        if settlement == Settlement::Delivered {
            self.reset(surface);
        }
        let label = self.submission.saved_label.take().unwrap_or_default();
        surface.set_text(Node::SubmitButton, &label);
        surface.set_disabled(Node::SubmitButton, false);
        self.submission.pending = false;
        debug!(?settlement, pending = false, "form.settle");
        true
    }

    /// Empty every field and clear its error display.
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for field in FieldKind::ALL {
            surface.set_value(field, "");
            self.fields[field.index()].raw_value.clear();
            self.display(field, ValidationResult::Valid, surface);
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new("Sending...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMAIL_INVALID, MESSAGE_REQUIRED, NAME_REQUIRED, NAME_TOO_SHORT};
    use folio_harness::MemorySurface;
    use pretty_assertions::assert_eq;

    fn filled() -> MemorySurface {
        let mut surface = MemorySurface::portfolio();
        surface.set_value(FieldKind::Name, "Ada Lovelace");
        surface.set_value(FieldKind::Email, "ada@example.com");
        surface.set_value(FieldKind::Message, "Let's build an engine together.");
        surface
    }

    #[test]
    fn blur_marks_invalid_field() {
        let mut surface = MemorySurface::portfolio();
        let mut form = ContactForm::default();
        surface.set_value(FieldKind::Name, "A");
        let result = form.blur(FieldKind::Name, &mut surface);
        assert_eq!(result, ValidationResult::Invalid(NAME_TOO_SHORT));
        assert!(surface.has_class(Node::Field(FieldKind::Name), ERROR_CLASS));
        assert_eq!(surface.text(Node::ErrorSlot(FieldKind::Name)), NAME_TOO_SHORT);
        assert_eq!(
            surface.attribute(Node::ErrorSlot(FieldKind::Name), "aria-live"),
            Some("polite")
        );
        assert_eq!(form.field(FieldKind::Name).error_message(), Some(NAME_TOO_SHORT));
        assert_eq!(form.field(FieldKind::Name).raw_value(), "A");
    }

    #[test]
    fn blur_on_valid_clears_previous_error() {
        let mut surface = MemorySurface::portfolio();
        let mut form = ContactForm::default();
        form.blur(FieldKind::Email, &mut surface);
        surface.set_value(FieldKind::Email, "a@b.co");
        assert!(form.blur(FieldKind::Email, &mut surface).is_valid());
        assert!(!surface.has_class(Node::Field(FieldKind::Email), ERROR_CLASS));
        assert_eq!(surface.text(Node::ErrorSlot(FieldKind::Email)), "");
        assert_eq!(
            surface.attribute(Node::ErrorSlot(FieldKind::Email), "aria-live"),
            None
        );
    }

    #[test]
    fn typing_clears_error_even_when_still_invalid() {
        let mut surface = MemorySurface::portfolio();
        let mut form = ContactForm::default();
        surface.set_value(FieldKind::Email, "nope");
        form.blur(FieldKind::Email, &mut surface);
        assert_eq!(form.field(FieldKind::Email).error_message(), Some(EMAIL_INVALID));

        surface.set_value(FieldKind::Email, "nope2");
        form.input(FieldKind::Email, &mut surface);
        assert_eq!(form.field(FieldKind::Email).error_message(), None);
        assert!(!surface.has_class(Node::Field(FieldKind::Email), ERROR_CLASS));
        assert_eq!(form.field(FieldKind::Email).raw_value(), "nope2");
    }

    #[test]
    fn submit_marks_every_invalid_field() {
        let mut surface = MemorySurface::portfolio();
        let mut form = ContactForm::default();
        surface.set_value(FieldKind::Email, "ok@example.com");
        let outcome = form.submit(&mut surface);
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                fields: vec![FieldKind::Name, FieldKind::Message]
            }
        );
        assert_eq!(form.field(FieldKind::Name).error_message(), Some(NAME_REQUIRED));
        assert_eq!(
            form.field(FieldKind::Message).error_message(),
            Some(MESSAGE_REQUIRED)
        );
        assert!(!form.is_pending());
        assert!(!surface.is_disabled(Node::SubmitButton));
    }

    #[test]
    fn valid_submit_goes_busy_and_rejects_reentry() {
        let mut surface = filled();
        let mut form = ContactForm::new("Sending...");
        assert_eq!(form.submit(&mut surface), SubmitOutcome::Started);
        assert!(form.is_pending());
        assert!(surface.is_disabled(Node::SubmitButton));
        assert_eq!(surface.text(Node::SubmitButton), "Sending...");
        assert_eq!(form.submit(&mut surface), SubmitOutcome::Rejected);
        assert_eq!(form.submit(&mut surface), SubmitOutcome::Rejected);
    }

    #[test]
    fn delivered_restores_control_and_clears_fields() {
        let mut surface = filled();
        let mut form = ContactForm::default();
        form.submit(&mut surface);
        assert!(form.settle(Settlement::Delivered, &mut surface));
        assert!(!form.is_pending());
        assert!(!surface.is_disabled(Node::SubmitButton));
        assert_eq!(surface.text(Node::SubmitButton), "Send Message");
        for field in FieldKind::ALL {
            assert_eq!(surface.value(field), "");
            assert_eq!(form.field(field), &FieldState::default());
        }
    }

    #[test]
    fn failed_restores_control_and_keeps_values() {
        let mut surface = filled();
        let mut form = ContactForm::default();
        form.submit(&mut surface);
        assert!(form.settle(Settlement::Failed, &mut surface));
        assert!(!surface.is_disabled(Node::SubmitButton));
        assert_eq!(surface.text(Node::SubmitButton), "Send Message");
        assert_eq!(surface.value(FieldKind::Name), "Ada Lovelace");
        assert_eq!(form.submit(&mut surface), SubmitOutcome::Started);
    }

    #[test]
    fn settle_without_pending_is_a_no_op() {
        let mut surface = filled();
        let mut form = ContactForm::default();
        assert!(!form.settle(Settlement::Delivered, &mut surface));
        assert_eq!(surface.value(FieldKind::Name), "Ada Lovelace");
    }
}
