//! Property-based invariant tests for field validation and the nav machine.
//!
//! 1. Whitespace-only input is "required" for every field.
//! 2. Validators ignore surrounding whitespace.
//! 3. Name/message validity is exactly "trimmed char count >= minimum".
//! 4. Any `local@domain.tld` built from the allowed alphabets is valid.
//! 5. Strings without '@' are never valid emails.
//! 6. Nav surfaces agree with the phase after any trigger sequence.

use folio_core::FieldKind;
use folio_core::surface::Surface;
use folio_harness::MemorySurface;
use folio_widgets::nav::{NavMenu, NavPhase, NavTrigger};
use folio_widgets::validation::{
    EMAIL_REQUIRED, MESSAGE_MIN_CHARS, MESSAGE_REQUIRED, NAME_MIN_CHARS, NAME_REQUIRED,
    validate, validate_email, validate_message, validate_name,
};
use folio_widgets::ValidationResult;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn whitespace_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn field_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Name),
        Just(FieldKind::Email),
        Just(FieldKind::Message),
    ]
}

fn trigger_strategy() -> impl Strategy<Value = NavTrigger> {
    prop_oneof![
        Just(NavTrigger::Toggle),
        Just(NavTrigger::LinkClicked),
        Just(NavTrigger::OutsideClick),
        Just(NavTrigger::EscapeKey),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Whitespace-only input is required
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blank_is_required(ws in whitespace_strategy()) {
        prop_assert_eq!(validate_name(&ws), ValidationResult::Invalid(NAME_REQUIRED));
        prop_assert_eq!(validate_email(&ws), ValidationResult::Invalid(EMAIL_REQUIRED));
        prop_assert_eq!(validate_message(&ws), ValidationResult::Invalid(MESSAGE_REQUIRED));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Surrounding whitespace is ignored
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn padding_does_not_change_result(
        field in field_strategy(),
        core in "[a-zA-Z0-9@._-]{0,20}",
        left in whitespace_strategy(),
        right in whitespace_strategy(),
    ) {
        let padded = format!("{left}{core}{right}");
        prop_assert_eq!(validate(field, &padded), validate(field, &core));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Length rules
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn name_and_message_length_threshold(text in "[a-zA-Zé ]{0,24}") {
        let count = text.trim().chars().count();
        prop_assert_eq!(validate_name(&text).is_valid(), count >= NAME_MIN_CHARS);
        prop_assert_eq!(validate_message(&text).is_valid(), count >= MESSAGE_MIN_CHARS);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Well-formed emails are accepted
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn well_formed_emails_are_valid(
        local in "[A-Za-z0-9._%+-]{1,16}",
        domain in "[A-Za-z0-9-]{1,12}(\\.[A-Za-z0-9-]{1,8}){0,2}",
        tld in "[A-Za-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(validate_email(&email).is_valid(), "{}", email);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No '@', never valid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_at_sign_is_invalid(text in "[^@]{1,30}") {
        prop_assert!(!validate_email(&text).is_valid());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Nav surfaces stay consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nav_surfaces_track_phase(triggers in proptest::collection::vec(trigger_strategy(), 0..40)) {
        let mut surface = MemorySurface::portfolio();
        let mut nav = NavMenu::new();
        nav.sync(&mut surface);
        for trigger in triggers {
            let before = nav.phase();
            let transition = nav.handle(trigger, &mut surface);
            if before == NavPhase::Closed && trigger != NavTrigger::Toggle {
                prop_assert!(transition.is_none());
            } else {
                prop_assert!(transition.is_some());
            }
            prop_assert_eq!(surface.nav_surfaces().agreed(), Some(nav.is_open()));
            prop_assert_eq!(
                surface.has_class(folio_core::Node::NavMenu, "active"),
                nav.phase() == NavPhase::Open
            );
        }
    }
}
