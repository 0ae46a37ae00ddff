//! Edge-case tests for the detection pipeline

use veil::detection::{DetectionEngine, PiiCategory};

fn engine() -> DetectionEngine {
    DetectionEngine::with_defaults().expect("default engine")
}

#[test]
fn test_whitespace_only_input() {
    let result = engine().detect("   \n\t  ");
    assert!(!result.has_redactions);
    assert_eq!(result.redacted_text, result.original_text);
}

#[test]
fn test_phone_format_variants() {
    let engine = engine();
    for text in [
        "call 555-123-4567 ok",
        "call 555.123.4567 ok",
        "call 555 123 4567 ok",
        "call (555) 123-4567 ok",
    ] {
        let result = engine.detect(text);
        assert!(
            result.categories.contains(&PiiCategory::PhoneNumber),
            "expected phone in {text:?}"
        );
        assert!(result.redacted_text.contains("[PHONE REDACTED]"));
    }
}

#[test]
fn test_parenthesized_phone_scores_strict_form() {
    let result = engine().detect("You can reach me at (555) 234-5678.");
    let phone = result
        .matches
        .iter()
        .find(|m| m.category == PiiCategory::PhoneNumber)
        .unwrap();
    assert!((phone.confidence - 0.95).abs() < f32::EPSILON);
}

#[test]
fn test_ssn_redacted() {
    let result = engine().detect("My SSN is 123-45-6789 for the verification process.");
    assert_eq!(
        result.redacted_text,
        "My SSN is [SSN REDACTED] for the verification process."
    );
    let ssn = &result.matches[0];
    assert_eq!(ssn.category, PiiCategory::Ssn);
    assert!((ssn.confidence - 0.95).abs() < f32::EPSILON);
}

#[test]
fn test_email_with_high_confidence() {
    let result = engine().detect("Contact: john.doe@example.com");
    let email = result
        .matches
        .iter()
        .find(|m| m.category == PiiCategory::Email)
        .unwrap();
    assert!((email.confidence - 0.98).abs() < f32::EPSILON);
    assert_eq!(result.redacted_text, "Contact: [EMAIL REDACTED]");
}

#[test]
fn test_valid_ipv4_redacted_invalid_kept() {
    let engine = engine();

    let valid = engine.detect("server at 192.168.1.1 is up");
    assert_eq!(valid.redacted_text, "server at [IP REDACTED] is up");

    let invalid = engine.detect("build 999.999.999.999 failed");
    assert!(!invalid.has_redactions);
    assert_eq!(invalid.redacted_text, invalid.original_text);
}

#[test]
fn test_date_of_birth_formats() {
    let engine = engine();
    for text in ["born 01/15/1990 ok", "born 15/12/1990 ok", "born 1990-12-15 ok"] {
        let result = engine.detect(text);
        assert!(
            result.categories.contains(&PiiCategory::DateOfBirth),
            "expected DOB in {text:?}"
        );
        assert!(result.redacted_text.contains("[DOB REDACTED]"));
    }
}

#[test]
fn test_address_with_unit_marker_scores_higher() {
    let engine = engine();

    let with_unit = engine.detect("Ship to 123 Main Street, Apt 4B");
    let address = with_unit
        .matches
        .iter()
        .find(|m| m.category == PiiCategory::Address)
        .unwrap();
    assert!((address.confidence - 0.90).abs() < f32::EPSILON);

    let without_unit = engine.detect("Ship to 123 Main Street please");
    let address = without_unit
        .matches
        .iter()
        .find(|m| m.category == PiiCategory::Address)
        .unwrap();
    assert!((address.confidence - 0.80).abs() < f32::EPSILON);
}

#[test]
fn test_name_introduction_redacts_name_only() {
    let result = engine().detect("Hi, my name is John Smith, nice to meet you");
    assert_eq!(
        result.redacted_text,
        "Hi, my name is [NAME REDACTED], nice to meet you"
    );
}

#[test]
fn test_call_me_phrase_does_not_match_lowercase_words() {
    // "Call me at ..." must not treat "at" as an introduced name
    let result = engine().detect("Call me at 555-123-4567");
    assert!(!result.categories.contains(&PiiCategory::NamePattern));
}

#[test]
fn test_short_digit_run_redacted_as_account() {
    let result = engine().detect("wire to 98765432 today");
    assert!(result.categories.contains(&PiiCategory::BankAccount));
    // Bank accounts carry the generic fallback token
    assert_eq!(result.redacted_text, "wire to [REDACTED] today");
}

#[test]
fn test_license_shaped_identifier_uses_generic_token() {
    let result = engine().detect("License: D1234567");
    assert!(result.has_redactions);
    // driver_license wins the same-span tie against passport
    assert_eq!(
        result.matches[0].category,
        PiiCategory::DriverLicense
    );
    assert_eq!(result.redacted_text, "License: [REDACTED]");
}

#[test]
fn test_hyphenated_card_number() {
    let result = engine().detect("card 4111-1111-1111-1111 on file");
    assert_eq!(result.redacted_text, "card [CARD REDACTED] on file");
    let card = &result.matches[0];
    assert_eq!(card.category, PiiCategory::CreditCard);
    assert!((card.confidence - 0.90).abs() < f32::EPSILON);
}

#[test]
fn test_unicode_text_around_matches() {
    let result = engine().detect("ring mig på 555-123-4567 – tak ❤️");
    assert_eq!(result.redacted_text, "ring mig på [PHONE REDACTED] – tak ❤️");
}

#[test]
fn test_mixed_voice_transcript_sample() {
    // A transcript shape the voice pipeline produces
    let result = engine().detect(
        "Hi, this is a voice message. My number is 555-123-4567 if you need to reach me.",
    );
    assert!(result.has_redactions);
    assert_eq!(
        result.redacted_text,
        "Hi, this is a voice message. My number is [PHONE REDACTED] if you need to reach me."
    );
}

#[test]
fn test_adjacent_pii_spans() {
    let result = engine().detect("555-123-4567 john@example.com");
    assert_eq!(result.matches.len(), 2);
    assert_eq!(
        result.redacted_text,
        "[PHONE REDACTED] [EMAIL REDACTED]"
    );
}
