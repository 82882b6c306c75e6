//! Tests for classification results and their rejections

use ticketgate::core::models::{MISMATCH_MESSAGE, NON_COMPLIANT_MESSAGE, TicketId, Verdict};
use ticketgate::core::services::classify;

#[test]
fn test_classification_carries_both_tickets() {
    let c = classify("abc-7: thing", "feature/ABC_7-thing");

    assert_eq!(c.verdict, Verdict::Compliant);
    assert_eq!(c.ticket_from_message, Some(TicketId::parse("ABC-7").unwrap()));
    assert_eq!(c.ticket_from_branch.as_ref().map(TicketId::normalized).as_deref(), Some("ABC-7"));
}

#[test]
fn test_compliant_has_no_rejection() {
    let c = classify("ABC-7: thing", "ABC-7");
    assert!(c.is_accepted());
    assert!(c.rejection("deadbeef", "ABC-7").is_none());
}

#[test]
fn test_mismatch_rejection_text() {
    let rejection = classify("ABC-8: thing", "feature/ABC-7").rejection("deadbeef", "feature/ABC-7").unwrap();

    assert!(rejection.message.starts_with(MISMATCH_MESSAGE));
    assert!(rejection.message.ends_with(
        "Examples: \"XXX-1234: message here\", \"XXX-1234 message here\", \"No-ticket, message here\""
    ));
    assert_eq!(rejection.detail, "Offending commit deadbeef on feature/ABC-7");
}

#[test]
fn test_non_compliant_rejection_text() {
    let rejection = classify("wip", "main").rejection("cafe", "main").unwrap();

    assert!(rejection.message.starts_with(NON_COMPLIANT_MESSAGE));
    assert!(rejection.message.contains("\nExamples: "));
    assert_eq!(rejection.to_string(), format!("{}\n{}", rejection.message, rejection.detail));
}

#[test]
fn test_multiline_message_uses_subject_start() {
    let c = classify("ABC-7: subject\n\nbody mentions DEF-1", "ABC-7");
    assert_eq!(c.verdict, Verdict::Compliant);

    let c = classify("subject\n\nABC-7 in body", "ABC-7");
    assert_eq!(c.verdict, Verdict::NonCompliant);
}

#[test]
fn test_classification_json_shape() {
    let c = classify("No-ticket: x", "main");
    let json = serde_json::to_value(&c).unwrap();

    assert_eq!(json["verdict"], "compliant");
    assert!(json["ticket_from_message"].is_null());
    assert!(json["ticket_from_branch"].is_null());

    let c = classify("ABC-1 x", "feature/DEF-2");
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["verdict"], "compliant_but_mismatched");
    assert_eq!(json["ticket_from_message"], "ABC-1");
    assert_eq!(json["ticket_from_branch"], "DEF-2");
}
