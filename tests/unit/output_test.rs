//! Tests for JSON output shapes

use ticketgate::core::models::CommitRecord;
use ticketgate::core::services::{GateOutcome, classify};
use ticketgate::output::{ClassifyResult, GateReport, RefReport};

#[test]
fn test_classify_result_json_flattens_classification() {
    let result = ClassifyResult::new("feature/ABC-1", classify("wip", "feature/ABC-1"), "abc123");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["branch"], "feature/ABC-1");
    assert_eq!(json["verdict"], "non_compliant");
    assert_eq!(json["ticket_from_branch"], "ABC-1");
    assert_eq!(json["rejection"]["detail"], "Offending commit abc123 on feature/ABC-1");
}

#[test]
fn test_accepted_classify_result_has_null_rejection() {
    let result = ClassifyResult::new("main", classify("No-ticket: x", "main"), "abc123");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["verdict"], "compliant");
    assert!(json["rejection"].is_null());
}

#[test]
fn test_gate_report_accepted_only_when_all_refs_are() {
    let accepted = RefReport {
        ref_name: "refs/heads/main".to_string(),
        outcome: GateOutcome::Accepted { commits_checked: 3 },
    };
    let report = GateReport::new(vec![accepted]);
    assert!(report.accepted);
    assert!(report.first_rejection().is_none());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["refs"][0]["outcome"], "accepted");
    assert_eq!(json["refs"][0]["commits_checked"], 3);
}

#[test]
fn test_gate_report_exposes_rejection() {
    let commit = CommitRecord::new("c0ffee", "junk");
    let classification = classify(&commit.message, "main");
    let rejection = classification.rejection(&commit.id, "main").unwrap();
    let rejected = RefReport {
        ref_name: "refs/heads/main".to_string(),
        outcome: GateOutcome::Rejected {
            commit,
            classification,
            rejection,
        },
    };

    let report = GateReport::new(vec![rejected]);

    assert!(!report.accepted);
    assert_eq!(report.first_rejection().unwrap().detail, "Offending commit c0ffee on main");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["refs"][0]["outcome"], "rejected");
    assert_eq!(json["refs"][0]["commit"]["id"], "c0ffee");
    assert_eq!(json["refs"][0]["classification"]["verdict"], "non_compliant");
}
