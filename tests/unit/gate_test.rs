//! Tests for gating whole pushes through the `CommitSource` port

use ticketgate::core::models::{Verdict, ZERO_OID};
use ticketgate::core::services::{DEFAULT_MAX_COMMITS, GateOutcome, GatePolicy, gate_ref_updates};

use crate::common::{MockCommitSource, oid, update};

#[test]
fn test_compliant_push_is_accepted() {
    let source = MockCommitSource::new()
        .with_ref("refs/heads/feature/ABC-1-x", &["ABC-1: one", "abc_1 two"]);
    let updates = [update(&oid(1), &oid(2), "refs/heads/feature/ABC-1-x")];

    let outcomes = gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].0, "refs/heads/feature/ABC-1-x");
    assert_eq!(outcomes[0].1, GateOutcome::Accepted { commits_checked: 2 });
}

#[test]
fn test_first_offending_commit_is_reported() {
    let source = MockCommitSource::new()
        .with_ref("refs/heads/ABC-1", &["ABC-1 ok", "ABC-2 wrong", "junk"]);
    let updates = [update(&oid(1), &oid(2), "refs/heads/ABC-1")];

    let outcomes = gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();

    match &outcomes[0].1 {
        GateOutcome::Rejected {
            commit,
            classification,
            rejection,
        } => {
            assert_eq!(commit.id, "ABC-1-1");
            assert_eq!(classification.verdict, Verdict::CompliantButMismatched);
            assert_eq!(rejection.detail, "Offending commit ABC-1-1 on ABC-1");
        },
        GateOutcome::Accepted { .. } => panic!("expected a rejection"),
    }
}

#[test]
fn test_rejection_stops_remaining_refs() {
    let source = MockCommitSource::new()
        .with_ref("refs/heads/main", &["wip"])
        .with_ref("refs/heads/other", &["No-ticket: fine"]);
    let updates = [
        update(&oid(1), &oid(2), "refs/heads/main"),
        update(&oid(3), &oid(4), "refs/heads/other"),
    ];

    let outcomes = gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].1.is_accepted());
    assert_eq!(source.calls().len(), 1);
}

#[test]
fn test_deletions_and_tags_are_not_checked() {
    let source = MockCommitSource::new().with_ref("refs/tags/v1", &["junk"]);
    let updates = [
        update(&oid(1), ZERO_OID, "refs/heads/gone"),
        update(ZERO_OID, &oid(2), "refs/tags/v1"),
    ];

    let outcomes = gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();

    assert!(outcomes.is_empty());
    assert!(source.calls().is_empty());
}

#[test]
fn test_new_branch_is_checked() {
    let source = MockCommitSource::new().with_ref("refs/heads/DEF-9-new", &["nope"]);
    let updates = [update(ZERO_OID, &oid(5), "refs/heads/DEF-9-new")];

    let outcomes = gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();

    assert!(!outcomes[0].1.is_accepted());
}

#[test]
fn test_commit_cap_is_passed_to_source() {
    let source = MockCommitSource::new().with_ref("refs/heads/main", &["No-ticket: a"]);
    let updates = [update(&oid(1), &oid(2), "refs/heads/main")];

    gate_ref_updates(&source, &updates, GatePolicy::default()).unwrap();
    let unlimited = GatePolicy {
        max_commits: 0,
        ..GatePolicy::default()
    };
    gate_ref_updates(&source, &updates, unlimited).unwrap();

    let limits: Vec<usize> = source.calls().into_iter().map(|(_, limit)| limit).collect();
    assert_eq!(limits, vec![DEFAULT_MAX_COMMITS, usize::MAX]);
}

#[test]
fn test_commits_beyond_cap_are_not_checked() {
    let source = MockCommitSource::new().with_ref("refs/heads/main", &["No-ticket: a", "No-ticket: b", "junk"]);
    let updates = [update(&oid(1), &oid(2), "refs/heads/main")];
    let policy = GatePolicy {
        max_commits: 2,
        ..GatePolicy::default()
    };

    let outcomes = gate_ref_updates(&source, &updates, policy).unwrap();

    assert_eq!(outcomes[0].1, GateOutcome::Accepted { commits_checked: 2 });
}

#[test]
fn test_source_errors_propagate() {
    let source = MockCommitSource::failing();
    let updates = [update(&oid(1), &oid(2), "refs/heads/main")];

    assert!(gate_ref_updates(&source, &updates, GatePolicy::default()).is_err());
}
