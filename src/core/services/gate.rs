//! Gate service - evaluates the commits of one ref update
//!
//! Commits are classified in the order given (oldest first) and evaluation
//! stops at the first commit that is not accepted.

use serde::Serialize;

use crate::core::models::{CommitRecord, RefUpdate, Rejection};
use crate::core::ports::CommitSource;
use crate::error::GateError;

use super::classifier::{Classification, classify};

/// Default number of commits inspected per ref update
pub const DEFAULT_MAX_COMMITS: usize = 10;

/// How much of a push the gate inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    /// Maximum commits inspected per ref update (`0` = no limit)
    pub max_commits: usize,
    /// Let merge commits through without classifying them
    pub skip_merge_commits: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_commits: DEFAULT_MAX_COMMITS,
            skip_merge_commits: false,
        }
    }
}

impl GatePolicy {
    /// The commit cap as an iterator bound
    #[must_use]
    pub const fn limit(&self) -> usize {
        if self.max_commits == 0 {
            usize::MAX
        } else {
            self.max_commits
        }
    }
}

/// Outcome of gating one ref update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    /// Every inspected commit is compliant
    Accepted {
        /// Number of commits classified
        commits_checked: usize,
    },
    /// The first offending commit
    Rejected {
        /// The commit that was refused
        commit: CommitRecord,
        /// Why it was refused
        classification: Classification,
        /// Message to show the pusher
        rejection: Rejection,
    },
}

impl GateOutcome {
    /// Whether the ref update may proceed
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Classify `commits` against `branch`, stopping at the first rejection
#[must_use]
pub fn evaluate<I>(commits: I, branch: &str, policy: GatePolicy) -> GateOutcome
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut commits_checked = 0;

    for commit in commits.into_iter().take(policy.limit()) {
        if policy.skip_merge_commits && commit.is_merge() {
            log::debug!("skipping merge commit {}", commit.id);
            continue;
        }

        commits_checked += 1;
        let classification = classify(&commit.message, branch);
        if let Some(rejection) = classification.rejection(&commit.id, branch) {
            log::info!("rejecting commit {} on {branch}: {}", commit.id, classification.verdict);
            return GateOutcome::Rejected {
                commit,
                classification,
                rejection,
            };
        }
    }

    GateOutcome::Accepted { commits_checked }
}

/// Gate every update of a push, stopping at the first rejected ref
///
/// Deletions and refs outside `refs/heads/` are let through unchecked: there
/// is no branch name to compare against. Returns `(ref_name, outcome)` for
/// each ref that was evaluated.
pub fn gate_ref_updates<S>(
    source: &S,
    updates: &[RefUpdate],
    policy: GatePolicy,
) -> Result<Vec<(String, GateOutcome)>, GateError>
where
    S: CommitSource + ?Sized,
{
    let mut outcomes = Vec::new();

    for update in updates {
        if update.is_delete() {
            log::debug!("{}: deletion, nothing to check", update.ref_name);
            continue;
        }
        let Some(branch) = update.branch_name() else {
            log::debug!("{}: not a branch, skipping", update.ref_name);
            continue;
        };

        let commits = source.commits_added(update, policy.limit())?;
        let outcome = evaluate(commits, branch, policy);
        let rejected = !outcome.is_accepted();
        outcomes.push((update.ref_name.clone(), outcome));
        if rejected {
            break;
        }
    }

    Ok(outcomes)
}
