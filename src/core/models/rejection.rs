//! Rejection messages shown to the pusher
//!
//! Each non-compliant verdict maps to a fixed message plus a detail line
//! naming the offending commit.

use serde::Serialize;

use super::Verdict;

/// Suffix appended to every rejection message
pub const EXAMPLES: &str =
    "\nExamples: \"XXX-1234: message here\", \"XXX-1234 message here\", \"No-ticket, message here\"";

/// Message for [`Verdict::CompliantButMismatched`]
pub const MISMATCH_MESSAGE: &str = "JIRA ticket reference in commit message does not match the one in branch name. \
     Please amend commit message with the correct JIRA ticket reference.";

/// Message for [`Verdict::NonCompliant`]
pub const NON_COMPLIANT_MESSAGE: &str =
    "Commit message does not meet the standards. Please amend commit message with the JIRA ticket reference.";

/// A rejected commit: what is wrong and which commit it is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// User-facing explanation, including the examples suffix
    pub message: String,
    /// `Offending commit <id> on <branch>`
    pub detail: String,
}

impl Rejection {
    /// Build the rejection for a verdict, or `None` when the verdict accepts
    #[must_use]
    pub fn for_verdict(verdict: Verdict, commit_id: &str, branch: &str) -> Option<Self> {
        let reason = match verdict {
            Verdict::Compliant => return None,
            Verdict::CompliantButMismatched => MISMATCH_MESSAGE,
            Verdict::NonCompliant => NON_COMPLIANT_MESSAGE,
        };

        Some(Self {
            message: format!("{reason}{EXAMPLES}"),
            detail: format!("Offending commit {commit_id} on {branch}"),
        })
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.message, self.detail)
    }
}
