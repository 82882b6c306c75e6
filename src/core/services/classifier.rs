//! Commit message compliance classification
//!
//! This is the decision logic of the gate: a pure function of the commit
//! message and the branch name, with no I/O.

use serde::Serialize;

use crate::core::models::{Rejection, TicketId, Verdict};

use super::extractor::{extract_from_branch_name, is_no_ticket_marker, leading_ticket_id};

/// Result of classifying one commit message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// The verdict
    pub verdict: Verdict,
    /// Ticket the message starts with, if any
    pub ticket_from_message: Option<TicketId>,
    /// Ticket the branch name carries, if any
    pub ticket_from_branch: Option<TicketId>,
}

impl Classification {
    /// Whether the commit may be accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The rejection to show for this classification, if it is not accepted
    #[must_use]
    pub fn rejection(&self, commit_id: &str, branch: &str) -> Option<Rejection> {
        Rejection::for_verdict(self.verdict, commit_id, branch)
    }
}

/// Classify a commit message against the branch it is added to
///
/// Rules, in order:
///
/// 1. The message starts with a ticket id: `Compliant` if the branch carries
///    the same ticket, otherwise `CompliantButMismatched` (including when the
///    branch carries no ticket at all).
/// 2. The message starts with `no-ticket`: `Compliant` if the branch carries
///    no ticket, otherwise `CompliantButMismatched`.
/// 3. Anything else is `NonCompliant`.
///
/// # Examples
///
/// ```
/// use ticketgate::core::models::Verdict;
/// use ticketgate::core::services::classify;
///
/// let c = classify("WHIAD-1564: message", "feature/WHIAD-1564-desc");
/// assert_eq!(c.verdict, Verdict::Compliant);
///
/// let c = classify("No-ticket: cleanup", "main");
/// assert_eq!(c.verdict, Verdict::Compliant);
/// ```
#[must_use]
pub fn classify(commit_message: &str, branch_name: &str) -> Classification {
    let ticket_from_message = leading_ticket_id(commit_message);
    let ticket_from_branch = extract_from_branch_name(branch_name);

    let verdict = match (&ticket_from_message, &ticket_from_branch) {
        (Some(from_message), Some(from_branch)) if from_message == from_branch => {
            Verdict::Compliant
        },
        (Some(_), _) => Verdict::CompliantButMismatched,
        (None, None) if is_no_ticket_marker(commit_message) => Verdict::Compliant,
        (None, Some(_)) if is_no_ticket_marker(commit_message) => Verdict::CompliantButMismatched,
        (None, _) => Verdict::NonCompliant,
    };

    log::debug!(
        "classified commit on {branch_name:?}: {verdict} (message ticket: {}, branch ticket: {})",
        display_ticket(ticket_from_message.as_ref()),
        display_ticket(ticket_from_branch.as_ref()),
    );

    Classification {
        verdict,
        ticket_from_message,
        ticket_from_branch,
    }
}

fn display_ticket(ticket: Option<&TicketId>) -> String {
    ticket.map_or_else(|| "none".to_string(), ToString::to_string)
}
