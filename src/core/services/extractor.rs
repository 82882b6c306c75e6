//! Ticket reference extraction
//!
//! Finds `PROJECT-NUMBER` tokens (see [`TicketId`]) in commit messages and
//! branch names, and recognises the `no-ticket` opt-out marker.
//!
//! Because the digit run of a match is always maximal, a match is followed by
//! either a non-digit (`:`, whitespace, `-desc`, ...) or the end of the text.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{TICKET_PATTERN, TicketId};

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static ANY_TICKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(TICKET_PATTERN).unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static LEADING_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TICKET_PATTERN}")).unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static NO_TICKET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:no-ticket)(?:[^0-9]|$)").unwrap());

// Optional single `group/` namespace, then the ticket
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BRANCH_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:[A-Za-z0-9_]+/)?{TICKET_PATTERN}")).unwrap());

/// Return the first ticket id found anywhere in `text`
#[must_use]
pub fn extract_ticket_id(text: &str) -> Option<TicketId> {
    ANY_TICKET.captures(text).map(|caps| TicketId::from_captures(&caps))
}

/// Return the ticket id `text` starts with, if any
#[must_use]
pub fn leading_ticket_id(text: &str) -> Option<TicketId> {
    LEADING_TICKET.captures(text).map(|caps| TicketId::from_captures(&caps))
}

/// Whether `text` starts with the case-insensitive `no-ticket` opt-out
///
/// The marker must be followed by a non-digit or the end of the text, so
/// `No-ticket: cleanup` qualifies and `no-ticket2` does not.
#[must_use]
pub fn is_no_ticket_marker(text: &str) -> bool {
    NO_TICKET_MARKER.is_match(text)
}

/// Return the ticket id a branch name carries
///
/// The id is expected at the start of the name or right after a single
/// `group/` namespace (`feature/ABC-12-desc`). Failing that, the first
/// ticket-shaped token anywhere in the name is used.
#[must_use]
pub fn extract_from_branch_name(branch_name: &str) -> Option<TicketId> {
    BRANCH_TICKET
        .captures(branch_name)
        .map(|caps| TicketId::from_captures(&caps))
        .or_else(|| extract_ticket_id(branch_name))
}
