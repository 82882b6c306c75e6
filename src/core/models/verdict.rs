//! Commit message verdicts
//!
//! Policy distinguishes a malformed message (rejected outright) from a
//! well-formed one that references the wrong ticket (rejected with a
//! corrective message).

use serde::Serialize;

/// Outcome of classifying one commit message against its branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The message references the branch's ticket, or validly opts out
    Compliant,
    /// The message is well-formed but its ticket does not match the branch
    CompliantButMismatched,
    /// The message has neither a ticket reference nor an opt-out at its start
    NonCompliant,
}

impl Verdict {
    /// Whether the commit may be accepted
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Compliant)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compliant => write!(f, "compliant"),
            Self::CompliantButMismatched => write!(f, "compliant_but_mismatched"),
            Self::NonCompliant => write!(f, "non_compliant"),
        }
    }
}
