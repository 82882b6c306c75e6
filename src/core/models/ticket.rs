//! Ticket identifiers
//!
//! A ticket id is a `PROJECT<sep>NUMBER` token such as `WHIAD-1564`:
//!
//! ```text
//! PROJECT := [A-Za-z0-9_]* [A-Za-z] [A-Za-z0-9_]*
//! SEP     := "-" | "_"
//! NUMBER  := [0-9]+
//! ```
//!
//! PROJECT must contain at least one letter, so `-123` and `123-456` are not
//! ticket ids. Two ids are equal when their projects match case-insensitively
//! and their numbers are identical; the separator style is ignored.
//!
//! # Examples
//!
//! ```
//! use ticketgate::core::models::TicketId;
//!
//! let a = TicketId::parse("whiad_1564").unwrap();
//! let b = TicketId::parse("WHIAD-1564").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "whiad_1564");
//! assert_eq!(a.normalized(), "WHIAD-1564");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Regex source for a ticket id, with named groups `project`, `sep` and `number`
pub const TICKET_PATTERN: &str =
    r"(?P<project>[A-Za-z0-9_]*[A-Za-z][A-Za-z0-9_]*)(?P<sep>[-_])(?P<number>[0-9]+)";

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static EXACT_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TICKET_PATTERN}$")).unwrap());

/// Errors that can occur when parsing a ticket id
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketParseError {
    /// Input was empty
    #[error("empty ticket id")]
    Empty,

    /// Input is not a `PROJECT-NUMBER` token
    #[error("not a ticket id: {0:?} (expected e.g. ABC-123)")]
    Malformed(String),
}

/// A ticket reference extracted from a commit message or branch name
#[derive(Debug, Clone)]
pub struct TicketId {
    project: String,
    separator: char,
    number: String,
}

impl TicketId {
    /// Parse a string that consists of exactly one ticket id
    pub fn parse(s: &str) -> Result<Self, TicketParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TicketParseError::Empty);
        }
        EXACT_TICKET
            .captures(s)
            .map(|caps| Self::from_captures(&caps))
            .ok_or_else(|| TicketParseError::Malformed(s.to_string()))
    }

    /// Build a ticket id from a match of [`TICKET_PATTERN`]
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let group = |name| caps.name(name).map_or("", |m| m.as_str());
        Self {
            project: group("project").to_string(),
            separator: group("sep").chars().next().unwrap_or('-'),
            number: group("number").to_string(),
        }
    }

    /// The project key as written (e.g. `WHIAD`)
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The separator as written, `-` or `_`
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// The ticket number digits as written
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Canonical spelling: upper-case project, `-` separator
    #[must_use]
    pub fn normalized(&self) -> String {
        format!("{}-{}", self.project.to_ascii_uppercase(), self.number)
    }
}

impl PartialEq for TicketId {
    fn eq(&self, other: &Self) -> bool {
        self.project.eq_ignore_ascii_case(&other.project) && self.number == other.number
    }
}

impl Eq for TicketId {}

impl Hash for TicketId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.project, self.separator, self.number)
    }
}

impl std::str::FromStr for TicketId {
    type Err = TicketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TicketId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
