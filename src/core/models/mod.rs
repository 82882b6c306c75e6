//! Domain models for ticketgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`TicketId`] - A `PROJECT-NUMBER` ticket reference
//! - [`Verdict`] - Outcome of classifying a commit message
//! - [`Rejection`] - Message shown when a commit is refused
//! - [`RefUpdate`] / [`CommitRecord`] - What a push hands to the gate

mod commit;
mod rejection;
mod ticket;
mod verdict;

pub use commit::{CommitRecord, RefUpdate, RefUpdateParseError, ZERO_OID};
pub use rejection::{EXAMPLES, MISMATCH_MESSAGE, NON_COMPLIANT_MESSAGE, Rejection};
pub(crate) use ticket::TICKET_PATTERN;
pub use ticket::{TicketId, TicketParseError};
pub use verdict::Verdict;
