//! Commit source port
//!
//! Defines how the gate learns which commits a ref update adds.

use crate::core::models::{CommitRecord, RefUpdate};
use crate::error::GateError;

/// Source of the commits a push would add to the repository
///
/// Implementations talk to the hosting repository (git objects, a server
/// API, ...). The gate only needs the messages, oldest first.
pub trait CommitSource {
    /// Commits `update` adds that no existing branch or tag already contains
    ///
    /// At most `limit` commits are returned, oldest first. Deletions yield
    /// no commits.
    fn commits_added(&self, update: &RefUpdate, limit: usize) -> Result<Vec<CommitRecord>, GateError>;
}
