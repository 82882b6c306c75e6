//! Ref updates and the commits they add
//!
//! A `pre-receive` hook is fed one line per updated ref:
//!
//! ```text
//! <old-oid> <new-oid> <ref-name>
//! ```
//!
//! An all-zero oid means the ref is being created (old) or deleted (new).

use serde::Serialize;
use thiserror::Error;

/// The all-zero object id git uses for "no object"
pub const ZERO_OID: &str = "0000000000000000000000000000000000000000";

const BRANCH_PREFIX: &str = "refs/heads/";

/// Error for a malformed `pre-receive` input line
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed ref update line: {0:?} (expected \"<old> <new> <ref>\")")]
pub struct RefUpdateParseError(pub String);

/// One ref being moved by a push
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefUpdate {
    /// Previous object id (all zeros on creation)
    pub old: String,
    /// New object id (all zeros on deletion)
    pub new: String,
    /// Fully qualified ref name, e.g. `refs/heads/feature/ABC-1`
    pub ref_name: String,
}

impl RefUpdate {
    /// Parse one line of `pre-receive` stdin
    pub fn parse_line(line: &str) -> Result<Self, RefUpdateParseError> {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(old), Some(new), Some(ref_name), None) => Ok(Self {
                old: old.to_string(),
                new: new.to_string(),
                ref_name: ref_name.to_string(),
            }),
            _ => Err(RefUpdateParseError(line.to_string())),
        }
    }

    /// The ref is being created
    #[must_use]
    pub fn is_create(&self) -> bool {
        is_zero_oid(&self.old)
    }

    /// The ref is being deleted
    #[must_use]
    pub fn is_delete(&self) -> bool {
        is_zero_oid(&self.new)
    }

    /// Branch display name (`feature/ABC-1`), or `None` for non-branch refs
    #[must_use]
    pub fn branch_name(&self) -> Option<&str> {
        self.ref_name.strip_prefix(BRANCH_PREFIX)
    }
}

fn is_zero_oid(oid: &str) -> bool {
    !oid.is_empty() && oid.bytes().all(|b| b == b'0')
}

/// A commit about to be added to the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Full object id
    pub id: String,
    /// Raw commit message
    pub message: String,
    /// Number of parents (more than one for merges)
    #[serde(skip)]
    pub parent_count: usize,
}

impl CommitRecord {
    /// Create a record for a single-parent commit
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            parent_count: 1,
        }
    }

    /// Whether this is a merge commit
    #[must_use]
    pub const fn is_merge(&self) -> bool {
        self.parent_count > 1
    }
}
