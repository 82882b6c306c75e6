//! Errors raised by the host adapters
//!
//! Classification itself never fails; these cover reading the push,
//! talking to git and loading configuration.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::models::RefUpdateParseError;

/// Errors that can occur while gating a push
#[derive(Debug, Error)]
pub enum GateError {
    /// Git operation failed
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// IO error reading hook input or writing hooks
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A `pre-receive` stdin line was not `<old> <new> <ref>`
    #[error(transparent)]
    RefUpdate(#[from] RefUpdateParseError),

    /// Not inside a git repository
    #[error("not a git repository: {0}")]
    NotARepository(String),
}
