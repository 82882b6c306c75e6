//! Version control system port
//!
//! Defines the interface for the working-copy side of the gate.

use std::path::PathBuf;

use crate::error::GateError;

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// Get the current branch name (`None` on a detached HEAD)
    fn current_branch(&self) -> Result<Option<String>, GateError>;

    /// Directory hook scripts are installed into
    fn hooks_dir(&self) -> Result<PathBuf, GateError>;

    /// Directory the gate configuration file lives in
    ///
    /// The work tree root, or the git directory of a bare repository.
    fn config_dir(&self) -> Result<PathBuf, GateError>;
}
