//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and the hosting repository.
//!
//! Implementations live in the `adapters` module.

mod commit_source;
mod vcs;

pub use commit_source::CommitSource;
pub use vcs::VersionControl;
