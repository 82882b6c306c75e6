//! ticketgate - A git hook gate for ticket references in commit messages
//!
//! This library classifies commit messages against the branch they are
//! added to: a message must start with the branch's ticket id (`ABC-123`)
//! or, on branches without a ticket, with the `no-ticket` opt-out.
//!
//! The decision logic lives in [`core`] and is pure; [`adapters`] connect it
//! to git repositories and hook scripts.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
