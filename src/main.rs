//! ticketgate - A git hook gate for ticket references in commit messages
//!
//! Installed as a `commit-msg` hook on developer machines or as a
//! `pre-receive` hook on the server, it rejects commits whose message does
//! not start with the ticket id of the branch they are added to.

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

use std::process::ExitCode;

mod cli;

/// Main entry point for the ticketgate CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            // Fail closed: errors reject the commit or push
            eprintln!("ticketgate: {err:#}");
            ExitCode::from(2)
        },
    }
}
