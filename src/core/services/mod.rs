//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`extractor`] - Find ticket ids in messages and branch names
//! - [`classifier`] - Classify a commit message against its branch
//! - [`gate`] - Evaluate the commits of one ref update, fail-fast

pub mod classifier;
pub mod extractor;
pub mod gate;

pub use classifier::{Classification, classify};
pub use extractor::{
    extract_from_branch_name, extract_ticket_id, is_no_ticket_marker, leading_ticket_id,
};
pub use gate::{DEFAULT_MAX_COMMITS, GateOutcome, GatePolicy, evaluate, gate_ref_updates};
