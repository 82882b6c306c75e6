//! Core domain logic for ticketgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TicketId`, `Verdict`, `Rejection`, `RefUpdate`)
//! - `services/` - Extraction, classification and the fail-fast gate loop
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
