//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Rejections are written to
//! stderr in human mode, which git relays to the pusher.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Rejection, TicketId, Verdict};
use crate::core::services::{Classification, GateOutcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of classifying a single message
#[derive(Debug, Serialize)]
pub struct ClassifyResult {
    /// Branch the message was classified against
    pub branch: String,
    /// The classification
    #[serde(flatten)]
    pub classification: Classification,
    /// Rejection that would be shown, if any
    pub rejection: Option<Rejection>,
}

/// Result of gating one pushed ref
#[derive(Debug, Serialize)]
pub struct RefReport {
    /// Fully qualified ref name
    pub ref_name: String,
    /// What the gate decided
    #[serde(flatten)]
    pub outcome: GateOutcome,
}

/// Result of a whole push (or a single local commit)
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// Whether the push may proceed
    pub accepted: bool,
    /// Per-ref outcomes, in input order
    pub refs: Vec<RefReport>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn verdict_label(verdict: Verdict) -> String {
    match verdict {
        Verdict::Compliant => "COMPLIANT".green().to_string(),
        Verdict::CompliantButMismatched => "MISMATCHED".yellow().to_string(),
        Verdict::NonCompliant => "NON-COMPLIANT".red().to_string(),
    }
}

/// Write a rejection to stderr, where git shows it to the committer
pub fn render_rejection(rejection: &Rejection) {
    eprintln!("{}", rejection.message);
    eprintln!("{}", rejection.detail.bold());
}

impl ClassifyResult {
    /// Classify-and-explain a message for display
    #[must_use]
    pub fn new(branch: &str, classification: Classification, commit_id: &str) -> Self {
        let rejection = classification.rejection(commit_id, branch);
        Self {
            branch: branch.to_string(),
            classification,
            rejection,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let ticket = |t: Option<&TicketId>| {
            t.map_or_else(|| "-".to_string(), ToString::to_string)
        };

        println!("{}", verdict_label(self.classification.verdict));
        println!("  branch:         {}", self.branch);
        println!(
            "  message ticket: {}",
            ticket(self.classification.ticket_from_message.as_ref())
        );
        println!(
            "  branch ticket:  {}",
            ticket(self.classification.ticket_from_branch.as_ref())
        );
        if let Some(rejection) = &self.rejection {
            println!("\n{}", rejection.message);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl GateReport {
    /// Build a report from per-ref outcomes
    #[must_use]
    pub fn new(refs: Vec<RefReport>) -> Self {
        let accepted = refs.iter().all(|r| r.outcome.is_accepted());
        Self { accepted, refs }
    }

    /// The first rejection in the report, if any
    #[must_use]
    pub fn first_rejection(&self) -> Option<&Rejection> {
        self.refs.iter().find_map(|r| match &r.outcome {
            GateOutcome::Rejected { rejection, .. } => Some(rejection),
            GateOutcome::Accepted { .. } => None,
        })
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if let Some(rejection) = self.first_rejection() {
            render_rejection(rejection);
            return;
        }
        for r in &self.refs {
            if let GateOutcome::Accepted { commits_checked } = r.outcome {
                log::info!("{}: {commits_checked} commit(s) checked", r.ref_name);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
