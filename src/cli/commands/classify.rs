//! Classify a message without enforcing anything

use std::process::ExitCode;

use ticketgate::adapters::git::GitRepository;
use ticketgate::core::ports::VersionControl;
use ticketgate::core::services;
use ticketgate::output::{ClassifyResult, OutputMode};

/// Print how `message` classifies against `branch` (or the current branch)
pub fn classify(message: &str, branch: Option<&str>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let branch = match branch {
        Some(b) => b.to_string(),
        None => {
            let repo = GitRepository::open_from_env()?;
            repo.current_branch()?
                .ok_or_else(|| anyhow::anyhow!("HEAD is detached; pass --branch"))?
        },
    };

    let classification = services::classify(message, &branch);
    ClassifyResult::new(&branch, classification, "(message)").render(mode);

    Ok(ExitCode::SUCCESS)
}
