//! Check a local commit message (commit-msg hook)

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use ticketgate::adapters::git::{GitRepository, cleanup_message};
use ticketgate::config::Config;
use ticketgate::core::ports::VersionControl;
use ticketgate::core::services::classify;
use ticketgate::output::{ClassifyResult, OutputMode, render_rejection};

/// Shown in place of a commit id, the commit does not exist yet
const PENDING_COMMIT: &str = "(new commit)";

/// Check the message in `commit_msg_file` against the branch being committed to
pub fn commit_msg(
    commit_msg_file: &Path,
    branch: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let raw = fs::read_to_string(commit_msg_file)
        .with_context(|| format!("Failed to read {}", commit_msg_file.display()))?;
    let repo = GitRepository::open_from_env()?;
    let message = cleanup_message(&raw, repo.message_cleanup(), repo.comment_char());
    let policy = Config::load_from(&repo.config_dir()?)?.policy();

    if policy.skip_merge_commits && repo.is_merging() {
        log::debug!("merge commit, skipping message check");
        return Ok(ExitCode::SUCCESS);
    }

    let branch = match branch {
        Some(b) => b.to_string(),
        None => match repo.current_branch()? {
            Some(b) => b,
            None => {
                log::warn!("HEAD is detached, skipping ticket check");
                return Ok(ExitCode::SUCCESS);
            },
        },
    };

    let result = ClassifyResult::new(&branch, classify(&message, &branch), PENDING_COMMIT);
    let accepted = result.rejection.is_none();

    match (mode, &result.rejection) {
        (OutputMode::Json, _) => result.render(mode),
        (OutputMode::Human, Some(rejection)) => render_rejection(rejection),
        (OutputMode::Human, None) => {
            log::debug!("commit message accepted on {branch}");
        },
    }

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
