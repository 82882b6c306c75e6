//! Install ticketgate in a repository

use std::process::ExitCode;

use ticketgate::adapters::git::{GitRepository, HookKind, install_hook, remove_ticketgate_hooks};
use ticketgate::config::{CONFIG_FILE, Config};
use ticketgate::core::ports::VersionControl;
use ticketgate::output::{OperationResult, OutputMode};

/// Install the commit-msg hook (or pre-receive with `server`) and a default config
pub fn init(force: bool, server: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let repo = GitRepository::discover(&std::env::current_dir()?)?;
    let hooks_dir = repo.hooks_dir()?;
    let kind = if server {
        HookKind::PreReceive
    } else {
        HookKind::CommitMsg
    };

    let mut lines = Vec::new();

    if force {
        remove_ticketgate_hooks(&hooks_dir)?;
        lines.push("Removed existing ticketgate hook sections".to_string());
    }

    if Config::write_default(&repo.config_dir()?)? {
        lines.push(format!("Created {CONFIG_FILE}"));
    } else {
        lines.push(format!("Kept existing {CONFIG_FILE}"));
    }

    if install_hook(&hooks_dir, kind)? {
        lines.push(format!("Installed {} hook", kind.file_name()));
    } else {
        lines.push(format!("{} hook already installed (use --force to reinstall)", kind.file_name()));
    }

    OperationResult {
        success: true,
        message: lines.join("\n"),
    }
    .render(mode);

    Ok(ExitCode::SUCCESS)
}
