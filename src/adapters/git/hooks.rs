//! Git hooks installation
//!
//! This module handles installation of git hooks for ticketgate:
//! - commit-msg: Checks each local commit message against the current branch
//! - pre-receive: Checks every commit a push adds (server side)
//!
//! Existing hook scripts are kept; the ticketgate section is appended to
//! them and can be removed again without touching the rest.

use std::fs;
use std::path::Path;

/// The hooks ticketgate can install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Client-side hook, run for every local commit
    CommitMsg,
    /// Server-side hook, run once per push
    PreReceive,
}

impl HookKind {
    /// Every hook ticketgate knows about
    pub const ALL: [Self; 2] = [Self::CommitMsg, Self::PreReceive];

    /// Hook file name
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CommitMsg => "commit-msg",
            Self::PreReceive => "pre-receive",
        }
    }

    /// First line of the section ticketgate adds to the hook
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::CommitMsg => "# ticketgate commit-msg hook",
            Self::PreReceive => "# ticketgate pre-receive hook",
        }
    }

    /// Script section ticketgate adds to the hook, starting with [`Self::header`]
    #[must_use]
    pub const fn script(self) -> &'static str {
        match self {
            Self::CommitMsg => {
                r#"# ticketgate commit-msg hook
# Rejects commit messages that do not reference the branch's ticket
ticketgate commit-msg "$1" || exit 1
"#
            },
            Self::PreReceive => {
                r"# ticketgate pre-receive hook
# Rejects pushes containing commits that do not reference the branch's ticket
ticketgate pre-receive || exit 1
"
            },
        }
    }
}

/// Install one hook into `hooks_dir`
///
/// Returns `false` if the hook already contains a ticketgate section.
///
/// # Errors
///
/// Returns an error if the hook cannot be read or written.
pub fn install_hook(hooks_dir: &Path, kind: HookKind) -> std::io::Result<bool> {
    fs::create_dir_all(hooks_dir)?;

    let hook_path = hooks_dir.join(kind.file_name());
    if hook_path.exists() {
        let existing = fs::read_to_string(&hook_path)?;
        if has_ticketgate_section(&existing) {
            return Ok(false); // Already installed
        }
        if has_top_level_exit(&existing) {
            log::warn!(
                "{} exits before its end; the appended ticketgate check will not run",
                hook_path.display()
            );
        }
        // Append to existing hook
        let new_content = format!("{}\n\n{}", existing.trim_end(), kind.script());
        fs::write(&hook_path, new_content)?;
    } else {
        fs::write(&hook_path, format!("#!/bin/sh\n{}", kind.script()))?;
    }

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    log::debug!("installed {} hook in {}", kind.file_name(), hooks_dir.display());
    Ok(true)
}

/// Remove ticketgate sections from every known hook in `hooks_dir`
///
/// A hook left with nothing but a shebang is deleted. A missing hooks
/// directory is not an error.
///
/// # Errors
///
/// Returns an error if a hook cannot be read, written or removed.
pub fn remove_ticketgate_hooks(hooks_dir: &Path) -> std::io::Result<()> {
    for kind in HookKind::ALL {
        let hook_path = hooks_dir.join(kind.file_name());
        if !hook_path.exists() {
            continue;
        }

        let existing = fs::read_to_string(&hook_path)?;
        if !has_ticketgate_section(&existing) {
            continue;
        }

        let remaining = remove_ticketgate_sections(&existing);
        let only_shebang = remaining.lines().all(|l| l.trim().is_empty() || l.starts_with("#!"));
        if only_shebang {
            fs::remove_file(&hook_path)?;
        } else {
            fs::write(&hook_path, remaining)?;
        }
    }
    Ok(())
}

fn is_header(line: &str) -> bool {
    HookKind::ALL.iter().any(|kind| line.trim_end() == kind.header())
}

fn has_ticketgate_section(content: &str) -> bool {
    content.lines().any(is_header)
}

/// Whether a hook script unconditionally ends before its last line
///
/// Looks for an unindented `exit` or `exec` command, after which anything
/// appended to the script is never reached.
#[must_use]
pub fn has_top_level_exit(content: &str) -> bool {
    content.lines().any(|line| {
        let mut words = line.split(|c: char| c.is_whitespace() || c == ';');
        !line.starts_with(char::is_whitespace) && matches!(words.next(), Some("exit" | "exec"))
    })
}

/// Strip ticketgate sections out of a hook script
///
/// A section starts at a header line written by [`HookKind::script`] and
/// runs up to the next blank line. Other lines are kept as they are, even
/// when they mention ticketgate.
#[must_use]
pub fn remove_ticketgate_sections(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_section = false;

    for line in content.lines() {
        if is_header(line) {
            in_section = true;
            continue;
        }
        if in_section {
            // The blank line closing the section goes with it
            in_section = !line.trim().is_empty();
            continue;
        }
        kept.push(line);
    }

    while kept.last().is_some_and(|l| l.trim().is_empty()) {
        kept.pop();
    }

    if kept.is_empty() {
        String::new()
    } else {
        format!("{}\n", kept.join("\n"))
    }
}
