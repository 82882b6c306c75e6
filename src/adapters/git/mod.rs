//! Git integration adapter
//!
//! Implements the `VersionControl` and `CommitSource` ports with `git2`.
//!
//! - [`hooks`] - Git hooks installation

pub mod hooks;

use std::fmt;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, Oid, Repository, RepositoryState, Sort};

use crate::core::models::{CommitRecord, RefUpdate};
use crate::core::ports::{CommitSource, VersionControl};
use crate::error::GateError;

pub use hooks::{
    HookKind, has_top_level_exit, install_hook, remove_ticketgate_hooks, remove_ticketgate_sections,
};

const BRANCH_PREFIX: &str = "refs/heads/";

const DEFAULT_COMMENT_CHAR: char = '#';

/// Git-based implementation of the ports
pub struct GitRepository {
    repo: Repository,
}

impl fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitRepository").field("path", &self.repo.path()).finish()
    }
}

impl GitRepository {
    /// Open the repository git hooks run in
    ///
    /// Honours `GIT_DIR` and the object directory variables git sets while
    /// a push is quarantined, falling back to discovery from the current
    /// directory.
    pub fn open_from_env() -> Result<Self, GateError> {
        Repository::open_from_env()
            .map(|repo| Self { repo })
            .map_err(|e| GateError::NotARepository(e.message().to_string()))
    }

    /// Discover the repository containing `path`
    pub fn discover(path: &Path) -> Result<Self, GateError> {
        Repository::discover(path)
            .map(|repo| Self { repo })
            .map_err(|_| GateError::NotARepository(path.display().to_string()))
    }

    /// Whether a merge is being concluded (`MERGE_HEAD` present)
    #[must_use]
    pub fn is_merging(&self) -> bool {
        self.repo.state() == RepositoryState::Merge
    }

    fn config_string(&self, key: &str) -> Option<String> {
        self.repo.config().and_then(|config| config.get_string(key)).ok()
    }

    /// The character git starts comment lines of message files with
    ///
    /// Reads `core.commentChar`; unset, `auto`, or not a single character
    /// falls back to `#`.
    #[must_use]
    pub fn comment_char(&self) -> char {
        parse_comment_char(self.config_string("core.commentChar").as_deref())
    }

    /// How git will clean up the message of the commit being made (`commit.cleanup`)
    #[must_use]
    pub fn message_cleanup(&self) -> MessageCleanup {
        MessageCleanup::from_config(self.config_string("commit.cleanup").as_deref())
    }

    /// Read a commit's message
    pub fn commit_record(&self, oid: Oid) -> Result<CommitRecord, GateError> {
        let commit = self.repo.find_commit(oid)?;
        Ok(CommitRecord {
            id: oid.to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            parent_count: commit.parent_count(),
        })
    }
}

fn parse_comment_char(configured: Option<&str>) -> char {
    let mut chars = configured.unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => c,
        _ => DEFAULT_COMMENT_CHAR,
    }
}

/// Cleanup mode git applies to a commit message before storing it
///
/// `commit.cleanup = default` and an unset key both mean [`Self::Strip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageCleanup {
    /// Drop comment lines and everything below the scissors line
    #[default]
    Strip,
    /// Keep comment lines, cut at the scissors line
    Scissors,
    /// Only trim whitespace and blank edge lines
    Whitespace,
    /// Keep the message exactly as written
    Verbatim,
}

impl MessageCleanup {
    fn from_config(value: Option<&str>) -> Self {
        match value {
            Some("scissors") => Self::Scissors,
            Some("whitespace") => Self::Whitespace,
            Some("verbatim") => Self::Verbatim,
            _ => Self::Strip,
        }
    }
}

/// Clean a commit message file the way git does before committing
///
/// Depending on `cleanup`, drops lines starting with `comment_char` and
/// everything below a scissors line, then trailing whitespace and leading
/// and trailing blank lines.
#[must_use]
pub fn cleanup_message(raw: &str, cleanup: MessageCleanup, comment_char: char) -> String {
    if cleanup == MessageCleanup::Verbatim {
        return raw.to_string();
    }
    let cut_at_scissors = matches!(cleanup, MessageCleanup::Strip | MessageCleanup::Scissors);
    let strip_comments = cleanup == MessageCleanup::Strip;

    let mut lines: Vec<&str> = raw
        .lines()
        .take_while(|l| !(cut_at_scissors && is_scissors_line(l, comment_char)))
        .filter(|l| !(strip_comments && l.starts_with(comment_char)))
        .map(str::trim_end)
        .skip_while(|l| l.is_empty())
        .collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn is_scissors_line(line: &str, comment_char: char) -> bool {
    line.strip_prefix(comment_char)
        .is_some_and(|rest| rest.starts_with(' ') && rest.contains(" >8 "))
}

impl VersionControl for GitRepository {
    fn current_branch(&self) -> Result<Option<String>, GateError> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(String::from)),
            Ok(_) => Ok(None), // Detached HEAD
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // No commits yet: HEAD still names the branch being born
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix(BRANCH_PREFIX))
                    .map(String::from))
            },
            Err(e) => Err(e.into()),
        }
    }

    fn hooks_dir(&self) -> Result<PathBuf, GateError> {
        let base = self.repo.workdir().unwrap_or_else(|| self.repo.path());
        let configured = self.repo.config()?.get_path("core.hooksPath").ok();
        Ok(configured.map_or_else(|| self.repo.path().join("hooks"), |p| base.join(p)))
    }

    fn config_dir(&self) -> Result<PathBuf, GateError> {
        Ok(self.repo.workdir().unwrap_or_else(|| self.repo.path()).to_path_buf())
    }
}

impl CommitSource for GitRepository {
    fn commits_added(&self, update: &RefUpdate, limit: usize) -> Result<Vec<CommitRecord>, GateError> {
        if update.is_delete() {
            return Ok(Vec::new());
        }

        let new = Oid::from_str(&update.new)?;
        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        walk.push(new)?;

        // Only commits no existing branch or tag already has are new to the repository
        walk.hide_glob("refs/heads/*")?;
        walk.hide_glob("refs/tags/*")?;
        if !update.is_create() {
            let old = Oid::from_str(&update.old)?;
            if self.repo.find_commit(old).is_ok() {
                walk.hide(old)?;
            }
        }

        let mut commits = Vec::new();
        for oid in walk.take(limit) {
            commits.push(self.commit_record(oid?)?);
        }
        log::debug!("{} adds {} commit(s) (limit {limit})", update.ref_name, commits.len());
        Ok(commits)
    }
}
