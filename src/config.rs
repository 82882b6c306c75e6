//! Gate configuration
//!
//! Read from `.ticketgate.toml` in the work tree root, or in the git
//! directory of a bare (server-side) repository. A missing file means
//! defaults; a malformed one is an error.
//!
//! ```toml
//! [gate]
//! max_commits = 10
//! skip_merge_commits = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{DEFAULT_MAX_COMMITS, GatePolicy};

/// Configuration filename
pub const CONFIG_FILE: &str = ".ticketgate.toml";

/// Template written by `ticketgate init`
pub const DEFAULT_CONFIG: &str = r"# ticketgate configuration

[gate]
# Commits inspected per pushed branch (0 = no limit)
max_commits = 10

# Let merge commits through without checking their message
skip_merge_commits = false
";

/// Errors loading or saving the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read or written
    #[error("cannot access {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: Box<toml::de::Error>,
    },
}

/// Top-level configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gate settings
    #[serde(default)]
    pub gate: GateConfig,
}

/// `[gate]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Commits inspected per pushed branch (0 = no limit)
    #[serde(default = "default_max_commits")]
    pub max_commits: usize,
    /// Skip merge commits
    #[serde(default)]
    pub skip_merge_commits: bool,
}

const fn default_max_commits() -> usize {
    DEFAULT_MAX_COMMITS
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            max_commits: default_max_commits(),
            skip_merge_commits: false,
        }
    }
}

impl Config {
    /// Path of the config file inside `dir`
    #[must_use]
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load the config file from `dir`, or defaults if there is none
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(dir);
        if !path.exists() {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source: Box::new(source),
        })?;
        log::debug!("loaded {}", path.display());
        Ok(config)
    }

    /// Write the commented default template into `dir`
    ///
    /// Returns `false` without touching anything if a config file exists.
    pub fn write_default(dir: &Path) -> Result<bool, ConfigError> {
        let path = Self::path_in(dir);
        if path.exists() {
            return Ok(false);
        }
        fs::write(&path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io { path, source })?;
        Ok(true)
    }

    /// The gate policy this configuration describes
    #[must_use]
    pub const fn policy(&self) -> GatePolicy {
        GatePolicy {
            max_commits: self.gate.max_commits,
            skip_merge_commits: self.gate.skip_merge_commits,
        }
    }
}
