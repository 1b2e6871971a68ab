// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution policy: workspace root, allow-list, timeout, and output cap.
//!
//! A `Policy` is built once per caller context and never mutated afterwards;
//! per-request overrides derive a new value instead.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timeout used when a request does not supply one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Independent cap on captured stdout and stderr.
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024;

/// Program-name prefixes allowed by [`Policy::new`].
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] =
    &["ls", "cat", "echo", "git", "python", "pip", "grep", "find", "wc"];

/// Errors constructing a policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("workspace root '{}' is not an absolute path", .0.display())]
    RelativeWorkspace(PathBuf),

    #[error("default timeout must be at least one second")]
    ZeroTimeout,

    #[error("max output bytes must be positive")]
    ZeroOutputCap,

    #[error("invalid policy file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    workspace_root: PathBuf,
    allowed_prefixes: Vec<String>,
    default_timeout_secs: u64,
    max_output_bytes: usize,
}

/// On-disk shape of a policy file. Only the workspace root is required.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    workspace_root: PathBuf,
    allowed_prefixes: Option<Vec<String>>,
    default_timeout_secs: Option<u64>,
    max_output_bytes: Option<usize>,
}

impl Policy {
    /// Policy rooted at `workspace_root` with the default allow-list,
    /// timeout, and output cap.
    pub fn new(workspace_root: impl Into<PathBuf>) -> Result<Self, PolicyError> {
        let workspace_root = workspace_root.into();
        if !workspace_root.is_absolute() {
            return Err(PolicyError::RelativeWorkspace(workspace_root));
        }
        Ok(Self {
            workspace_root,
            allowed_prefixes: DEFAULT_ALLOWED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            default_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        })
    }

    /// Parse a TOML policy file.
    ///
    /// ```toml
    /// workspace_root = "/srv/agent"
    /// allowed_prefixes = ["ls", "git"]
    /// default_timeout_secs = 10
    /// max_output_bytes = 4096
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, PolicyError> {
        let file: PolicyFile = toml::from_str(content)?;
        let mut policy = Self::new(file.workspace_root)?;
        if let Some(prefixes) = file.allowed_prefixes {
            policy = policy.with_allowed_prefixes(prefixes);
        }
        if let Some(secs) = file.default_timeout_secs {
            policy = policy.with_default_timeout_secs(secs)?;
        }
        if let Some(bytes) = file.max_output_bytes {
            policy = policy.with_max_output_bytes(bytes)?;
        }
        Ok(policy)
    }

    /// Replace the allow-list. Order is kept and duplicates dropped.
    ///
    /// Empty prefixes would match every program and are ignored.
    pub fn with_allowed_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_prefixes.clear();
        for prefix in prefixes {
            self = self.allow(prefix);
        }
        self
    }

    /// Append one prefix to the allow-list.
    pub fn allow(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() && !self.allowed_prefixes.contains(&prefix) {
            self.allowed_prefixes.push(prefix);
        }
        self
    }

    pub fn with_default_timeout_secs(mut self, secs: u64) -> Result<Self, PolicyError> {
        if secs == 0 {
            return Err(PolicyError::ZeroTimeout);
        }
        self.default_timeout_secs = secs;
        Ok(self)
    }

    pub fn with_max_output_bytes(mut self, bytes: usize) -> Result<Self, PolicyError> {
        if bytes == 0 {
            return Err(PolicyError::ZeroOutputCap);
        }
        self.max_output_bytes = bytes;
        Ok(self)
    }

    /// Same policy rooted at a different workspace (per-request override).
    pub fn with_workspace_root(&self, root: impl Into<PathBuf>) -> Result<Self, PolicyError> {
        let root = root.into();
        if !root.is_absolute() {
            return Err(PolicyError::RelativeWorkspace(root));
        }
        Ok(Self { workspace_root: root, ..self.clone() })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn allowed_prefixes(&self) -> &[String] {
        &self.allowed_prefixes
    }

    pub fn default_timeout_secs(&self) -> u64 {
        self.default_timeout_secs
    }

    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }

    pub fn max_output_bytes(&self) -> usize {
        self.max_output_bytes
    }

    /// The first allow-list entry that `program` equals or starts with.
    ///
    /// Matching is deliberately by prefix: allowing `git` also allows a
    /// program named `gitk`. Callers wanting exact names must list them.
    pub fn allowed_prefix_for(&self, program: &str) -> Option<&str> {
        self.allowed_prefixes
            .iter()
            .find(|prefix| program.starts_with(prefix.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
