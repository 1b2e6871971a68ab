// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Policy flags shared by every command.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use cordon_core::Policy;

use crate::env;

#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Workspace root commands are confined to [env: CORDON_WORKSPACE]
    /// [default: current directory]
    #[arg(long, short = 'w', value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Timeout in seconds [env: CORDON_TIMEOUT_SECS] [default: 30]
    #[arg(long, short = 't', value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Allow an extra program prefix (repeatable)
    #[arg(long = "allow", value_name = "PREFIX")]
    pub allow: Vec<String>,

    /// TOML policy file [env: CORDON_POLICY]
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Cap on captured stdout and stderr, each [env: CORDON_MAX_OUTPUT_BYTES]
    /// [default: 10240]
    #[arg(long, value_name = "BYTES")]
    pub max_output: Option<usize>,
}

impl PolicyArgs {
    /// Build the effective policy: flags > environment > policy file >
    /// defaults.
    pub fn resolve(&self) -> anyhow::Result<Policy> {
        let mut policy = match self.policy.clone().or_else(env::policy_file) {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read policy file {}", path.display()))?;
                Policy::from_toml_str(&content)
                    .with_context(|| format!("invalid policy file {}", path.display()))?
            }
            None => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                Policy::new(cwd)?
            }
        };

        if let Some(dir) = self.workspace.clone().or_else(env::workspace) {
            let root = std::path::absolute(&dir)
                .with_context(|| format!("invalid workspace {}", dir.display()))?;
            policy = policy.with_workspace_root(root)?;
        }
        if let Some(secs) = self.timeout.or_else(env::timeout_secs) {
            policy = policy.with_default_timeout_secs(secs)?;
        }
        if let Some(bytes) = self.max_output.or_else(env::max_output_bytes) {
            policy = policy.with_max_output_bytes(bytes)?;
        }
        for prefix in &self.allow {
            policy = policy.allow(prefix.as_str());
        }
        Ok(policy)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
