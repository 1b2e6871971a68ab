// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.
//!
//! Flags always win over these; unparseable values are ignored.

use std::path::PathBuf;

/// Log filter directives: CORDON_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var("CORDON_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| "warn".into())
}

/// Workspace root override
pub fn workspace() -> Option<PathBuf> {
    std::env::var_os("CORDON_WORKSPACE").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default timeout override, in seconds
pub fn timeout_secs() -> Option<u64> {
    std::env::var("CORDON_TIMEOUT_SECS").ok().and_then(|s| s.parse::<u64>().ok())
}

/// Per-stream output cap override, in bytes
pub fn max_output_bytes() -> Option<usize> {
    std::env::var("CORDON_MAX_OUTPUT_BYTES").ok().and_then(|s| s.parse::<usize>().ok())
}

/// Path to a TOML policy file
pub fn policy_file() -> Option<PathBuf> {
    std::env::var_os("CORDON_POLICY").filter(|s| !s.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
