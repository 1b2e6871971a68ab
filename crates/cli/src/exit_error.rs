// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use cordon_core::ExecStatus;

/// Command ran and failed, or timed out.
pub const EXIT_FAILED: i32 = 1;
/// Command was rejected by policy.
pub const EXIT_BLOCKED: i32 = 2;
/// Cordon itself could not do its job: bad flags, bad config, spawn errors.
pub const EXIT_INTERNAL: i32 = 3;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` without printing anything further.
    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }

    /// Exit code reporting `status`; `None` for success.
    pub fn for_status(status: ExecStatus) -> Option<Self> {
        match status {
            ExecStatus::Success => None,
            ExecStatus::Blocked => Some(Self::silent(EXIT_BLOCKED)),
            ExecStatus::Timeout | ExecStatus::Error => Some(Self::silent(EXIT_FAILED)),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
