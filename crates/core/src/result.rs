// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal execution status and the structured result record.

use serde::{Deserialize, Serialize};

/// Terminal status of one invocation. Each invocation reaches exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecStatus {
    /// Process exited naturally with code 0.
    Success,
    /// The validator rejected the command; nothing was spawned.
    Blocked,
    /// The timeout fired and the process group was killed.
    Timeout,
    /// Non-zero exit, death by signal, or the program could not be spawned.
    Error,
}

crate::simple_display! {
    ExecStatus {
        Success => "SUCCESS",
        Blocked => "BLOCKED",
        Timeout => "TIMEOUT",
        Error => "ERROR",
    }
}

impl ExecStatus {
    pub fn is_success(self) -> bool {
        matches!(self, ExecStatus::Success)
    }

    /// How an external retry layer should treat this outcome.
    pub fn retry_class(self) -> RetryClass {
        match self {
            ExecStatus::Success => RetryClass::NotNeeded,
            ExecStatus::Blocked => RetryClass::NonRetryable,
            ExecStatus::Timeout | ExecStatus::Error => RetryClass::Retryable,
        }
    }
}

/// Retry eligibility derived from an [`ExecStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryClass {
    NotNeeded,
    Retryable,
    /// Retrying cannot change the outcome.
    NonRetryable,
}

crate::simple_display! {
    RetryClass {
        NotNeeded => "not_needed",
        Retryable => "retryable",
        NonRetryable => "non_retryable",
    }
}

/// The sole output of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// The raw command as requested.
    pub command: String,
    pub status: ExecStatus,
    /// Absent for BLOCKED, TIMEOUT, spawn failures, and deaths by signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub stdout_truncated: bool,
    pub stderr_truncated: bool,
    pub timed_out: bool,
    /// Wall-clock time spent running the process; zero when nothing ran.
    pub duration_ms: u64,
    /// Human-readable explanation, always non-empty.
    pub reason: String,
    /// Set whenever a process was spawned.
    pub pid: Option<u32>,
    /// 1-based count of runs for this invocation id.
    pub attempt: u32,
}

impl ExecutionResult {
    /// Result for a command rejected before anything was spawned.
    pub fn blocked(command: impl Into<String>, reason: impl Into<String>, attempt: u32) -> Self {
        Self {
            command: command.into(),
            status: ExecStatus::Blocked,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            stdout_truncated: false,
            stderr_truncated: false,
            timed_out: false,
            duration_ms: 0,
            reason: reason.into(),
            pid: None,
            attempt,
        }
    }

    pub fn retry_class(&self) -> RetryClass {
        self.status.retry_class()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

crate::builder! {
    pub struct ExecutionResultBuilder => ExecutionResult {
        into {
            command: String = "ls",
            stdout: String = "",
            stderr: String = "",
            reason: String = "Command completed successfully",
        }
        set {
            status: ExecStatus = ExecStatus::Success,
            stdout_truncated: bool = false,
            stderr_truncated: bool = false,
            timed_out: bool = false,
            duration_ms: u64 = 1,
            attempt: u32 = 1,
        }
        option {
            exit_code: i32 = Some(0),
            pid: u32 = Some(4242),
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
