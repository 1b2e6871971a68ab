// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process retry loop for callers without an external orchestrator.

use std::time::Duration;

use cordon_core::{ExecutionRequest, ExecutionResult};

use crate::invoke::{InvokeError, Invoker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total runs allowed, including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Pause between runs.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, backoff: Duration::ZERO }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts, ..Self::default() }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

/// Re-run `request` while it fails retryably and attempts remain.
///
/// Failures only surface when the request sets `raise_on_failure`; without
/// it the first result is final. A BLOCKED failure is never retried.
pub async fn run_with_retry(
    invoker: &Invoker,
    request: &ExecutionRequest,
    policy: &RetryPolicy,
) -> Result<ExecutionResult, InvokeError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut run = 1;
    loop {
        let err = match invoker.execute_checked(request).await {
            Ok(result) => return Ok(result),
            Err(err) => err,
        };
        if !err.is_retryable() || run >= max_attempts {
            return Err(err);
        }
        tracing::info!(run, max_attempts, error = %err, "retrying command");
        run += 1;
        if !policy.backoff.is_zero() {
            tokio::time::sleep(policy.backoff).await;
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
