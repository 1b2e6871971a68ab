// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation wrapper: attempt counting, per-request overrides, and the
//! failure signal consumed by retry layers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use cordon_core::{ExecStatus, ExecutionRequest, ExecutionResult, InvocationId, Policy};
use parking_lot::Mutex;
use thiserror::Error;

use crate::error::EngineError;
use crate::{classify, runner, validate};

/// Runs per invocation id, for the life of the process.
#[derive(Debug, Default)]
pub struct AttemptCounter {
    counts: Mutex<HashMap<InvocationId, u32>>,
}

impl AttemptCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more attempt for `id` and return the new count.
    pub fn next(&self, id: &InvocationId) -> u32 {
        let mut counts = self.counts.lock();
        let count = counts.entry(id.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Attempts recorded so far; zero for an unseen id.
    pub fn get(&self, id: &str) -> u32 {
        self.counts.lock().get(id).copied().unwrap_or(0)
    }

    pub fn reset(&self, id: &str) {
        self.counts.lock().remove(id);
    }
}

/// A non-success outcome surfaced as an error because the request asked
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ExecFailure {
    pub kind: ExecStatus,
    pub message: String,
    /// Set for BLOCKED: the same command will be rejected again.
    pub non_retryable: bool,
    pub result: ExecutionResult,
}

impl ExecFailure {
    pub fn new(result: ExecutionResult) -> Self {
        Self {
            kind: result.status,
            message: result.reason.clone(),
            non_retryable: result.status == ExecStatus::Blocked,
            result,
        }
    }

    /// Full result as a JSON value, for error details.
    pub fn details_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.result).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Failed(Box<ExecFailure>),
}

impl InvokeError {
    /// Whether running the same request again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            InvokeError::Engine(_) => true,
            InvokeError::Failed(failure) => !failure.non_retryable,
        }
    }

    pub fn failure(&self) -> Option<&ExecFailure> {
        match self {
            InvokeError::Failed(failure) => Some(&**failure),
            InvokeError::Engine(_) => None,
        }
    }
}

/// Executes requests under one base policy.
#[derive(Debug, Clone)]
pub struct Invoker {
    policy: Policy,
    attempts: Arc<AttemptCounter>,
}

impl Invoker {
    pub fn new(policy: Policy) -> Self {
        Self::with_counter(policy, Arc::new(AttemptCounter::new()))
    }

    /// Share `attempts` with other invokers.
    pub fn with_counter(policy: Policy, attempts: Arc<AttemptCounter>) -> Self {
        Self { policy, attempts }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn attempts(&self) -> &Arc<AttemptCounter> {
        &self.attempts
    }

    /// Run one request to a result.
    ///
    /// Policy rejections and failed processes are results, not errors. Only
    /// failures of the host itself (spawn, wait, bad override) are `Err`.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, EngineError> {
        let key = request.attempt_key();
        let attempt = self.attempts.next(&key);
        let policy = self.effective_policy(request)?;
        let timeout_secs = request.effective_timeout_secs(&policy);

        tracing::info!(
            invocation_id = %key,
            attempt,
            command = %request.command,
            workspace = %policy.workspace_root().display(),
            timeout_secs,
            "executing command"
        );

        let validated = match validate::validate(&request.command, &policy) {
            Ok(validated) => validated,
            Err(rejection) => {
                tracing::warn!(invocation_id = %key, attempt, reason = %rejection, "command blocked");
                return Ok(classify::blocked(&request.command, &rejection, attempt));
            }
        };

        let raw = runner::run(
            &validated,
            Duration::from_secs(timeout_secs),
            policy.max_output_bytes(),
        )
        .await?;
        let result =
            classify::classify(&request.command, raw, timeout_secs, policy.max_output_bytes(), attempt);

        tracing::info!(
            invocation_id = %key,
            attempt,
            status = %result.status,
            exit_code = ?result.exit_code,
            duration_ms = result.duration_ms,
            "command finished"
        );
        Ok(result)
    }

    /// Like [`Invoker::execute`], but a non-success result becomes
    /// [`InvokeError::Failed`] when the request sets `raise_on_failure`.
    pub async fn execute_checked(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, InvokeError> {
        let result = self.execute(request).await?;
        if request.raise_on_failure && !result.is_success() {
            return Err(InvokeError::Failed(Box::new(ExecFailure::new(result))));
        }
        Ok(result)
    }

    fn effective_policy(&self, request: &ExecutionRequest) -> Result<Policy, EngineError> {
        let Some(dir) = &request.workspace_dir else {
            return Ok(self.policy.clone());
        };
        let root = std::path::absolute(dir)
            .map_err(|source| EngineError::Workspace { path: dir.clone(), source })?;
        Ok(self.policy.with_workspace_root(root)?)
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;
