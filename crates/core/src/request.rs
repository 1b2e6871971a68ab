// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-call execution request.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::id::InvocationId;
use crate::policy::Policy;

/// One command to run. Created per call and discarded once its result exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Raw command, split with shell quoting rules but never run by a shell.
    pub command: String,
    /// Overrides the policy workspace root for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_dir: Option<PathBuf>,
    /// Overrides the policy default timeout. Zero means "not set".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_id: Option<InvocationId>,
    /// Ask the wrapper to return a failure signal for non-success outcomes.
    #[serde(default)]
    pub raise_on_failure: bool,
}

impl ExecutionRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            workspace_dir: None,
            timeout_secs: None,
            invocation_id: None,
            raise_on_failure: false,
        }
    }

    crate::setters! {
        set { raise_on_failure: bool }
        option { workspace_dir: PathBuf, invocation_id: InvocationId }
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Key for attempt counting: the invocation id, or the command text when
    /// the caller supplied none.
    pub fn attempt_key(&self) -> InvocationId {
        match &self.invocation_id {
            Some(id) => id.clone(),
            None => InvocationId::from_string(self.command.as_str()),
        }
    }

    /// Timeout for this request under `policy`, in whole seconds.
    pub fn effective_timeout_secs(&self, policy: &Policy) -> u64 {
        self.timeout_secs.filter(|&secs| secs > 0).unwrap_or_else(|| policy.default_timeout_secs())
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
