// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Infrastructure faults that make the engine itself unusable.
//!
//! A bad command is never an error here: policy rejections, failed programs,
//! and timeouts are all encoded in `ExecutionResult`.

use std::path::PathBuf;

use cordon_core::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The OS refused to create a process for reasons unrelated to the command.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn { program: String, source: std::io::Error },

    /// Waiting on a spawned process failed; its status is unknown.
    #[error("failed to wait on process {pid}: {source}")]
    Wait { pid: u32, source: std::io::Error },

    #[error("cannot resolve workspace override '{}': {source}", path.display())]
    Workspace { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Policy(#[from] PolicyError),
}
