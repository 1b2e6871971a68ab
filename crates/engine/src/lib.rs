// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cordon-engine: validate, run, and classify sandboxed commands.
//!
//! A request flows through [`Invoker::execute`]: the validator either
//! rejects it (BLOCKED, nothing spawned) or yields an argv, the runner spawns
//! that argv directly in its own process group, and the classifier maps the
//! raw outcome to exactly one terminal status.

#[cfg(not(unix))]
compile_error!("cordon-engine requires process groups and is unix-only");

pub mod classify;
mod error;
pub mod invoke;
pub mod retry;
pub mod runner;
pub mod validate;

pub use error::EngineError;
pub use invoke::{AttemptCounter, ExecFailure, InvokeError, Invoker};
pub use retry::{run_with_retry, RetryPolicy};
pub use runner::{Captured, ProcessExit, RawRun, DRAIN_GRACE};
pub use validate::{validate, Rejection, ValidatedCommand};
