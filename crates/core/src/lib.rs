// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cordon-core: data model shared by the Cordon execution engine and its callers.

pub mod macros;

pub mod id;
pub mod policy;
pub mod request;
pub mod result;

pub use id::InvocationId;
pub use policy::{
    Policy, PolicyError, DEFAULT_ALLOWED_PREFIXES, DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_TIMEOUT_SECS,
};
pub use request::ExecutionRequest;
#[cfg(any(test, feature = "test-support"))]
pub use result::ExecutionResultBuilder;
pub use result::{ExecStatus, ExecutionResult, RetryClass};
