// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cordon run`: validate, execute, and report.

use clap::Args;
use cordon_core::{ExecutionRequest, InvocationId};
use cordon_engine::{run_with_retry, InvokeError, Invoker, RetryPolicy};

use super::policy::PolicyArgs;
use crate::exit_error::ExitError;
use crate::output::{print_result, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Attempt-counting key shared by every retry of this run [default: generated]
    #[arg(long, value_name = "ID")]
    pub invocation_id: Option<String>,

    /// Total runs allowed; failures other than BLOCKED are retried
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub max_attempts: u32,

    /// Command line to run, as a single string
    #[arg(value_name = "COMMAND")]
    pub command: String,
}

pub async fn handle(args: RunArgs, format: OutputFormat) -> anyhow::Result<()> {
    let invoker = Invoker::new(args.policy.resolve()?);

    let request = build_request(args.command, args.invocation_id, args.max_attempts);
    tracing::debug!(invocation_id = %request.attempt_key(), "running command");

    let result = match run_with_retry(&invoker, &request, &RetryPolicy::new(args.max_attempts)).await
    {
        Ok(result) => result,
        Err(InvokeError::Failed(failure)) => failure.result,
        Err(InvokeError::Engine(e)) => return Err(e.into()),
    };

    print_result(&result, format)?;
    match ExitError::for_status(result.status) {
        Some(exit) => Err(exit.into()),
        None => Ok(()),
    }
}

/// Every run carries an id so its attempt count starts fresh and is shared
/// only by its own retries.
fn build_request(command: String, id: Option<String>, max_attempts: u32) -> ExecutionRequest {
    let id = id.map(InvocationId::from_string).unwrap_or_default();
    ExecutionRequest::new(command).invocation_id(id).raise_on_failure(max_attempts > 1)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
