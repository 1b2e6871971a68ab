// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cordon check`: validate without running.

use clap::Args;
use cordon_engine::{validate, Rejection};

use super::policy::PolicyArgs;
use crate::exit_error::{ExitError, EXIT_BLOCKED};
use crate::output::{print_check, CheckReport, OutputFormat};

/// Characters of input shown on each side of a syntax error.
const SNIPPET_CONTEXT_CHARS: usize = 20;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Command line to validate, as a single string
    #[arg(value_name = "COMMAND")]
    pub command: String,
}

pub fn handle(args: CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let policy = args.policy.resolve()?;
    let report = match validate(&args.command, &policy) {
        Ok(validated) => CheckReport {
            command: args.command,
            allowed: true,
            reason: "Command is allowed".into(),
            argv: validated.argv().map(str::to_string).collect(),
            workspace: Some(validated.workspace().display().to_string()),
        },
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "command rejected");
            if let (Rejection::InvalidSyntax(err), OutputFormat::Text) = (&rejection, format) {
                eprintln!("{}", err.context(&args.command, SNIPPET_CONTEXT_CHARS));
            }
            CheckReport {
                command: args.command,
                allowed: false,
                reason: rejection.to_string(),
                argv: Vec::new(),
                workspace: None,
            }
        }
    };
    print_check(&report, format)?;
    if report.allowed {
        Ok(())
    } else {
        Err(ExitError::silent(EXIT_BLOCKED).into())
    }
}
