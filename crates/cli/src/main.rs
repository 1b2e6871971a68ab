// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cordon: run one command under an execution policy.

mod commands;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{check, run};
use exit_error::{ExitError, EXIT_INTERNAL};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "cordon", version, about = "Run commands inside an allow-listed workspace sandbox")]
struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and run a command
    Run(run::RunArgs),
    /// Validate a command without running it
    Check(check::CheckArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.exit_code() == 0 { 0 } else { EXIT_INTERNAL };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = dispatch(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                EXIT_INTERNAL
            }
        };
        std::process::exit(code);
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => run::handle(args, cli.format).await,
        Commands::Check(args) => check::handle(args, cli.format),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
