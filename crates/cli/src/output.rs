// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use cordon_core::ExecutionResult;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Outcome of `cordon check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub command: String,
    pub allowed: bool,
    pub reason: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub argv: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an execution result.
///
/// Text mode passes the child's output through unchanged and reports
/// anything other than success on stderr.
pub fn print_result(result: &ExecutionResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Text => {
            std::io::stdout().write_all(result.stdout.as_bytes())?;
            std::io::stderr().write_all(result.stderr.as_bytes())?;
            for line in result_notes(result) {
                eprintln!("{line}");
            }
            Ok(())
        }
    }
}

/// Trailer lines for text mode.
pub fn result_notes(result: &ExecutionResult) -> Vec<String> {
    let mut notes = Vec::new();
    if result.stdout_truncated {
        notes.push("cordon: stdout truncated".to_string());
    }
    if result.stderr_truncated {
        notes.push("cordon: stderr truncated".to_string());
    }
    if !result.is_success() {
        let attempt = if result.attempt > 1 {
            format!(" (attempt {})", result.attempt)
        } else {
            String::new()
        };
        notes.push(format!("cordon: {}: {}{attempt}", result.status, result.reason));
    }
    notes
}

pub fn print_check(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            if report.allowed {
                println!("allowed: {}", report.argv.join(" "));
            } else {
                println!("blocked: {}", report.reason);
            }
            Ok(())
        }
    }
}
