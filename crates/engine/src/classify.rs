// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turns a raw run into an [`ExecutionResult`].

use cordon_core::{ExecStatus, ExecutionResult};

use crate::runner::{Captured, Finished, ProcessExit, RawRun};
use crate::validate::Rejection;

/// Result for a command the validator refused.
pub fn blocked(command: &str, rejection: &Rejection, attempt: u32) -> ExecutionResult {
    ExecutionResult::blocked(command, rejection.to_string(), attempt)
}

/// Classify a raw run.
///
/// Output is decoded lossily and never exceeds `max_output_bytes` per stream.
pub fn classify(
    command: &str,
    run: RawRun,
    timeout_secs: u64,
    max_output_bytes: usize,
    attempt: u32,
) -> ExecutionResult {
    match run {
        RawRun::SpawnFailed { program, error, duration } => ExecutionResult {
            command: command.to_string(),
            status: ExecStatus::Error,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            stdout_truncated: false,
            stderr_truncated: false,
            timed_out: false,
            duration_ms: millis(duration),
            reason: format!("Failed to spawn '{program}': {error}"),
            pid: None,
            attempt,
        },
        RawRun::Finished(Finished { pid, exit, stdout, stderr, duration }) => {
            let (status, exit_code, reason) = match exit {
                ProcessExit::Code(0) => {
                    (ExecStatus::Success, Some(0), "Command completed successfully".to_string())
                }
                ProcessExit::Code(code) => {
                    (ExecStatus::Error, Some(code), format!("Command exited with status {code}"))
                }
                ProcessExit::Signal(signal) => {
                    (ExecStatus::Error, None, format!("Command terminated by signal {signal}"))
                }
                ProcessExit::TimedOut => (
                    ExecStatus::Timeout,
                    None,
                    format!("Command exceeded timeout of {timeout_secs}s and was killed"),
                ),
            };
            let (stdout, stdout_truncated) = decode(stdout, max_output_bytes);
            let (stderr, stderr_truncated) = decode(stderr, max_output_bytes);
            ExecutionResult {
                command: command.to_string(),
                status,
                exit_code,
                stdout,
                stderr,
                stdout_truncated,
                stderr_truncated,
                timed_out: exit == ProcessExit::TimedOut,
                duration_ms: millis(duration),
                reason,
                pid,
                attempt,
            }
        }
    }
}

/// Lossy UTF-8 decode, cut back to a char boundary within `cap` bytes.
///
/// The flag reports whether the stream itself overflowed the cap. Replacement
/// characters can push the decoded text past `cap` even when every byte was
/// kept, so trimming them does not count as truncation.
fn decode(captured: Captured, cap: usize) -> (String, bool) {
    let mut text = String::from_utf8_lossy(&captured.bytes).into_owned();
    if text.len() > cap {
        let mut end = cap;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    (text, captured.truncated)
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
