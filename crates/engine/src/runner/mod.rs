// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a validated command without a shell and reports how it ended.
//!
//! The child leads its own process group so that a timeout, or a normal exit
//! that leaves descendants behind, can be cleaned up with one `killpg`.

mod capture;
mod group;

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::error::EngineError;
use crate::validate::ValidatedCommand;

pub use capture::Captured;
use capture::BoundedCapture;

/// How long output readers may keep running once the process is gone.
pub const DRAIN_GRACE: Duration = Duration::from_secs(2);

/// How the process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessExit {
    Code(i32),
    Signal(i32),
    /// Killed by us after the timeout elapsed.
    TimedOut,
}

/// A process that was spawned and has been reaped.
#[derive(Debug)]
pub struct Finished {
    pub pid: Option<u32>,
    pub exit: ProcessExit,
    pub stdout: Captured,
    pub stderr: Captured,
    pub duration: Duration,
}

/// Raw outcome of a run, before classification.
#[derive(Debug)]
pub enum RawRun {
    Finished(Finished),
    /// The program was missing or not executable. No process exists.
    SpawnFailed { program: String, error: io::Error, duration: Duration },
}

/// Spawn `cmd` in its workspace and wait at most `timeout` for it.
///
/// Each of stdout and stderr keeps at most `max_output_bytes`.
pub async fn run(
    cmd: &ValidatedCommand,
    timeout: Duration,
    max_output_bytes: usize,
) -> Result<RawRun, EngineError> {
    let span = tracing::info_span!(
        "cordon.run",
        program = cmd.program(),
        pid = tracing::field::Empty,
        timed_out = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    run_in_span(cmd, timeout, max_output_bytes, span.clone()).instrument(span).await
}

async fn run_in_span(
    cmd: &ValidatedCommand,
    timeout: Duration,
    max_output_bytes: usize,
    span: tracing::Span,
) -> Result<RawRun, EngineError> {
    let mut command = Command::new(cmd.program());
    command
        .args(cmd.args())
        .current_dir(cmd.workspace())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .process_group(0);

    let started = Instant::now();
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(error)
            if matches!(error.kind(), io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied) =>
        {
            tracing::debug!(error = %error, "spawn failed");
            return Ok(RawRun::SpawnFailed {
                program: cmd.program().to_string(),
                error,
                duration: started.elapsed(),
            });
        }
        Err(source) => {
            return Err(EngineError::Spawn { program: cmd.program().to_string(), source });
        }
    };

    let pid = child.id();
    if let Some(pid) = pid {
        span.record("pid", pid);
    }

    let stdout = Arc::new(Mutex::new(BoundedCapture::new(max_output_bytes)));
    let stderr = Arc::new(Mutex::new(BoundedCapture::new(max_output_bytes)));
    let stdout_task =
        child.stdout.take().map(|out| tokio::spawn(capture::drain(out, stdout.clone(), "stdout")));
    let stderr_task =
        child.stderr.take().map(|err| tokio::spawn(capture::drain(err, stderr.clone(), "stderr")));

    let waited = tokio::time::timeout(timeout, child.wait()).await;
    let exit = match waited {
        Ok(Ok(status)) => exit_of(status),
        Ok(Err(source)) => {
            kill(&mut child, pid);
            return Err(EngineError::Wait { pid: pid.unwrap_or_default(), source });
        }
        Err(_) => {
            kill(&mut child, pid);
            if let Err(e) = child.wait().await {
                tracing::warn!(error = %e, "failed to reap timed-out process");
            }
            ProcessExit::TimedOut
        }
    };

    // Descendants may outlive the leader and hold the pipes open. While any of
    // them lives the pgid stays pinned, so the sweep cannot hit a recycled id.
    if let Some(pid) = pid {
        if let Err(e) = group::kill_group(pid) {
            tracing::debug!(error = %e, "process group sweep failed");
        }
    }

    join_capture(stdout_task, "stdout").await;
    join_capture(stderr_task, "stderr").await;

    let duration = started.elapsed();
    span.record("timed_out", exit == ProcessExit::TimedOut);
    span.record("duration_ms", u64::try_from(duration.as_millis()).unwrap_or(u64::MAX));

    let stdout = stdout.lock().snapshot();
    let stderr = stderr.lock().snapshot();
    Ok(RawRun::Finished(Finished { pid, exit, stdout, stderr, duration }))
}

/// SIGKILL the whole group, falling back to the leader alone.
fn kill(child: &mut Child, pid: Option<u32>) {
    let grouped = pid.map(group::kill_group);
    if let Some(Ok(())) = grouped {
        return;
    }
    if let Some(Err(e)) = grouped {
        tracing::warn!(error = %e, "killpg failed; killing leader only");
    }
    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "failed to kill process");
    }
}

async fn join_capture(task: Option<JoinHandle<()>>, stream: &'static str) {
    let Some(mut task) = task else {
        return;
    };
    match tokio::time::timeout(DRAIN_GRACE, &mut task).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(stream, error = %e, "output reader failed"),
        Err(_) => {
            task.abort();
            tracing::warn!(stream, "output still open after exit; keeping partial capture");
        }
    }
}

fn exit_of(status: ExitStatus) -> ProcessExit {
    match (status.code(), status.signal()) {
        (Some(code), _) => ProcessExit::Code(code),
        (None, Some(signal)) => ProcessExit::Signal(signal),
        (None, None) => ProcessExit::Code(-1),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
