// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-group signalling.

use nix::errno::Errno;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;

/// SIGKILL every process in the group led by `pid`.
///
/// A group that no longer exists counts as killed.
pub(crate) fn kill_group(pid: u32) -> nix::Result<()> {
    let pgid = i32::try_from(pid).map_err(|_| Errno::EINVAL)?;
    match killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
