// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded capture of a child's output stream.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt};

const READ_CHUNK: usize = 8 * 1024;

/// Captured bytes of one stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// At most the configured cap.
    pub bytes: Vec<u8>,
    /// More bytes were produced than kept.
    pub truncated: bool,
}

/// Keeps the first `cap` bytes and counts the rest.
#[derive(Debug)]
pub(crate) struct BoundedCapture {
    cap: usize,
    bytes: Vec<u8>,
    discarded: u64,
}

impl BoundedCapture {
    pub(crate) fn new(cap: usize) -> Self {
        Self { cap, bytes: Vec::with_capacity(cap.min(READ_CHUNK)), discarded: 0 }
    }

    pub(crate) fn push(&mut self, chunk: &[u8]) {
        let room = self.cap.saturating_sub(self.bytes.len());
        let kept = chunk.len().min(room);
        self.bytes.extend_from_slice(&chunk[..kept]);
        self.discarded += (chunk.len() - kept) as u64;
    }

    pub(crate) fn discarded(&self) -> u64 {
        self.discarded
    }

    pub(crate) fn snapshot(&self) -> Captured {
        Captured { bytes: self.bytes.clone(), truncated: self.discarded > 0 }
    }
}

pub(crate) type SharedCapture = Arc<Mutex<BoundedCapture>>;

/// Read `reader` to end, keeping what fits.
///
/// Reading continues past the cap so the child never blocks on a full pipe.
pub(crate) async fn drain<R>(mut reader: R, capture: SharedCapture, stream: &'static str)
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; READ_CHUNK];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => capture.lock().push(&buf[..n]),
            Err(e) => {
                tracing::warn!(stream, error = %e, "output read failed; keeping partial capture");
                break;
            }
        }
    }
    let discarded = capture.lock().discarded();
    if discarded > 0 {
        tracing::debug!(stream, discarded, "output exceeded cap");
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
