// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for command strings.

use serde::{Deserialize, Serialize};

/// A byte-offset range in the source text.
///
/// Uses byte offsets for efficient slicing with UTF-8 source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extract the spanned text from source.
    ///
    /// Returns an empty string if the span is out of bounds or not on valid
    /// UTF-8 character boundaries.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Generate a context snippet showing the error location in source text.
///
/// Returns a formatted string with the relevant portion of input and carets
/// pointing to the span location.
///
/// ```text
/// echo 'oops
///      ^^^^^
/// ```
pub fn context_snippet(input: &str, span: Span, context_chars: usize) -> String {
    let span_start = span.start.min(input.len());
    let span_end = span.end.clamp(span_start, input.len());

    // Find context boundaries, respecting UTF-8 character boundaries
    let start = input[..span_start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(span_start);

    let end = input[span_end..]
        .char_indices()
        .take(context_chars)
        .last()
        .map(|(i, c)| span_end + i + c.len_utf8())
        .unwrap_or(span_end);

    let snippet = &input[start..end];
    let caret_pos = input[start..span_start].chars().count();
    let caret_len = input[span_start..span_end].chars().count().max(1);

    format!("{}\n{}{}", snippet, " ".repeat(caret_pos), "^".repeat(caret_len))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
