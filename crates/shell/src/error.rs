// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the command lexer.

use crate::{context_snippet, Span};
use thiserror::Error;

/// Errors that can occur while splitting a command into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Unterminated single quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote {
        /// Source location span for the error.
        span: Span,
    },

    /// Unterminated double quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// Source location span for the error.
        span: Span,
    },

    /// Trailing backslash at end of input.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash {
        /// Source location span for the error.
        span: Span,
    },
}

impl LexerError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::TrailingBackslash { span } => *span,
        }
    }

    /// Get a context snippet around the error position.
    ///
    /// Returns a formatted string showing the error location with a caret.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
