// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cordon-shell: shell-style word splitting for sandboxed command strings.
//!
//! The lexer only splits words and recognizes control operators. Nothing here
//! expands variables, globs, or substitutions: the resulting words are handed
//! to `execve` verbatim, so operators exist only to be reported and rejected.

mod error;
pub mod lexer;
mod span;
mod token;

pub use error::LexerError;
pub use lexer::Lexer;
pub use span::{context_snippet, Span};
pub use token::{Operator, Token, TokenKind};

#[cfg(test)]
mod lexer_tests;
