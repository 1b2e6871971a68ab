// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types for the command lexer.

use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// True if any part of the word came from quotes or a backslash escape.
    pub quoted: bool,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span, quoted: false }
    }

    pub fn with_quoted(mut self, quoted: bool) -> Self {
        self.quoted = quoted;
        self
    }

    /// The word text, or the operator spelling for operator tokens.
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Word(word) => word.clone(),
            TokenKind::Operator(op) => op.to_string(),
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(word) => Some(word),
            TokenKind::Operator(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A fully unquoted and unescaped word, ready to become one argv entry.
    Word(String),
    Operator(Operator),
}

/// Shell control and redirection operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `|`
    Pipe,
    /// `||`
    Or,
    /// `&`
    Ampersand,
    /// `&&`
    And,
    /// `;`
    Semi,
    /// `<` or `n<`
    RedirectIn { fd: Option<u32> },
    /// `>` or `n>`
    RedirectOut { fd: Option<u32> },
    /// `>>` or `n>>`
    RedirectAppend { fd: Option<u32> },
}

impl Operator {
    /// Spellings a word must not take even when quoted.
    pub const SPELLINGS: [&'static str; 9] = ["|", "||", "&&", ";", "<", ">", ">>", "2>", "&"];

    /// Returns true if `ch` begins an operator when unquoted.
    #[inline]
    pub fn starts_with(ch: char) -> bool {
        matches!(ch, '|' | '&' | ';' | '<' | '>')
    }

    /// Returns true if `ch` can follow an fd number to form a redirection.
    #[inline]
    pub fn is_redirection_start(ch: char) -> bool {
        matches!(ch, '<' | '>')
    }

    /// Returns true if `word` is spelled like an operator.
    pub fn is_spelling(word: &str) -> bool {
        Self::SPELLINGS.contains(&word)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (fd, symbol) = match self {
            Operator::Pipe => (None, "|"),
            Operator::Or => (None, "||"),
            Operator::Ampersand => (None, "&"),
            Operator::And => (None, "&&"),
            Operator::Semi => (None, ";"),
            Operator::RedirectIn { fd } => (*fd, "<"),
            Operator::RedirectOut { fd } => (*fd, ">"),
            Operator::RedirectAppend { fd } => (*fd, ">>"),
        };
        match fd {
            Some(fd) => write!(f, "{fd}{symbol}"),
            None => f.write_str(symbol),
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
