// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style lexer that splits a command string into words and operators.
//!
//! Quoting follows POSIX word splitting: single quotes are literal, double
//! quotes honor a small escape set, and an unquoted backslash escapes the next
//! character. Adjacent quoted and unquoted segments join into one word.

mod operators;
mod quotes;

use super::span::Span;
use super::token::{Operator, Token, TokenKind};

pub use crate::error::LexerError;

/// A word scanned up to the next blank or operator.
struct ScannedWord {
    text: String,
    quoted: bool,
    end: usize,
}

/// Command lexer producing [`Token`]s.
pub struct Lexer<'a> {
    /// The input string being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Tokenize an entire command string.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        Lexer::new(input).run()
    }

    fn run(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        while let Some(&(pos, ch)) = self.chars.peek() {
            if is_blank(ch) {
                self.chars.next();
                continue;
            }

            if Operator::starts_with(ch) {
                self.chars.next();
                tokens.push(self.lex_operator(pos, pos, ch, None));
                continue;
            }

            let word = self.scan_word(pos)?;

            // `2>file`: an unquoted fd number glued to a redirection
            if let Some((fd, op_pos, op_ch)) = self.redirection_fd(&word) {
                self.chars.next();
                tokens.push(self.lex_operator(pos, op_pos, op_ch, Some(fd)));
                continue;
            }

            tokens.push(
                Token::new(TokenKind::Word(word.text), Span::new(pos, word.end))
                    .with_quoted(word.quoted),
            );
        }

        Ok(tokens)
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Position just past the input, used for spans that run to the end.
    #[inline]
    fn input_end(&self) -> usize {
        self.input.len()
    }

    fn scan_word(&mut self, start: usize) -> Result<ScannedWord, LexerError> {
        let mut word = ScannedWord { text: String::new(), quoted: false, end: start };

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                c if is_blank(c) || Operator::starts_with(c) => break,
                '\'' => {
                    word.end = self.read_single_quoted(pos, &mut word.text)?;
                    word.quoted = true;
                }
                '"' => {
                    word.end = self.read_double_quoted(pos, &mut word.text)?;
                    word.quoted = true;
                }
                '\\' => {
                    self.chars.next();
                    let Some((esc_pos, esc_ch)) = self.chars.next() else {
                        return Err(LexerError::TrailingBackslash {
                            span: Span::new(pos, pos + 1),
                        });
                    };
                    word.text.push(esc_ch);
                    word.end = esc_pos + esc_ch.len_utf8();
                    word.quoted = true;
                }
                _ => {
                    word.text.push(ch);
                    word.end = pos + ch.len_utf8();
                    self.chars.next();
                }
            }
        }

        Ok(word)
    }

    /// If `word` is a bare fd number immediately followed by `<` or `>`,
    /// returns the fd and the position of the redirection character.
    fn redirection_fd(&mut self, word: &ScannedWord) -> Option<(u32, usize, char)> {
        if word.quoted || word.text.is_empty() || !word.text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match self.chars.peek() {
            Some(&(pos, ch)) if pos == word.end && Operator::is_redirection_start(ch) => {
                let fd = word.text.parse().ok()?;
                Some((fd, pos, ch))
            }
            _ => None,
        }
    }
}

/// Whitespace that separates words.
#[inline]
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
