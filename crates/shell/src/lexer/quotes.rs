// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted segments).

use super::{Lexer, LexerError};
use crate::span::Span;

impl Lexer<'_> {
    /// Append a single-quoted segment to `text`, returning the byte offset
    /// just past the closing quote.
    pub(super) fn read_single_quoted(
        &mut self,
        start: usize,
        text: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        for (pos, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(pos + 1);
            }
            text.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input_end()) })
    }

    /// Append a double-quoted segment to `text`, returning the byte offset
    /// just past the closing quote.
    ///
    /// Backslash only escapes `\`, `"`, `$`, `` ` `` and newline here; before
    /// any other character it is kept literally.
    pub(super) fn read_double_quoted(
        &mut self,
        start: usize,
        text: &mut String,
    ) -> Result<usize, LexerError> {
        self.chars.next();
        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(pos + 1),
                '\\' => match self.peek_char() {
                    Some(next @ ('\\' | '"' | '$' | '`' | '\n')) => {
                        text.push(next);
                        self.chars.next();
                    }
                    Some(_) => text.push('\\'),
                    None => break,
                },
                _ => text.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, self.input_end()) })
    }
}
