// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control and redirection operator lexing.

use super::Lexer;
use crate::span::Span;
use crate::token::{Operator, Token, TokenKind};

impl Lexer<'_> {
    /// Finish lexing an operator whose first character `ch` (at `ch_pos`) was
    /// already consumed. `start` precedes `ch_pos` when an fd number was lexed.
    pub(super) fn lex_operator(
        &mut self,
        start: usize,
        ch_pos: usize,
        ch: char,
        fd: Option<u32>,
    ) -> Token {
        let (op, width) = match ch {
            '|' if self.consume_if('|') => (Operator::Or, 2),
            '|' => (Operator::Pipe, 1),
            '&' if self.consume_if('&') => (Operator::And, 2),
            '&' => (Operator::Ampersand, 1),
            ';' => (Operator::Semi, 1),
            '<' => (Operator::RedirectIn { fd }, 1),
            '>' if self.consume_if('>') => (Operator::RedirectAppend { fd }, 2),
            // '>'
            _ => (Operator::RedirectOut { fd }, 1),
        };

        Token::new(TokenKind::Operator(op), Span::new(start, ch_pos + width))
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }
}
