// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::lexer::{Lexer, LexerError};
use crate::span::Span;

lex_error_tests! {
    unterminated_single: "echo 'oops" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double: "echo \"oops" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_after_escape: r#"echo "oops\""# => LexerError::UnterminatedDoubleQuote { .. },
    double_ends_in_backslash: "echo \"oops\\" => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: "echo oops\\" => LexerError::TrailingBackslash { .. },
    unterminated_in_inline_code: r#"python -c "print('x')"#  => LexerError::UnterminatedDoubleQuote { .. },
}

#[test]
fn unterminated_quote_span_runs_to_end() {
    let input = "cat 'abc";
    let err = Lexer::tokenize(input).unwrap_err();
    assert_eq!(err.span(), Span::new(4, input.len()));
}

#[test]
fn trailing_backslash_span_is_the_backslash() {
    let err = Lexer::tokenize("ls \\").unwrap_err();
    assert_eq!(err, LexerError::TrailingBackslash { span: Span::new(3, 4) });
}
