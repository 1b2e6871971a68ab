// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote lexer tests: single quotes, double quotes, escapes, concatenation.

use super::macros::word;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::TokenKind;

lex_tests! {
    // Single quotes
    single_quote_basic: "echo 'hello world'" => [word("echo"), word("hello world")],
    single_quote_empty: "echo ''" => [word("echo"), word("")],
    single_quote_preserves_backslash: r"echo 'a\nb'" => [word("echo"), word(r"a\nb")],
    single_quote_preserves_operators: "echo 'a && b | c > d'" => [word("echo"), word("a && b | c > d")],
    single_quote_preserves_double: r#"echo 'say "hi"'"# => [word("echo"), word(r#"say "hi""#)],

    // Double quotes
    double_quote_basic: r#"echo "hello world""# => [word("echo"), word("hello world")],
    double_quote_empty: r#"echo """# => [word("echo"), word("")],
    double_quote_escaped_quote: r#"echo "a \"b\" c""# => [word("echo"), word(r#"a "b" c"#)],
    double_quote_escaped_backslash: r#"echo "a\\b""# => [word("echo"), word(r"a\b")],
    double_quote_escaped_dollar: r#"echo "\$HOME""# => [word("echo"), word("$HOME")],
    double_quote_keeps_other_backslash: r#"echo "a\nb""# => [word("echo"), word(r"a\nb")],
    double_quote_preserves_single: r#"echo "it's""# => [word("echo"), word("it's")],
    double_quote_preserves_operators: r#"echo ">" "|""# => [word("echo"), word(">"), word("|")],

    // Concatenation of adjacent segments
    concat_word_and_single: "echo foo'bar'" => [word("echo"), word("foobar")],
    concat_single_and_double: r#"echo 'a'"b"c"# => [word("echo"), word("abc")],
    close_escape_reopen_idiom: r"echo 'it'\''s'" => [word("echo"), word("it's")],

    // Inline interpreter code keeps its inner quoting
    python_inline_code: r#"python3 -c "import os; os.system(\"ls\")""# => [
        word("python3"),
        word("-c"),
        word(r#"import os; os.system("ls")"#),
    ],
}

#[test]
fn quoted_span_includes_quotes() {
    let input = r#"echo "a b""#;
    let tokens = Lexer::tokenize(input).unwrap();
    assert_eq!(tokens[1].span, Span::new(5, 10));
    assert!(tokens[1].quoted);
}

#[test]
fn quoted_operator_spelling_stays_a_word() {
    let tokens = Lexer::tokenize("echo '&&'").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Word("&&".into()));
}
