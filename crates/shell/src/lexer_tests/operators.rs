// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator lexing tests, including operators glued to words.

use super::macros::{op, word};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Operator, TokenKind};

lex_tests! {
    pipe: "ls | wc" => [word("ls"), op(Operator::Pipe), word("wc")],
    or: "ls || echo" => [word("ls"), op(Operator::Or), word("echo")],
    and: "ls && echo" => [word("ls"), op(Operator::And), word("echo")],
    semi: "ls; echo" => [word("ls"), op(Operator::Semi), word("echo")],
    background: "sleep 1 &" => [word("sleep"), word("1"), op(Operator::Ampersand)],
    redirect_in: "cat < f" => [word("cat"), op(Operator::RedirectIn { fd: None }), word("f")],
    redirect_out: "echo x > f" => [word("echo"), word("x"), op(Operator::RedirectOut { fd: None }), word("f")],
    redirect_append: "echo x >> f" => [word("echo"), word("x"), op(Operator::RedirectAppend { fd: None }), word("f")],

    // Operators glued to words still split
    glued_redirect: "echo x>/etc/passwd" => [
        word("echo"),
        word("x"),
        op(Operator::RedirectOut { fd: None }),
        word("/etc/passwd"),
    ],
    glued_pipe: "ls|wc" => [word("ls"), op(Operator::Pipe), word("wc")],
    glued_and: "true&&false" => [word("true"), op(Operator::And), word("false")],

    // fd-prefixed redirections
    stderr_redirect: "ls 2> err" => [word("ls"), op(Operator::RedirectOut { fd: Some(2) }), word("err")],
    stderr_append: "ls 2>>err" => [word("ls"), op(Operator::RedirectAppend { fd: Some(2) }), word("err")],
    stdin_fd: "cat 0<f" => [word("cat"), op(Operator::RedirectIn { fd: Some(0) }), word("f")],
    spaced_digit_is_a_word: "ls 2 > err" => [word("ls"), word("2"), op(Operator::RedirectOut { fd: None }), word("err")],
    quoted_digit_is_a_word: "ls '2'> err" => [word("ls"), word("2"), op(Operator::RedirectOut { fd: None }), word("err")],
    digit_before_pipe_is_a_word: "echo 2|wc" => [word("echo"), word("2"), op(Operator::Pipe), word("wc")],

    // Greedy two-character operators
    triple_pipe: "a|||b" => [word("a"), op(Operator::Or), op(Operator::Pipe), word("b")],
    heredoc_is_two_redirects: "cat <<EOF" => [
        word("cat"),
        op(Operator::RedirectIn { fd: None }),
        op(Operator::RedirectIn { fd: None }),
        word("EOF"),
    ],
}

#[test]
fn fd_redirect_span_includes_fd() {
    let input = "ls 2>err";
    let tokens = Lexer::tokenize(input).unwrap();
    assert_eq!(tokens[1].span, Span::new(3, 5));
    assert_eq!(tokens[1].span.slice(input), "2>");
}

#[test]
fn two_char_operator_span() {
    let tokens = Lexer::tokenize("a >> b").unwrap();
    assert_eq!(tokens[1].span, Span::new(2, 4));
    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::RedirectAppend { fd: None }));
}
