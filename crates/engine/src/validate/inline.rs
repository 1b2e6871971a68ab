// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Heuristic denylist for interpreters run with inline code.
//!
//! Layered on top of the allow-list, never a substitute for it.

use std::path::Path;

use super::Rejection;

/// Interpreter name prefix and the flags that take inline code.
const INLINE_CODE_FLAGS: &[(&str, &[&str])] = &[
    ("python", &["-c"]),
    ("node", &["-e", "--eval", "-p", "--print"]),
    ("perl", &["-e", "-E"]),
    ("ruby", &["-e"]),
];

/// Substrings that spawn processes or delete trees.
const BLOCKED_PATTERNS: &[&str] = &[
    "os.system",
    "subprocess",
    "shutil.rmtree",
    "rm -rf",
    "pathlib.Path(\"/\").rmdir",
    "os.popen",
    "os.exec",
    "os.spawn",
    "pty.spawn",
    "child_process",
];

pub(super) fn check(program: &str, args: &[String]) -> Result<(), Rejection> {
    let name = Path::new(program).file_name().and_then(|n| n.to_str()).unwrap_or(program);
    let Some(&(interpreter, flags)) =
        INLINE_CODE_FLAGS.iter().find(|(prefix, _)| name.starts_with(prefix))
    else {
        return Ok(());
    };

    for code in inline_code(args, flags) {
        if let Some(pattern) = BLOCKED_PATTERNS.iter().copied().find(|p| code.contains(p)) {
            return Err(Rejection::InlineCode { interpreter, pattern });
        }
    }
    Ok(())
}

/// Every inline code argument: the word after a code flag, or the remainder
/// of a short flag with the code glued on (`-cprint(1)`).
fn inline_code<'a>(args: &'a [String], flags: &'a [&str]) -> impl Iterator<Item = &'a str> {
    args.iter().enumerate().filter_map(move |(i, arg)| {
        if flags.contains(&arg.as_str()) {
            return args.get(i + 1).map(String::as_str);
        }
        flags
            .iter()
            .filter(|flag| flag.len() == 2)
            .find_map(|flag| arg.strip_prefix(flag))
            .filter(|code| !code.is_empty())
    })
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod tests;
