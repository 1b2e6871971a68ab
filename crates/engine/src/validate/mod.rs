// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command validation: allow-list, shell operators, inline code, and
//! workspace containment.
//!
//! Validation is fail-closed. Anything that cannot be classified with
//! certainty is rejected, and rejection always happens before a process
//! exists. The only side effect is reading symlinks while resolving paths.

mod inline;
mod path;

use std::path::{Path, PathBuf};

use cordon_core::Policy;
use cordon_shell::{Lexer, LexerError, Operator, Token};
use thiserror::Error;

pub(crate) use path::resolve;

/// Why a command was rejected. The `Display` text is shown to end users as
/// the result reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid command syntax: {0}")]
    InvalidSyntax(LexerError),

    #[error("Empty command is not allowed")]
    Empty,

    #[error("Command '{program}' is not in allowlist")]
    NotAllowed { program: String },

    #[error("Shell operator '{operator}' is blocked; run direct commands only")]
    ShellOperator { operator: String },

    #[error("Inline {interpreter} code contains blocked pattern '{pattern}'")]
    InlineCode { interpreter: &'static str, pattern: &'static str },

    #[error("Path '{path}' is outside workspace scope '{}'", workspace.display())]
    OutsideWorkspace { path: String, workspace: PathBuf },

    #[error("Path '{path}' could not be resolved: {message}")]
    Unresolvable { path: String, message: String },
}

/// An accepted command: the exact argv to execute, plus the resolved
/// workspace it must run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCommand {
    program: String,
    args: Vec<String>,
    workspace: PathBuf,
}

impl ValidatedCommand {
    #[cfg(test)]
    pub(crate) fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        workspace: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            workspace: workspace.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }

    /// Canonical workspace root; the process working directory.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }
}

/// Validate `command` against `policy`.
///
/// Checks run in a fixed order (syntax, empty, allow-list, shell operators,
/// inline code, paths) so the same input always yields the same reason.
pub fn validate(command: &str, policy: &Policy) -> Result<ValidatedCommand, Rejection> {
    let tokens = Lexer::tokenize(command).map_err(Rejection::InvalidSyntax)?;
    let (first, rest) = tokens.split_first().ok_or(Rejection::Empty)?;

    let program = first.text();
    if policy.allowed_prefix_for(&program).is_none() {
        return Err(Rejection::NotAllowed { program });
    }

    if let Some(operator) = tokens.iter().find_map(shell_operator) {
        return Err(Rejection::ShellOperator { operator });
    }

    let args: Vec<String> = rest.iter().map(Token::text).collect();
    inline::check(&program, &args)?;

    let workspace = resolve(policy.workspace_root()).map_err(|err| Rejection::Unresolvable {
        path: policy.workspace_root().display().to_string(),
        message: err.to_string(),
    })?;
    path::check_contained(&args, &workspace)?;

    Ok(ValidatedCommand { program, args, workspace })
}

/// Operator tokens, and words that merely spell one (`echo '>'`). Such a
/// word would reach the program as a literal argument and mislead whoever
/// wrote it into expecting shell semantics.
fn shell_operator(token: &Token) -> Option<String> {
    match token.as_word() {
        None => Some(token.text()),
        Some(word) if Operator::is_spelling(word) => Some(word.to_string()),
        Some(_) => None,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
