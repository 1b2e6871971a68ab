// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace containment for command operands.

use std::io;
use std::path::{Component, Path, PathBuf};

use nix::errno::Errno;

use super::Rejection;

/// Matches the kernel's limit on symlink hops during lookup.
const MAX_SYMLINK_HOPS: usize = 40;

/// Reject the first operand that resolves outside `workspace`.
///
/// `workspace` must already be resolved.
pub(super) fn check_contained(args: &[String], workspace: &Path) -> Result<(), Rejection> {
    for arg in args {
        let Some(candidate) = path_candidate(arg) else {
            continue;
        };
        let resolved = resolve(&workspace.join(candidate)).map_err(|err| {
            Rejection::Unresolvable { path: arg.clone(), message: err.to_string() }
        })?;
        if !resolved.starts_with(workspace) {
            return Err(Rejection::OutsideWorkspace {
                path: arg.clone(),
                workspace: workspace.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// The operand of `arg` to resolve: the word itself, or for `--opt=value` the
/// value. Other flags carry no path.
///
/// Every operand is resolved, not only ones shaped like paths: `sub/../..`
/// and a bare symlink name escape just as well as `../`. Words that name
/// nothing resolve lexically inside the workspace and pass.
fn path_candidate(arg: &str) -> Option<&str> {
    if arg.starts_with('-') {
        return arg.split_once('=').map(|(_, value)| value);
    }
    Some(arg)
}

/// Resolve `path` to an absolute path without requiring it to exist.
///
/// Symlinks along the existing prefix are followed and `..` is applied after
/// them; the missing tail is appended lexically.
pub(crate) fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut hops = 0;
    let base = if path.is_absolute() { PathBuf::from("/") } else { std::env::current_dir()? };
    resolve_from(base, path, &mut hops)
}

fn resolve_from(mut resolved: PathBuf, path: &Path, hops: &mut usize) -> io::Result<PathBuf> {
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::CurDir => {}
            Component::RootDir => resolved = PathBuf::from("/"),
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                let meta = match std::fs::symlink_metadata(&resolved) {
                    Ok(meta) => meta,
                    Err(err) if is_missing(&err) => continue,
                    Err(err) => return Err(err),
                };
                if !meta.file_type().is_symlink() {
                    continue;
                }
                *hops += 1;
                if *hops > MAX_SYMLINK_HOPS {
                    return Err(io::Error::other("too many levels of symbolic links"));
                }
                let target = std::fs::read_link(&resolved)?;
                resolved.pop();
                resolved = resolve_from(resolved, &target, hops)?;
            }
        }
    }
    Ok(resolved)
}

/// Lookups that prove nothing exists at the path, so the rest is lexical.
fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
        || err.raw_os_error() == Some(Errno::ENAMETOOLONG as i32)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
