//! CLI help output specs

use crate::prelude::*;

#[test]
fn cordon_help_lists_subcommands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("run").stdout_has("check");
}

#[test]
fn cordon_run_help_shows_policy_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--workspace")
        .stdout_has("--timeout")
        .stdout_has("--allow")
        .stdout_has("--max-attempts");
}

#[test]
fn cordon_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn cordon_without_subcommand_is_usage_error() {
    cli().exits(3).stderr_has("Usage:");
}

#[test]
fn unknown_flag_is_usage_error() {
    cli().args(&["run", "--bogus", "ls"]).exits(3);
}

#[test]
fn cordon_binary_is_built_from_this_workspace() {
    let expected = format!("cordon {}\n", env!("CARGO_PKG_VERSION"));
    cli().args(&["--version"]).passes().stdout_eq(&expected);
}
