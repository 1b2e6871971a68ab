//! Configuration precedence specs: flags > environment > policy file > defaults

use crate::prelude::*;

#[test]
fn workspace_from_environment() {
    let temp = Project::empty();
    cli()
        .env("CORDON_WORKSPACE", temp.path())
        .args(&["check", "-o", "json", "ls ."])
        .passes()
        .stdout_has(&temp.path_str());
}

#[test]
fn workspace_flag_beats_environment() {
    let temp = Project::empty();
    cli()
        .env("CORDON_WORKSPACE", temp.path())
        .args(&["check", "-w", "/", "cat /etc/hostname"])
        .passes();
}

#[test]
fn timeout_from_environment() {
    cli()
        .env("CORDON_TIMEOUT_SECS", "1")
        .args(&["run", "-w", "/", "--allow", "sleep", "sleep 60"])
        .exits(1)
        .stderr_has("timeout of 1s");
}

#[test]
fn policy_file_replaces_allow_list() {
    let temp = Project::empty();
    temp.file(
        "cordon.toml",
        &format!("workspace_root = \"{}\"\nallowed_prefixes = [\"uname\"]\n", temp.path_str()),
    );
    temp.cordon()
        .args(&["check", "--policy", "cordon.toml", "ls"])
        .exits(2)
        .stdout_has("Command 'ls' is not in allowlist");
    temp.cordon().args(&["check", "--policy", "cordon.toml", "uname -a"]).passes();
}

#[test]
fn policy_file_from_environment() {
    let temp = Project::empty();
    temp.file("policy.toml", "workspace_root = \"/\"\nallowed_prefixes = [\"echo\"]\n");
    cli()
        .env("CORDON_POLICY", temp.path().join("policy.toml"))
        .args(&["check", "git status"])
        .exits(2);
}

#[test]
fn invalid_policy_file_is_internal_error() {
    let temp = Project::empty();
    temp.file("bad.toml", "workspace_root = \"/\"\nsurprise = true\n");
    temp.cordon()
        .args(&["check", "--policy", "bad.toml", "ls"])
        .exits(3)
        .stderr_has("invalid policy file");
}

#[test]
fn zero_timeout_is_internal_error() {
    cli().args(&["run", "-w", "/", "--timeout", "0", "ls"]).exits(3);
}

#[test]
fn debug_logging_goes_to_stderr() {
    cli()
        .env("CORDON_LOG", "cordon_engine=info")
        .args(&["run", "-w", "/", "echo hi"])
        .passes()
        .stdout_eq("hi\n")
        .stderr_has("command finished");
}
