//! `cordon run` specs

use crate::prelude::*;

#[test]
fn echo_prints_output() {
    cli().args(&["run", "-w", "/", "echo \"hello world\""]).passes().stdout_eq("hello world\n");
}

#[test]
fn ls_in_workspace_lists_files() {
    let temp = Project::empty();
    temp.file("notes.txt", "hi");
    temp.cordon().args(&["run", "ls ."]).passes().stdout_has("notes.txt");
}

#[test]
fn cat_inside_workspace_passes() {
    let temp = Project::empty();
    temp.file("src/lib.rs", "pub fn answer() {}\n");
    temp.cordon().args(&["run", "cat ./src/lib.rs"]).passes().stdout_eq("pub fn answer() {}\n");
}

#[test]
fn disallowed_program_is_blocked() {
    cli()
        .args(&["run", "-w", "/", "rm -rf /"])
        .exits(2)
        .stderr_has("BLOCKED: Command 'rm' is not in allowlist");
}

#[test]
fn redirection_is_blocked() {
    cli()
        .args(&["run", "-w", "/", "echo \"test\" > /etc/passwd"])
        .exits(2)
        .stderr_has("Shell operator '>' is blocked");
}

#[test]
fn inline_python_system_is_blocked() {
    cli()
        .args(&["run", "-w", "/", "python3 -c \"import os; os.system('rm -rf /')\""])
        .exits(2)
        .stderr_has("os.system");
}

#[test]
fn path_escape_is_blocked() {
    let temp = Project::empty();
    temp.cordon()
        .args(&["run", "cat /etc/passwd"])
        .exits(2)
        .stderr_has(&format!("Path '/etc/passwd' is outside workspace scope '{}'", temp.path_str()));
}

#[test]
fn missing_path_is_error() {
    cli()
        .args(&["run", "-w", "/", "ls /nonexistent"])
        .exits(1)
        .stderr_has("ERROR: Command exited with status");
}

#[test]
fn slow_command_times_out() {
    cli()
        .args(&["run", "-w", "/", "--allow", "sleep", "--timeout", "1", "sleep 60"])
        .exits(1)
        .stderr_has("TIMEOUT: Command exceeded timeout of 1s and was killed");
}

#[test]
fn endless_output_is_truncated() {
    let out = cli()
        .args(&["run", "-w", "/", "--allow", "yes", "--timeout", "1", "--max-output", "64", "-o", "json", "yes"])
        .exits(1);
    let json = out.json();
    assert_eq!(json["status"], "TIMEOUT");
    assert_eq!(json["stdout_truncated"], true);
    assert_eq!(json["stdout"].as_str().unwrap().len(), 64);
}

#[test]
fn json_output_is_the_full_result() {
    let out = cli().args(&["run", "-w", "/", "-o", "json", "echo hi"]).passes();
    let json = out.json();
    assert_eq!(json["command"], "echo hi");
    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(json["exit_code"], 0);
    assert_eq!(json["stdout"], "hi\n");
    assert_eq!(json["reason"], "Command completed successfully");
    assert_eq!(json["attempt"], 1);
    assert!(json["pid"].is_u64());
}

#[test]
fn blocked_json_has_no_pid() {
    let out = cli().args(&["run", "-w", "/", "--format", "json", "curl http://example.com"]).exits(2);
    let json = out.json();
    assert_eq!(json["status"], "BLOCKED");
    assert!(json["pid"].is_null());
    assert_eq!(json["duration_ms"], 0);
}

#[test]
fn failures_are_retried_up_to_max_attempts() {
    let out = cli()
        .args(&["run", "-w", "/", "--max-attempts", "3", "-o", "json", "ls /nonexistent"])
        .exits(1);
    assert_eq!(out.json()["attempt"], 3);
}

#[test]
fn blocked_is_never_retried() {
    let out = cli()
        .args(&["run", "-w", "/", "--max-attempts", "3", "-o", "json", "sudo ls"])
        .exits(2);
    assert_eq!(out.json()["attempt"], 1);
}

#[test]
fn empty_command_is_blocked() {
    cli().args(&["run", "-w", "/", ""]).exits(2).stderr_has("Empty command is not allowed");
}

#[test]
fn unterminated_quote_is_blocked() {
    cli()
        .args(&["run", "-w", "/", "echo 'oops"])
        .exits(2)
        .stderr_has("unterminated single quote");
}
