//! Shared helpers for CLI specs.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CORDON_ENV: &[&str] = &[
    "CORDON_LOG",
    "CORDON_WORKSPACE",
    "CORDON_TIMEOUT_SECS",
    "CORDON_MAX_OUTPUT_BYTES",
    "CORDON_POLICY",
];

/// The `cordon` binary in this test binary's profile directory.
///
/// Cargo only exports `CARGO_BIN_EXE_*` for a package's own binaries, and
/// `cordon` lives in another workspace member, so build it once per run
/// (a no-op when `cargo test --workspace` already has).
fn cordon_bin() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        // target/<profile>/deps/specs-<hash>
        let exe = std::env::current_exe().unwrap();
        let profile_dir = exe.parent().and_then(Path::parent).unwrap().to_path_buf();

        let mut build = std::process::Command::new(env!("CARGO"));
        build
            .args(["build", "--quiet", "-p", "cordon", "--bin", "cordon"])
            .current_dir(env!("CARGO_MANIFEST_DIR"));
        if profile_dir.ends_with("release") {
            build.arg("--release");
        }
        let status = build.status().unwrap();
        assert!(status.success(), "cargo build -p cordon failed: {status}");

        let bin = profile_dir.join(format!("cordon{}", std::env::consts::EXE_SUFFIX));
        assert!(bin.exists(), "cordon binary missing at {}", bin.display());
        bin
    })
}

/// Builder for one `cordon` invocation, isolated from the caller's
/// `CORDON_*` environment.
pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::new(cordon_bin());
    for key in CORDON_ENV {
        cmd.env_remove(key);
    }
    CliBuilder { cmd }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Expect exit code 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Expect a non-zero exit code.
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        assert!(!output.status.success(), "expected failure, got success\n{}", describe(&output));
        RunAssert { output }
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        assert_eq!(output.status.code(), Some(code), "unexpected exit code\n{}", describe(&output));
        RunAssert { output }
    }
}

fn describe(output: &std::process::Output) -> String {
    format!(
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}\n{}", describe(&self.output));
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}\n{}", describe(&self.output));
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}

/// A temporary workspace directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Canonical path of the workspace root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    pub fn path_str(&self) -> String {
        self.path().display().to_string()
    }

    /// Write a file relative to the root, creating parents.
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// `cordon` running inside this workspace.
    pub fn cordon(&self) -> CliBuilder {
        cli().current_dir(self.dir.path())
    }
}
