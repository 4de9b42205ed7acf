//! Test environment builder for isolated Billboard testing.
//!
//! Provides `TestEnv` - an isolated working directory, home directory and
//! data directory, plus helpers to run the billboard binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the host
const SCRUBBED_VARS: &[&str] = &[
    "RUST_LOG",
    "BILLBOARD_CAROUSEL_MODE",
    "BILLBOARD_SHORTCUTS_DIR",
    "BILLBOARD_HTTP_PORT",
    "BILLBOARD_HTTP_ENABLED",
];

/// Result of running a billboard CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, one value per non-empty line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad json line {l:?}: {e}"))
            })
            .collect()
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the binary runs in
    pub work_dir: TempDir,
    /// Stands in for the user's home
    pub home_dir: TempDir,
    billboard_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("create work dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
            billboard_bin: PathBuf::from(env!("CARGO_BIN_EXE_billboard")),
        }
    }

    /// Data directory handed to the binary through `BILLBOARD_DATA_DIR`
    pub fn data_dir(&self) -> PathBuf {
        self.work_dir.path().join("data")
    }

    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir().join(relative)
    }

    /// Default shortcuts directory under the data directory
    pub fn shortcut_path(&self, relative: &str) -> PathBuf {
        self.data_dir().join("shortcuts").join(relative)
    }

    pub fn write_data_file(&self, relative: &str, content: &str) {
        write_file(&self.data_path(relative), content);
    }

    pub fn write_shortcut(&self, relative: &str) {
        write_file(&self.shortcut_path(relative), "[Desktop Entry]\nType=Application\n");
    }

    /// Write `./billboard.toml` in the working directory
    pub fn write_local_config(&self, toml: &str) {
        write_file(&self.work_dir.path().join("billboard.toml"), toml);
    }

    /// Write the user config under the isolated home
    pub fn write_user_config(&self, toml: &str) {
        write_file(
            &self
                .home_dir
                .path()
                .join(".config")
                .join("billboard")
                .join("config.toml"),
            toml,
        );
    }

    /// A command with the isolated environment applied, not yet spawned
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.billboard_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("BILLBOARD_TEST_HOME", self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("BILLBOARD_DATA_DIR", self.data_dir());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Run billboard in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run billboard with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute billboard");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
