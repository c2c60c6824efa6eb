//! Shared testing utilities for modrules CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `modrules` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("modrules").expect("Failed to locate modrules binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a target.toml into the working directory and return its path.
    pub fn write_target(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("target.toml");
        fs::write(&path, content).expect("Failed to write target.toml");
        path
    }
}
