//! Shared testing utilities for quinegen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `quinegen` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("quinegen").expect("Failed to locate quinegen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to an output file in the work directory.
    pub fn artifact_path(&self, filename: &str) -> PathBuf {
        self.work_dir.join(filename)
    }

    /// Read an output file from the work directory.
    pub fn read_artifact(&self, filename: &str) -> String {
        let path = self.artifact_path(filename);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert that an output file exists in the work directory.
    pub fn assert_artifact_exists(&self, filename: &str) {
        assert!(self.artifact_path(filename).exists(), "{} should exist", filename);
    }

    /// Assert that an output file does not exist in the work directory.
    pub fn assert_artifact_not_exists(&self, filename: &str) {
        assert!(!self.artifact_path(filename).exists(), "{} should not exist", filename);
    }
}
