//! Test support utilities for cellar integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working directory and cellar home. No
/// process-global state is mutated; child processes use `.current_dir()`
/// and explicit environment variables so tests can run in parallel.
pub struct Test {
    /// Working directory the workspace is bound to
    pub dir: TempDir,
    /// Cellar home (`CELLAR_HOME`)
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with the workspace initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize workspace: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an initialized environment with the given files written and
    /// added.
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (name, contents) in files {
            t.write(name, contents);
            let output = t.add(name);
            assert!(
                output.status.success(),
                "Failed to add {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Canonical working directory, as the child process sees it.
    pub fn root(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("failed to canonicalize temp dir")
    }

    /// Absolute path of `name` inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write a file inside the working directory, creating parents.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Read a file inside the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Directory holding workspace metadata files.
    pub fn store_dir(&self) -> PathBuf {
        self.home.path().join("workspaces")
    }

    /// Metadata files currently present in the store directory.
    pub fn store_files(&self) -> Vec<PathBuf> {
        let Ok(dir) = std::fs::read_dir(self.store_dir()) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = dir
            .map(|e| e.expect("failed to read dir entry").path())
            .filter(|p| p.extension().is_some_and(|e| e == "toml"))
            .collect();
        files.sort();
        files
    }

    /// Contents of the single workspace metadata file.
    pub fn store_contents(&self) -> String {
        let files = self.store_files();
        assert_eq!(files.len(), 1, "expected exactly one store file");
        std::fs::read_to_string(&files[0]).expect("failed to read store file")
    }
}

/// True if `path` exists.
pub fn exists(path: &Path) -> bool {
    path.exists()
}
