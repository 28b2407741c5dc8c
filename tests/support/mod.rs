//! Test support utilities for sopsenv integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// The directory holds a `.sopsenv.toml` whose decryptor is `cat`, so
/// "encrypted" documents are plain files and the whole pipeline runs
/// without sops. Child processes use `.current_dir()` so tests can run in
/// parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a project configured with the `cat` decryptor.
    pub fn new() -> Self {
        let t = Self::bare();
        t.write_config(CAT_CONFIG);
        t
    }

    /// Create a project without a config file.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project holding `name` with `content`.
    pub fn with_document(name: &str, content: &str) -> Self {
        let t = Self::new();
        t.write(name, content);
        t
    }

    /// Write a file into the project directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write test file");
        path
    }

    /// Replace `.sopsenv.toml`.
    pub fn write_config(&self, content: &str) {
        self.write(".sopsenv.toml", content);
    }
}
