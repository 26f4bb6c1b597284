//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the wheelgate binary
pub fn wheelgate_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wheelgate"))
}

/// A temp directory populated with fixture files.
pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Create a file of `megabytes` MB filled with b'1'.
    pub fn file_mb(self, name: &str, megabytes: usize) -> Self {
        self.file_bytes(name, megabytes * 1024 * 1024)
    }

    /// Create a file of exactly `bytes` bytes.
    pub fn file_bytes(self, name: &str, bytes: usize) -> Self {
        std::fs::write(self.dir.path().join(name), vec![b'1'; bytes]).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
