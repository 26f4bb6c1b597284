// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path classification for validation targets.
//!
//! The input path is resolved once into a tagged target so the rest of
//! the pipeline never re-inspects the filesystem type.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::error::{Error, Result};

/// File extension that marks a built wheel archive.
const WHEEL_EXTENSION: &str = "whl";

/// A validated input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single wheel file.
    Wheel(PathBuf),
    /// A directory that should contain wheel files.
    Directory(PathBuf),
}

impl Target {
    /// Classify `path` as a wheel file or a directory.
    ///
    /// Anything else, including existing files without the `.whl`
    /// extension, is rejected with `InvalidPath`.
    pub fn resolve(path: &Path) -> Result<Self> {
        if path.is_file() && is_wheel(path) {
            Ok(Target::Wheel(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Target::Directory(path.to_path_buf()))
        } else {
            Err(Error::InvalidPath {
                path: path.to_path_buf(),
            })
        }
    }

    /// Wheel files covered by this target.
    ///
    /// For a directory, immediate children matching `*.whl` sorted by
    /// name; enumeration is non-recursive. An empty match set is an
    /// error: a build that produced no wheels should not pass the gate.
    pub fn wheels(&self) -> Result<Vec<PathBuf>> {
        match self {
            Target::Wheel(path) => Ok(vec![path.clone()]),
            Target::Directory(dir) => {
                let matcher = wheel_matcher();
                let entries = std::fs::read_dir(dir).map_err(|source| Error::Io {
                    path: dir.clone(),
                    source,
                })?;

                let mut wheels = Vec::new();
                for entry in entries {
                    let entry = entry.map_err(|source| Error::Io {
                        path: dir.clone(),
                        source,
                    })?;
                    let path = entry.path();
                    if path.is_file() && matcher.is_match(entry.file_name()) {
                        wheels.push(path);
                    }
                }

                if wheels.is_empty() {
                    return Err(Error::NoWheelFiles { path: dir.clone() });
                }

                // read_dir order is platform-dependent; sort so output and
                // the first violation are deterministic.
                wheels.sort();
                Ok(wheels)
            }
        }
    }
}

/// Matcher for wheel file names.
fn wheel_matcher() -> GlobMatcher {
    #[allow(clippy::expect_used)]
    let glob = Glob::new("*.whl").expect("static glob pattern is valid");
    glob.compile_matcher()
}

fn is_wheel(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == WHEEL_EXTENSION)
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
