// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wheel size validation.
//!
//! Size violations are report data, not errors: `validate` only fails
//! for broken invocations (bad paths, unreadable metadata). The command
//! layer decides the process exit from the report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::limit::SizeLimit;
use crate::target::Target;

/// Outcome of checking a single wheel.
#[derive(Debug, Clone, Serialize)]
pub struct WheelCheck {
    /// Wheel file path.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,

    /// Whether the wheel is at or under the limit.
    pub passed: bool,
}

/// Aggregated results for one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    /// Effective limit in megabytes, after clamping.
    pub limit_mb: u64,

    /// True if a negative limit was clamped to 0.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub clamped: bool,

    /// Per-wheel outcomes, in validation order.
    pub checks: Vec<WheelCheck>,
}

impl SizeReport {
    /// Whether every checked wheel is within the limit.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// All oversized wheels, in validation order.
    pub fn violations(&self) -> impl Iterator<Item = &WheelCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// The first oversized wheel, if any.
    pub fn first_violation(&self) -> Option<&WheelCheck> {
        self.violations().next()
    }
}

/// Check one wheel's byte size against the limit.
///
/// A wheel exactly at `limit.bytes()` passes.
pub fn check_wheel(path: &Path, limit: &SizeLimit) -> Result<WheelCheck> {
    let metadata = std::fs::metadata(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let size = metadata.len();

    Ok(WheelCheck {
        path: path.to_path_buf(),
        size,
        passed: size <= limit.bytes(),
    })
}

/// Validate every wheel covered by `target` against `limit`.
///
/// With `keep_going` false, enumeration stops after the first oversized
/// wheel; that check is still included in the report.
pub fn validate(target: &Target, limit: &SizeLimit, keep_going: bool) -> Result<SizeReport> {
    let mut checks = Vec::new();

    for wheel in target.wheels()? {
        let check = check_wheel(&wheel, limit)?;
        tracing::debug!(
            path = %check.path.display(),
            size = check.size,
            passed = check.passed,
            "checked wheel"
        );
        let failed = !check.passed;
        checks.push(check);
        if failed && !keep_going {
            break;
        }
    }

    Ok(SizeReport {
        limit_mb: limit.megabytes(),
        clamped: limit.was_clamped(),
        checks,
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
