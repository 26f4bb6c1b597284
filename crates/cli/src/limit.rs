// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size limit handling and human-readable size formatting.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Wheel size limit in megabytes.
///
/// Negative limits from the command line are clamped to 0; the clamp is
/// remembered so the CLI can emit a notice before validation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimit {
    megabytes: u64,
    clamped: bool,
}

impl SizeLimit {
    /// Build a limit from a raw command-line value, clamping negatives to 0.
    pub fn new(megabytes: i64) -> Self {
        if megabytes < 0 {
            Self {
                megabytes: 0,
                clamped: true,
            }
        } else {
            Self {
                megabytes: megabytes as u64,
                clamped: false,
            }
        }
    }

    /// Limit in megabytes, after clamping.
    pub fn megabytes(&self) -> u64 {
        self.megabytes
    }

    /// Limit in bytes. Saturates for absurdly large limits, which keeps
    /// the "everything passes" semantics.
    pub fn bytes(&self) -> u64 {
        self.megabytes.saturating_mul(MB)
    }

    /// True if the raw value was negative and got clamped to 0.
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }
}

/// Format file size for human-readable output.
pub fn human_size(bytes: u64) -> String {
    if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
#[path = "limit_tests.rs"]
mod tests;
