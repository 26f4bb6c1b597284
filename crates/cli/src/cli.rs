// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// CI gate that fails the build when wheel artifacts exceed a size limit
#[derive(Parser)]
#[command(name = "wheelgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Wheel file, or directory containing wheel files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Size limit in megabytes (negative values are treated as 0)
    #[arg(short = 'l', long, default_value_t = 170, value_name = "MB", allow_negative_numbers = true)]
    pub limit: i64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Report all oversized wheels instead of stopping at the first
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
