// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validate command implementation.

use wheelgate::cli::{Cli, OutputFormat};
use wheelgate::error::{Error, ExitCode};
use wheelgate::limit::{SizeLimit, human_size};
use wheelgate::target::Target;
use wheelgate::validate::validate;

/// Run the size gate and map the report to an exit code.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let limit = SizeLimit::new(cli.limit);
    if limit.was_clamped() {
        eprintln!(
            "wheelgate: limit {} is negative, treating it as 0",
            cli.limit
        );
    }

    let target = Target::resolve(&cli.path)?;
    tracing::debug!(resolved = ?target, limit_mb = limit.megabytes(), "resolved target");

    let report = validate(&target, &limit, cli.keep_going)?;

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for check in report.checks.iter().filter(|c| c.passed) {
                println!(
                    "ok: {} ({}) within limit {}MB",
                    check.path.display(),
                    human_size(check.size),
                    report.limit_mb
                );
            }
        }
    }

    match report.first_violation() {
        None => Ok(ExitCode::Success),
        Some(_) if cli.keep_going => {
            for violation in report.violations() {
                eprintln!(
                    "wheelgate: {}",
                    Error::SizeExceeded {
                        path: violation.path.clone(),
                        size: violation.size,
                        limit_mb: report.limit_mb,
                    }
                );
            }
            Ok(ExitCode::SizeExceeded)
        }
        Some(first) => Err(Error::SizeExceeded {
            path: first.path.clone(),
            size: first.size,
            limit_mb: report.limit_mb,
        }
        .into()),
    }
}
