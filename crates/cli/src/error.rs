use std::path::PathBuf;

/// Wheelgate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Path is neither a wheel file nor an existing directory
    #[error("not a wheel file or directory: {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// Directory contains no wheel files
    #[error("no wheel files found in {}", .path.display())]
    NoWheelFiles { path: PathBuf },

    /// A wheel exceeds the size limit.
    #[error("wheel {} is over the limit of {}MB ({} bytes)", .path.display(), .limit_mb, .size)]
    SizeExceeded {
        path: PathBuf,
        size: u64,
        limit_mb: u64,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using wheelgate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes surfaced to the build pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All wheels within the limit
    Success = 0,
    /// At least one wheel over the limit
    SizeExceeded = 1,
    /// Bad path or argument
    UsageError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidPath { .. } | Error::NoWheelFiles { .. } => ExitCode::UsageError,
            Error::SizeExceeded { .. } => ExitCode::SizeExceeded,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
