//! Error types for target resolution and rendering.
//!
//! Per-candidate filesystem errors never surface here: a candidate that
//! cannot be checked counts as absent. These errors cover the whole-run
//! failures that stop a scan before it starts, plus output failures.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for target-directory and internal errors.
pub const EXIT_ERROR: u8 = 2;

/// Errors that abort a run.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use vibedetector::ScanError;
///
/// let error = ScanError::NotADirectory { path: PathBuf::from("/etc/hosts") };
/// assert_eq!(error.to_string(), "Not a directory: /etc/hosts");
/// assert_eq!(error.exit_code(), 2);
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// The working directory could not be read while making a relative
    /// target absolute.
    #[error("Cannot resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// The target directory does not exist or cannot be stat'ed.
    #[error("Directory does not exist: {}", .path.display())]
    NotFound {
        /// Absolute form of the requested target.
        path: PathBuf,
    },

    /// The target exists but is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory {
        /// Absolute form of the requested target.
        path: PathBuf,
    },

    /// JSON encoding of the report failed.
    #[error("Failed to encode JSON output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing rendered output failed (e.g. a closed pipe).
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ScanError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CurrentDir(_)
            | Self::NotFound { .. }
            | Self::NotADirectory { .. }
            | Self::Serialization(_)
            | Self::Output(_) => EXIT_ERROR,
        }
    }
}
