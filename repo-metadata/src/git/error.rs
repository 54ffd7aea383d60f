//! Version-control error types.

use thiserror::Error;

/// Errors that can occur while querying the version-control tool.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git executable not found.
    #[error("git executable '{program}' not found")]
    NotInstalled { program: String },

    /// Git invocation failed to start or complete.
    #[error("Failed to run git {args}: {source}")]
    Io {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// Git did not finish within the allotted time.
    #[error("git {args} timed out after {timeout_secs} seconds")]
    Timeout { args: String, timeout_secs: u64 },
}
