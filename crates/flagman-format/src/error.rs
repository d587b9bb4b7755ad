//! Error types for flagman-format.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the format check.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source directory missing or unreadable.
    #[error("cannot access source directory")]
    SourceDir(#[source] std::io::Error),

    /// The container runtime could not be launched.
    #[error("failed to launch container runtime - is docker installed?")]
    Runtime(#[source] std::io::Error),

    /// The container ran but produced no formatting verdict.
    #[error("format check did not complete (exit code {code:?}): {stderr}")]
    CheckFailed {
        /// Container exit code, `None` if killed by a signal.
        code: Option<i32>,
        /// Captured stderr from the container runtime.
        stderr: String,
    },
}
