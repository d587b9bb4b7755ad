//! Containerized clang-format dry-run check.
//!
//! The caller-supplied directory is mounted read-only into a fixed clang
//! image; inside it a shell pipeline feeds every matching C/C++ file to
//! `clang-format --dry-run --Werror`. Only the pass/fail verdict leaves
//! this crate.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// File extensions the formatter is run over.
const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "h", "hh", "hpp"];

/// Exit codes docker reserves for its own failures (daemon error, command
/// not runnable, command not found) rather than the checked tool's.
const DOCKER_FAILURE_CODES: std::ops::RangeInclusive<i32> = 125..=127;

/// Outcome of a formatting check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// All matching files satisfy the configured style.
    Clean,
    /// At least one file would be reformatted.
    Dirty,
}

impl FormatOutcome {
    /// Whether the check passed.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Runs clang-format in dry-run mode inside a pinned container image.
#[derive(Debug, Clone)]
pub struct FormatChecker {
    image: String,
}

impl FormatChecker {
    /// Image used when none is given. Pinned so results are reproducible
    /// across CI hosts.
    pub const DEFAULT_IMAGE: &'static str = "silkeh/clang:17";

    /// Create a checker using [`Self::DEFAULT_IMAGE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_image(Self::DEFAULT_IMAGE)
    }

    /// Create a checker using a specific image.
    #[must_use]
    pub fn with_image(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }

    /// Check all matching files under `dir`.
    ///
    /// # Errors
    /// Returns an error if the directory is unreadable, docker cannot be
    /// launched, or the container fails before producing a verdict.
    pub fn check(&self, dir: &Path) -> Result<FormatOutcome> {
        // Canonicalize so the bind mount gets an absolute host path.
        let dir = dir.canonicalize().map_err(Error::SourceDir)?;
        let mount = format!("{}:/src:ro", dir.display());

        let output = Command::new("docker")
            .args(["run", "--rm", "-v", &mount, "-w", "/src"])
            .arg(&self.image)
            .args(["sh", "-c", &format_pipeline()])
            .output()
            .map_err(Error::Runtime)?;

        interpret_exit(output.status.code(), &output.stderr)
    }
}

impl Default for FormatChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell pipeline run inside the container.
fn format_pipeline() -> String {
    let patterns: Vec<String> = SOURCE_EXTENSIONS
        .iter()
        .map(|ext| format!("-name '*.{ext}'"))
        .collect();

    format!(
        "find . -type f \\( {} \\) -print0 | xargs -0 -r clang-format --dry-run --Werror",
        patterns.join(" -o ")
    )
}

/// Map the container exit status to a verdict.
///
/// Zero is clean and docker's reserved codes are runtime failures; any
/// other code comes from clang-format (or xargs aggregating it) and means
/// formatting violations.
fn interpret_exit(code: Option<i32>, stderr: &[u8]) -> Result<FormatOutcome> {
    match code {
        Some(0) => Ok(FormatOutcome::Clean),
        Some(c) if !DOCKER_FAILURE_CODES.contains(&c) => Ok(FormatOutcome::Dirty),
        _ => Err(Error::CheckFailed {
            code,
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }),
    }
}
