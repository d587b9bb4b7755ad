//! # flagman-format
//!
//! Container-based source formatting check for Flagman. Runs a pinned
//! clang-format image over a mounted source tree in dry-run mode and
//! reports only whether the tree is clean — the surrounding orchestration
//! turns that verdict into a commit status.

mod check;
mod error;

pub use check::{FormatChecker, FormatOutcome};
pub use error::{Error, Result};
