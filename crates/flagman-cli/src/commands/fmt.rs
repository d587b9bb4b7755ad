//! `flagman fmt` command - containerized formatting check.

use std::path::Path;

use anyhow::{Result, bail};
use flagman_format::{FormatChecker, FormatOutcome};

use crate::output;

/// Run the fmt command.
pub fn run(dir: &Path, image: Option<&str>) -> Result<()> {
    let checker = match image {
        Some(image) => FormatChecker::with_image(image),
        None => FormatChecker::new(),
    };

    output::info(&format!("Checking formatting in {}", dir.display()));

    match checker.check(dir)? {
        FormatOutcome::Clean => {
            output::success("Formatting clean");
            Ok(())
        }
        FormatOutcome::Dirty => {
            bail!("formatting violations found - run clang-format and commit the result")
        }
    }
}
