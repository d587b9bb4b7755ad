//! CLI argument definitions and per-command modules.

pub mod fmt;
pub mod status;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Parser)]
#[command(
    name = "flagman",
    version,
    about = "Report CI stage outcomes as GitHub commit statuses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Post a commit status for a revision.
    Status(StatusArgs),

    /// Run the containerized clang-format check over a source directory.
    Fmt(FmtArgs),
}

/// Arguments for `flagman status`.
#[derive(Args)]
pub struct StatusArgs {
    /// Repository owner.
    #[arg(long)]
    pub owner: String,

    /// Repository name.
    #[arg(long)]
    pub repo: String,

    /// Commit SHA the status attaches to.
    #[arg(long)]
    pub sha: String,

    /// One of: error, failure, pending, success.
    #[arg(long)]
    pub state: String,

    /// URL linked from the status in the checks UI.
    #[arg(long)]
    pub target_url: Option<String>,

    /// Short description of the outcome.
    #[arg(long)]
    pub description: Option<String>,

    /// Status context shown in the checks UI (defaults to "default").
    #[arg(long, default_value = "")]
    pub context: String,

    /// GitHub API base URL (for GitHub Enterprise).
    #[arg(long, default_value = flagman_github::GitHubClient::DEFAULT_API_URL)]
    pub api_url: String,

    /// Read the token from this environment variable instead of
    /// auto-detection (GITHUB_TOKEN, then gh CLI).
    #[arg(long)]
    pub token_env: Option<String>,
}

/// Arguments for `flagman fmt`.
#[derive(Args)]
pub struct FmtArgs {
    /// Directory to check.
    pub dir: PathBuf,

    /// Override the formatter image.
    #[arg(long)]
    pub image: Option<String>,
}
