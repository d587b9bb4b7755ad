//! `flagman status` command - post one commit status.

use anyhow::Result;
use flagman_github::{Auth, GitHubClient, StatusOptions};

use crate::commands::StatusArgs;
use crate::output;

/// Run the status command.
pub fn run(args: StatusArgs) -> Result<()> {
    let auth = match args.token_env {
        Some(var) => Auth::EnvVar(var),
        None => Auth::auto(),
    };

    let summary = format!(
        "{} for {}/{}@{}",
        args.state, args.owner, args.repo, args.sha
    );

    let client = GitHubClient::with_base_url(auth, args.api_url);
    let options = StatusOptions {
        owner: args.owner,
        repo: args.repo,
        sha: args.sha,
        state: args.state,
        target_url: args.target_url,
        description: args.description,
        context: args.context,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(client.post_status(options))?;

    output::success(&format!("Posted {summary}"));
    Ok(())
}
