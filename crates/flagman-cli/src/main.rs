//! Flagman CLI - report CI stage outcomes to GitHub.

use clap::Parser;

mod commands;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Fmt(args) => commands::fmt::run(&args.dir, args.image.as_deref()),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
