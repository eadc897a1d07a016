use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_sculpt::commands::single::{self, CheckOptions};
use git_sculpt::git::GitCli;

/// Check whether a local branch's changes are already in the base branch,
/// even when they were squashed, rebased, or cherry-picked, and optionally
/// remove it.
#[derive(Parser)]
#[command(name = "git-sculpt")]
#[command(version)]
struct Cli {
    /// Branch to check
    branch: String,

    /// Base branch or commit the branch is checked against
    #[arg(long, default_value = "master")]
    base: String,

    /// Remove the branch if it is safe
    #[arg(short = 'd', long = "delete")]
    delete: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend = GitCli::new(std::env::current_dir()?);

    single::execute(
        &backend,
        &cli.branch,
        &CheckOptions {
            base: cli.base,
            delete: cli.delete,
        },
    )
}
