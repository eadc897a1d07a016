use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_sculpt::commands::sweep::{self, SweepOptions};
use git_sculpt::git::GitCli;

/// Sweep local branches whose changes are already in the base branch.
///
/// Without flags every eligible branch is checked and reported; nothing is
/// deleted. Use -i to confirm each removal individually, or --all to remove
/// every safe branch after a single confirmation.
#[derive(Parser)]
#[command(name = "git-bleach")]
#[command(version)]
struct Cli {
    /// Base branch or commit branches are checked against
    #[arg(long, default_value = "master")]
    base: String,

    /// Prompt per safe branch before removing it
    #[arg(short = 'i', long = "interactive", conflicts_with = "all")]
    interactive: bool,

    /// Remove all safe branches after a single confirmation
    #[arg(long)]
    all: bool,

    /// Skip the confirmation in --all mode
    #[arg(short = 'y', long = "yes", requires = "all")]
    yes: bool,
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
    let options = SweepOptions {
        base: cli.base,
        assume_yes: cli.yes,
    };

    if cli.interactive {
        sweep::interactive(&backend, &options)
    } else if cli.all {
        sweep::remove_all(&backend, &options)
    } else {
        sweep::report(&backend, &options)
    }
}
