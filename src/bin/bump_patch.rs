//! bump-patch - increment the patch version.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use relbump::{BumpKind, run_bump};

/// Bump the patch version in the project manifest (X.Y.Z -> X.Y.Z+1).
#[derive(Parser, Debug)]
#[command(name = "bump-patch")]
#[command(about = "Bump the patch version in the project manifest")]
#[command(version)]
struct Cli {
    /// Explicit manifest path (skips project root discovery)
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = run_bump(BumpKind::Patch, cli.manifest.as_deref())
        .context("Failed to bump patch version")?;

    println!("{} -> {}", outcome.previous, outcome.next);
    Ok(())
}
