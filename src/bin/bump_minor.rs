//! bump-minor - increment the minor version, resetting patch to zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use relbump::{BumpKind, run_bump};

/// Bump the minor version in the project manifest (X.Y.Z -> X.Y+1.0).
#[derive(Parser, Debug)]
#[command(name = "bump-minor")]
#[command(about = "Bump the minor version in the project manifest")]
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

    let outcome = run_bump(BumpKind::Minor, cli.manifest.as_deref())
        .context("Failed to bump minor version")?;

    println!("{} -> {}", outcome.previous, outcome.next);
    Ok(())
}
