//! The bump pipeline: locate, read, compute, rewrite, report.

use std::path::{Path, PathBuf};

use semver::Version;
use tracing::debug;

use crate::error::BumpError;
use crate::manifest::Manifest;
use crate::project::{find_manifest, find_project_root};
use crate::version::{BumpKind, next_version};

/// Result of a successful bump.
pub struct BumpOutcome {
    pub manifest: PathBuf,
    pub previous: Version,
    pub next: Version,
}

/// Run one bump transaction.
///
/// With an explicit manifest path, discovery is skipped entirely. Otherwise
/// the manifest is found by ascending from the current working directory to
/// the top of the git working tree.
///
/// The sequence is read, compute, write; any failure aborts immediately and
/// leaves the manifest as it was.
pub fn run_bump(kind: BumpKind, manifest_path: Option<&Path>) -> Result<BumpOutcome, BumpError> {
    let manifest_path = match manifest_path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(|e| BumpError::ReadFailed {
                path: PathBuf::from("."),
                source: e,
            })?;
            let root = find_project_root(&cwd)?;
            find_manifest(&root)?
        }
    };

    let manifest = Manifest::load(&manifest_path)?;
    let previous = manifest.version().clone();
    let next = next_version(&previous, kind);

    debug!(%kind, %previous, %next, "bumping");
    manifest.write_version(&next)?;

    Ok(BumpOutcome {
        manifest: manifest_path,
        previous,
        next,
    })
}
