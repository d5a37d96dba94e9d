//! Project root and manifest discovery.

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::BumpError;

/// Manifest file names probed at the project root, in order.
const MANIFEST_CANDIDATES: &[&str] = &["Cargo.toml", "pyproject.toml"];

/// Find the project root by ascending from `start` to the top of the git
/// working tree.
pub fn find_project_root(start: &Path) -> Result<PathBuf, BumpError> {
    let repo = Repository::discover(start)
        .map_err(|_| BumpError::ProjectRootNotFound(start.to_path_buf()))?;

    // Bare repositories have no working tree to hold a manifest.
    let root = repo
        .workdir()
        .ok_or_else(|| BumpError::ProjectRootNotFound(start.to_path_buf()))?
        .to_path_buf();

    debug!(root = %root.display(), "discovered project root");
    Ok(root)
}

/// Find the manifest file at the project root.
///
/// Probes the candidate names in order and returns the first that exists.
pub fn find_manifest(root: &Path) -> Result<PathBuf, BumpError> {
    for name in MANIFEST_CANDIDATES {
        let candidate = root.join(name);
        if candidate.is_file() {
            debug!(manifest = %candidate.display(), "found manifest");
            return Ok(candidate);
        }
    }

    Err(BumpError::ManifestNotFound(root.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_project_root_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let nested = dir.path().join("src/deeply/nested");
        fs::create_dir_all(&nested).unwrap();

        let root = find_project_root(&nested).unwrap();
        assert_eq!(
            root.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_project_root_outside_any_repo() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_project_root(dir.path());
        assert!(matches!(result, Err(BumpError::ProjectRootNotFound(_))));
    }

    #[test]
    fn test_find_manifest_prefers_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "version = \"1.0.0\"\n").unwrap();
        fs::write(dir.path().join("pyproject.toml"), "version = \"9.9.9\"\n").unwrap();

        let manifest = find_manifest(dir.path()).unwrap();
        assert!(manifest.ends_with("Cargo.toml"));
    }

    #[test]
    fn test_find_manifest_falls_back_to_pyproject() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "version = \"1.0.0\"\n").unwrap();

        let manifest = find_manifest(dir.path()).unwrap();
        assert!(manifest.ends_with("pyproject.toml"));
    }

    #[test]
    fn test_find_manifest_none_present() {
        let dir = tempfile::tempdir().unwrap();
        let result = find_manifest(dir.path());
        assert!(matches!(result, Err(BumpError::ManifestNotFound(_))));
    }
}
