//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

/// Create a temporary git project containing a Cargo.toml manifest.
pub fn temp_project(manifest: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    Repository::init(dir.path()).expect("Failed to init git repository");
    fs::write(dir.path().join("Cargo.toml"), manifest).expect("Failed to write manifest");
    dir
}

/// Create a temporary git project with no manifest file.
pub fn temp_project_without_manifest() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    Repository::init(dir.path()).expect("Failed to init git repository");
    dir
}

/// Read the Cargo.toml manifest back from a temp project.
pub fn read_manifest(dir: &Path) -> String {
    fs::read_to_string(dir.join("Cargo.toml")).expect("Failed to read manifest")
}

/// Change the working directory for the duration of a test, restoring the
/// previous one on drop. Tests using this must be `#[serial]`.
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let previous = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to change directory");
        CwdGuard { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}
