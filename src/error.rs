//! Error types for relbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from a bump operation.
///
/// Every variant aborts the operation immediately; there is no retry and no
/// partial application. Variants fall into three groups: not-found (root or
/// manifest missing), parse (version line absent or malformed), and I/O.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error(
        "No project root found from '{0}'. Run from within a git working tree or pass --manifest <PATH>"
    )]
    ProjectRootNotFound(PathBuf),

    #[error("No manifest file found at '{0}'")]
    ManifestNotFound(PathBuf),

    #[error("No line matching `version = \"X.Y.Z\"` found in '{0}'")]
    VersionLineMissing(PathBuf),

    #[error("Failed to parse version '{version}' in '{path}': {source}")]
    InvalidVersion {
        path: PathBuf,
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
