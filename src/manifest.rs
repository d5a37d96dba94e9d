//! Manifest reading and format-preserving version rewrite.
//!
//! A manifest is any text file with one line of the form `version = "X.Y.Z"`.
//! Only the quoted triple is ever touched; every other byte passes through
//! unchanged.

use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use semver::Version;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::BumpError;

/// Anchored to the start of a line; the triple is capture group 1.
const VERSION_LINE_PATTERN: &str = r#"(?m)^version = "(\d+\.\d+\.\d+)""#;

/// A loaded manifest with its extracted version.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    content: String,
    version: Version,
    /// Byte range of the triple inside `content`.
    version_span: Range<usize>,
}

impl Manifest {
    /// Read a manifest from disk and extract its version line.
    pub fn load(path: &Path) -> Result<Self, BumpError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BumpError::ManifestNotFound(path.to_path_buf())
            } else {
                BumpError::ReadFailed {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let re = regex_lite::Regex::new(VERSION_LINE_PATTERN).unwrap();

        let triple = re
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| BumpError::VersionLineMissing(path.to_path_buf()))?;

        let version =
            Version::parse(triple.as_str()).map_err(|e| BumpError::InvalidVersion {
                path: path.to_path_buf(),
                version: triple.as_str().to_string(),
                source: e,
            })?;

        debug!(path = %path.display(), %version, "loaded manifest");

        let version_span = triple.range();
        Ok(Manifest {
            path: path.to_path_buf(),
            content,
            version,
            version_span,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Rewrite the manifest on disk with `new_version` in place of the
    /// current triple.
    ///
    /// The full new content is rendered up front and written to a temporary
    /// file next to the manifest, then renamed over it, so a failure at any
    /// point leaves the original untouched.
    pub fn write_version(&self, new_version: &Version) -> Result<(), BumpError> {
        let mut new_content =
            String::with_capacity(self.content.len() + new_version.to_string().len());
        new_content.push_str(&self.content[..self.version_span.start]);
        new_content.push_str(&new_version.to_string());
        new_content.push_str(&self.content[self.version_span.end..]);

        self.persist(&new_content)?;

        debug!(path = %self.path.display(), old = %self.version, new = %new_version, "rewrote manifest");
        Ok(())
    }

    fn persist(&self, content: &str) -> Result<(), BumpError> {
        let write_failed = |e: std::io::Error| BumpError::WriteFailed {
            path: self.path.clone(),
            source: e,
        };

        // Same directory as the target so the final rename stays on one
        // filesystem.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
        tmp.write_all(content.as_bytes()).map_err(write_failed)?;
        tmp.persist(&self.path)
            .map_err(|e| write_failed(e.error))?;

        Ok(())
    }
}
