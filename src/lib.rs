//! relbump - CLI tools that bump the semantic version stored in a project manifest.
//!
//! # Overview
//!
//! Two binaries share this library: `bump-minor` increments the minor
//! component and resets patch to zero, `bump-patch` increments the patch
//! component. Each invocation locates the project manifest (by ascending to
//! the top of the git working tree, or via an explicit path), rewrites the
//! `version = "X.Y.Z"` line in place, and prints the transition.

pub mod bump;
pub mod error;
pub mod manifest;
pub mod project;
pub mod version;

// Re-export commonly used types
pub use bump::{BumpOutcome, run_bump};
pub use error::BumpError;
pub use manifest::Manifest;
pub use version::{BumpKind, next_version};
