//! Semver bump calculation.

use semver::Version;

/// Which version component to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Minor,
    Patch,
}

impl std::fmt::Display for BumpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}

/// Calculate the next version for a bump kind.
///
/// - Minor bump: increment minor, reset patch to zero.
/// - Patch bump: increment patch, leave the rest alone.
pub fn next_version(current: &Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Minor => Version::new(current.major, current.minor + 1, 0),
        BumpKind::Patch => Version::new(current.major, current.minor, current.patch + 1),
    }
}
