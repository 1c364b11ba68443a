use std::fmt;

/// A MAJOR.MINOR.PATCH triple. Components are unbounded non-negative
/// integers; no pre-release or build-metadata suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple {
            major,
            minor,
            patch,
        }
    }

    /// Compute a new triple from bump deltas, applying rollover rules.
    ///
    /// Precedence is strict: a nonzero major delta wins and resets minor
    /// and patch to zero; otherwise a nonzero minor delta wins and resets
    /// patch; otherwise the patch delta applies (which may be zero,
    /// producing no change). Pure, no I/O.
    pub fn bump(&self, major: u64, minor: u64, patch: u64) -> Self {
        if major != 0 {
            VersionTriple::new(self.major + major, 0, 0)
        } else if minor != 0 {
            VersionTriple::new(self.major, self.minor + minor, 0)
        } else {
            VersionTriple::new(self.major, self.minor, self.patch + patch)
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
