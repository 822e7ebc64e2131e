//! Validity interval of a symbol

use std::fmt;

use crate::symbols::version::Version;

/// Outcome of comparing a target version against a [`VersionRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    /// Target is older than the version that introduced the symbol
    TooNew,
    /// Target is past the version the symbol was deprecated in
    Deprecated,
    Valid,
}

/// Versions for which a symbol is documented, `min_version..=max_version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    pub min_version: Version,
    pub max_version: Version,
}

impl VersionRange {
    pub const fn new(min_version: Version, max_version: Version) -> Self {
        Self {
            min_version,
            max_version,
        }
    }

    /// Returns a copy of this range ending at `max_version`.
    pub fn with_max(self, max_version: Version) -> Self {
        Self {
            max_version,
            ..self
        }
    }

    /// Classify `target` against this range.
    ///
    /// The lower bound uses the full `(major, minor)` order. The upper bound
    /// compares major and minor independently: a target is deprecated when
    /// either of its components exceeds the matching component of
    /// `max_version`. A target with a lower major but a higher minor than
    /// `max_version` (e.g. 3.10 against 4.2) is therefore deprecated.
    pub fn classify(&self, target: Version) -> RangeStatus {
        if target < self.min_version {
            return RangeStatus::TooNew;
        }

        if target.major > self.max_version.major || target.minor > self.max_version.minor {
            return RangeStatus::Deprecated;
        }

        RangeStatus::Valid
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MIN: {}, MAX: {}", self.min_version, self.max_version)
    }
}
