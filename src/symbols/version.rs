//! Library release versions and the series of documented releases

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A library release identified by its major and minor components.
///
/// Ordering is lexicographic on `(major, minor)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid version '{0}': expected MAJOR.MINOR")]
pub struct ParseVersionError(pub String);

/// Parses "3", "3.12" or "3.12.4", padding missing components with zeros.
/// The patch component is accepted but ignored.
impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split('.').collect();
        let normalized = match parts.len() {
            1 => format!("{}.0.0", parts[0]),
            2 => format!("{}.{}.0", parts[0], parts[1]),
            _ => trimmed.to_string(),
        };
        let parsed =
            semver::Version::parse(&normalized).map_err(|_| ParseVersionError(s.to_string()))?;
        Ok(Self::new(parsed.major, parsed.minor))
    }
}

impl TryFrom<String> for Version {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The ascending list of documented releases, from `base` to `newest`
/// in steps of `minor_step` minor releases within one major line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSeries {
    versions: Vec<Version>,
}

impl VersionSeries {
    /// A zero `minor_step` is treated as 1.
    pub fn new(major: u64, min_minor: u64, max_minor: u64, minor_step: u64) -> Self {
        let step = minor_step.max(1) as usize;
        let versions = (min_minor..=max_minor)
            .step_by(step)
            .map(|minor| Version::new(major, minor))
            .collect();
        Self { versions }
    }

    /// Oldest version of the series
    pub fn base(&self) -> Option<Version> {
        self.versions.first().copied()
    }

    /// Newest version of the series
    pub fn newest(&self) -> Option<Version> {
        self.versions.last().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Version> + '_ {
        self.versions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn contains(&self, version: Version) -> bool {
        self.versions.binary_search(&version).is_ok()
    }

    /// Returns the prefix of the series ending at `last` (inclusive).
    pub fn truncated_at(&self, last: Version) -> Self {
        Self {
            versions: self
                .versions
                .iter()
                .copied()
                .take_while(|v| *v <= last)
                .collect(),
        }
    }

    /// Returns a series without any versions.
    pub fn empty() -> Self {
        Self {
            versions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.12", Version::new(3, 12))]
    #[case("3", Version::new(3, 0))]
    #[case("3.4.2", Version::new(3, 4))]
    #[case(" 4.0 ", Version::new(4, 0))]
    fn parse_accepts_partial_and_full_versions(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(input.parse::<Version>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("three.twelve")]
    #[case("3.x")]
    #[case("-1.0")]
    fn parse_rejects_malformed_versions(#[case] input: &str) {
        assert_eq!(
            input.parse::<Version>(),
            Err(ParseVersionError(input.to_string()))
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(3, 2) < Version::new(3, 10));
        assert!(Version::new(3, 12) < Version::new(4, 0));
        assert_eq!(Version::new(3, 4).to_string(), "3.4");
    }

    #[test]
    fn series_steps_from_base_to_max() {
        let series = VersionSeries::new(3, 0, 12, 2);

        assert_eq!(series.len(), 7);
        assert_eq!(series.base(), Some(Version::new(3, 0)));
        assert_eq!(series.newest(), Some(Version::new(3, 12)));
        assert!(series.contains(Version::new(3, 6)));
        assert!(!series.contains(Version::new(3, 5)));
    }

    #[test]
    fn truncated_series_keeps_prefix() {
        let series = VersionSeries::new(3, 0, 12, 2).truncated_at(Version::new(3, 4));

        assert_eq!(
            series.iter().collect::<Vec<_>>(),
            vec![Version::new(3, 0), Version::new(3, 2), Version::new(3, 4)]
        );
    }

    #[test]
    fn version_deserializes_from_string() {
        let version: Version = serde_json::from_str("\"3.8\"").unwrap();
        assert_eq!(version, Version::new(3, 8));
    }
}
