//! Version-indexed symbol database
//!
//! The database is built once from per-version listings in two folds over the
//! same version series:
//!
//! 1. oldest to newest over the *available* listings, recording the first
//!    version each symbol appears in;
//! 2. newest to oldest over the *deprecated* listings, narrowing the upper
//!    bound to the oldest version whose listing names the symbol.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::symbols::range::VersionRange;
use crate::symbols::version::{Version, VersionSeries};

/// Symbols documented at a single version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionListing {
    /// Symbols documented as present
    pub available: Vec<String>,
    /// Symbols documented as deprecated
    pub deprecated: Vec<String>,
}

impl VersionListing {
    pub fn new(available: Vec<String>, deprecated: Vec<String>) -> Self {
        Self {
            available,
            deprecated,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.deprecated.is_empty()
    }
}

/// Listings keyed by version. Versions without an entry have empty listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolListings {
    entries: BTreeMap<Version, VersionListing>,
}

impl SymbolListings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, version: Version, listing: VersionListing) {
        self.entries.insert(version, listing);
    }

    /// Builder-style helper that appends to the available listing of `version`
    pub fn with_available<I, S>(mut self, version: Version, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(version)
            .or_default()
            .available
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Builder-style helper that appends to the deprecated listing of `version`
    pub fn with_deprecated<I, S>(mut self, version: Version, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(version)
            .or_default()
            .deprecated
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, version: Version) -> Option<&VersionListing> {
        self.entries.get(&version)
    }

    fn available(&self, version: Version) -> &[String] {
        self.entries
            .get(&version)
            .map(|l| l.available.as_slice())
            .unwrap_or_default()
    }

    fn deprecated(&self, version: Version) -> &[String] {
        self.entries
            .get(&version)
            .map(|l| l.deprecated.as_slice())
            .unwrap_or_default()
    }
}

/// A symbol name bound to the versions it is documented for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    pub name: String,
    pub range: VersionRange,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, range: VersionRange) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }
}

/// Read-only mapping from symbol name to [`SymbolRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolDatabase {
    records: IndexMap<String, SymbolRecord>,
}

impl SymbolDatabase {
    /// Build the database from `listings` over `series`.
    ///
    /// Listings for versions outside `series` are ignored. An empty series
    /// yields an empty database.
    pub fn build(series: &VersionSeries, listings: &SymbolListings) -> Self {
        let (Some(base), Some(newest)) = (series.base(), series.newest()) else {
            return Self::default();
        };

        let mut records: IndexMap<String, SymbolRecord> = IndexMap::new();

        for version in series.iter() {
            for symbol in listings.available(version) {
                if !records.contains_key(symbol) {
                    records.insert(
                        symbol.clone(),
                        SymbolRecord::new(symbol.as_str(), VersionRange::new(version, newest)),
                    );
                }
            }
        }
        debug!("Introduction pass recorded {} symbols", records.len());

        for version in series.iter().rev() {
            for symbol in listings.deprecated(version) {
                match records.get_mut(symbol) {
                    Some(record) => record.range = record.range.with_max(version),
                    None => {
                        records.insert(
                            symbol.clone(),
                            SymbolRecord::new(symbol.as_str(), VersionRange::new(base, version)),
                        );
                    }
                }
            }
        }
        debug!("Deprecation pass finished with {} symbols", records.len());

        Self { records }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Records in the order they were first inserted
    pub fn records(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
