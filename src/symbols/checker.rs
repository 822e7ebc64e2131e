//! Version compliance check for symbols

#[cfg(test)]
use mockall::automock;

use crate::symbols::database::SymbolDatabase;
use crate::symbols::range::{RangeStatus, VersionRange};
use crate::symbols::version::Version;

/// Trait for looking up the documented range of a symbol
#[cfg_attr(test, automock)]
pub trait SymbolLookup: Send + Sync {
    /// Get the documented range of a symbol, or None if it was never documented
    fn lookup(&self, name: &str) -> Option<VersionRange>;
}

impl SymbolLookup for SymbolDatabase {
    fn lookup(&self, name: &str) -> Option<VersionRange> {
        self.get(name).map(|record| record.range)
    }
}

/// Outcome of checking one symbol against one target version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Valid,
    /// Symbol appeared after the target version
    TooNew { introduced: Version },
    /// Symbol is deprecated as of a version before the target
    Deprecated { since: Version },
    /// Symbol does not appear in any listing
    Unknown,
}

/// Result of a symbol check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCheck {
    /// Queried symbol name
    pub symbol: String,
    pub classification: Classification,
}

/// Classify `symbol` against the `target` version
pub fn check_symbol<L: SymbolLookup + ?Sized>(
    lookup: &L,
    symbol: &str,
    target: Version,
) -> SymbolCheck {
    let classification = match lookup.lookup(symbol) {
        None => Classification::Unknown,
        Some(range) => match range.classify(target) {
            RangeStatus::TooNew => Classification::TooNew {
                introduced: range.min_version,
            },
            RangeStatus::Deprecated => Classification::Deprecated {
                since: range.max_version,
            },
            RangeStatus::Valid => Classification::Valid,
        },
    };

    SymbolCheck {
        symbol: symbol.to_string(),
        classification,
    }
}

/// Classify every symbol in `symbols`, preserving their order
pub fn check_symbols<L, I, S>(lookup: &L, symbols: I, target: Version) -> Vec<SymbolCheck>
where
    L: SymbolLookup + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symbols
        .into_iter()
        .map(|symbol| check_symbol(lookup, symbol.as_ref(), target))
        .collect()
}
