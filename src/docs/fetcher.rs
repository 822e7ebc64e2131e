//! Fetcher trait for retrieving API reference documents

#[cfg(test)]
use mockall::automock;

use crate::docs::error::FetchError;
use crate::symbols::version::Version;

/// Reference documents published for every release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Index of every documented function and macro
    SymbolIndex,
    /// Index of deprecated functions and macros
    DeprecatedIndex,
    /// Object hierarchy index, with deprecated classes in a separate chapter
    ObjectIndex,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::SymbolIndex,
        DocumentKind::DeprecatedIndex,
        DocumentKind::ObjectIndex,
    ];

    /// File name of the document under a version directory
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentKind::SymbolIndex => "api-index-full.html",
            DocumentKind::DeprecatedIndex => "api-index-deprecated.html",
            DocumentKind::ObjectIndex => "gtkobjects.html",
        }
    }

    /// Returns the string representation used as a cache key
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::SymbolIndex => "symbol_index",
            DocumentKind::DeprecatedIndex => "deprecated_index",
            DocumentKind::ObjectIndex => "object_index",
        }
    }
}

/// Trait for fetching the raw text of reference documents
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches one document of one release
    ///
    /// # Returns
    /// * `Ok(String)` - The raw document text
    /// * `Err(FetchError)` - If the document is unavailable
    async fn fetch(&self, version: Version, kind: DocumentKind) -> Result<String, FetchError>;
}
