//! Symbol extractor trait definition

use std::path::Path;

/// Trait for scraping candidate symbol names out of source-like files
pub trait SymbolExtractor: Send + Sync {
    /// Check if this extractor handles the given file
    fn can_extract(&self, path: &Path) -> bool;

    /// Extract candidate symbols in first-seen order, without duplicates
    fn extract(&self, content: &str) -> Vec<String>;
}
