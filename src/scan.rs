//! Source tree scanning
//!
//! Walks a source directory and runs the matching extractor over every file,
//! merging the results into one list of candidate symbols.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::parser::{CSourceExtractor, SymbolExtractor, UiMarkupExtractor, detect_source_kind};

pub struct SourceScanner {
    extractors: Vec<Arc<dyn SymbolExtractor>>,
}

impl SourceScanner {
    pub fn new(extractors: Vec<Arc<dyn SymbolExtractor>>) -> Self {
        Self { extractors }
    }

    /// Scanner for C sources using `prefixes` plus UI definition files
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(vec![
            Arc::new(CSourceExtractor::new(prefixes)),
            Arc::new(UiMarkupExtractor::new()),
        ])
    }

    fn extractor_for(&self, path: &Path) -> Option<&Arc<dyn SymbolExtractor>> {
        self.extractors.iter().find(|e| e.can_extract(path))
    }

    /// Files under `source_dir` handled by one of the extractors, in a stable order
    pub fn source_files(&self, source_dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(source_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| warn!("Skipping unreadable entry: {}", e))
                    .ok()
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.extractor_for(path).is_some())
            .collect()
    }

    /// Extract symbols from a single file. Unreadable files yield nothing.
    pub fn scan_file(&self, path: &Path) -> Vec<String> {
        let Some(extractor) = self.extractor_for(path) else {
            return Vec::new();
        };

        match std::fs::read(path) {
            Ok(bytes) => extractor.extract(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Extract symbols from every source file under `source_dir`,
    /// deduplicated in first-seen order
    pub fn scan_directory(&self, source_dir: &Path) -> Vec<String> {
        let files = self.source_files(source_dir);
        info!("Scanning {} source files in {:?}", files.len(), source_dir);

        let mut symbols = IndexSet::new();
        for file in &files {
            let found = self.scan_file(file);
            debug!(
                kind = detect_source_kind(file).map_or("unknown", |k| k.as_str()),
                "Found {} symbols in {:?}",
                found.len(),
                file
            );
            symbols.extend(found);
        }

        symbols.into_iter().collect()
    }
}
