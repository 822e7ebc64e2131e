//! Fetcher test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use gtk_symbol_check::docs::error::FetchError;
use gtk_symbol_check::docs::fetcher::{DocumentFetcher, DocumentKind};
use gtk_symbol_check::symbols::Version;

/// Fetcher serving in-memory documents.
/// Releases registered with `with_release` have all three documents,
/// defaulting to empty bodies.
pub struct StaticFetcher {
    documents: HashMap<(Version, DocumentKind), String>,
    requests: AtomicUsize,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn with_release(mut self, version: Version) -> Self {
        for kind in DocumentKind::ALL {
            self.documents.entry((version, kind)).or_default();
        }
        self
    }

    pub fn with_document(mut self, version: Version, kind: DocumentKind, body: &str) -> Self {
        self = self.with_release(version);
        self.documents.insert((version, kind), body.to_string());
        self
    }

    /// Register every release of `versions` with empty documents
    pub fn with_releases(self, versions: impl IntoIterator<Item = Version>) -> Self {
        versions
            .into_iter()
            .fold(self, |fetcher, version| fetcher.with_release(version))
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, version: Version, kind: DocumentKind) -> Result<String, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(&(version, kind))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(format!("{}/{}", version, kind.file_name())))
    }
}

/// One flat index line for `symbol`
pub fn index_entry(symbol: &str) -> String {
    format!(
        "<dt><a class=\"link\" href=\"x.html\" title=\"{0}\u{a0}()\">{0}</a>, function</dt>",
        symbol
    )
}

/// A flat index document listing `symbols`
pub fn symbol_index(symbols: &[&str]) -> String {
    let entries: Vec<String> = symbols.iter().map(|s| index_entry(s)).collect();
    format!("<html><body><dl>\n{}\n</dl></body></html>", entries.join("\n"))
}

/// An object index document with `available` classes followed by the
/// deprecated chapter and `deprecated` classes
pub fn object_index(available: &[&str], deprecated: &[&str]) -> String {
    let entry = |class: &str| {
        format!(
            r#"<dt><span class="refentrytitle"><a href="{0}.html">{0}</a></span><span class="refpurpose"> - widget</span></dt>"#,
            class
        )
    };

    let mut lines = vec!["<html><body><dl>".to_string()];
    lines.extend(available.iter().map(|c| entry(*c)));
    lines.push(
        r#"<dt><span class="chapter"><a href="DeprecatedObjects.html">Deprecated</a></span></dt>"#
            .to_string(),
    );
    lines.extend(deprecated.iter().map(|c| entry(*c)));
    lines.push("</dl></body></html>".to_string());
    lines.join("\n")
}
