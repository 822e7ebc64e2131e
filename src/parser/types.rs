//! Common types for extractors

use std::path::Path;

/// Kind of source file symbols are scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// C source or header (.c, .h)
    CSource,
    /// GtkBuilder UI definition (.ui, .glade)
    UiMarkup,
}

impl SourceKind {
    /// Returns the string representation of the source kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::CSource => "c_source",
            SourceKind::UiMarkup => "ui_markup",
        }
    }
}

/// Detect the source kind of a file from its extension
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("c" | "h") => Some(SourceKind::CSource),
        Some("ui" | "glade") => Some(SourceKind::UiMarkup),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("src/main.c", Some(SourceKind::CSource))]
    #[case("include/window.h", Some(SourceKind::CSource))]
    #[case("/project/data/window.ui", Some(SourceKind::UiMarkup))]
    #[case("legacy/dialog.glade", Some(SourceKind::UiMarkup))]
    #[case("src/main.cpp", None)]
    #[case("Makefile", None)]
    #[case("notes.c.txt", None)]
    fn detect_source_kind_returns_expected(
        #[case] path: &str,
        #[case] expected: Option<SourceKind>,
    ) {
        assert_eq!(detect_source_kind(Path::new(path)), expected);
    }
}
