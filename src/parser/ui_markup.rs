//! GtkBuilder UI definition extractor
//!
//! Collects the class of every object declared in `.ui` and `.glade` files:
//!
//! ```text
//! <object class="GtkWindow" id="main_window">
//! ```

use indexmap::IndexSet;
use regex::Regex;

use crate::parser::traits::SymbolExtractor;
use crate::parser::types::{SourceKind, detect_source_kind};

/// Extractor for .ui and .glade files
pub struct UiMarkupExtractor {
    /// Regex for the class attribute: `object class="GtkWindow"`
    object_class_re: Regex,
}

impl UiMarkupExtractor {
    pub fn new() -> Self {
        Self {
            object_class_re: Regex::new(r#"object class[^"]*"([^"]*)""#).unwrap(),
        }
    }
}

impl Default for UiMarkupExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor for UiMarkupExtractor {
    fn can_extract(&self, path: &std::path::Path) -> bool {
        detect_source_kind(path) == Some(SourceKind::UiMarkup)
    }

    fn extract(&self, content: &str) -> Vec<String> {
        let symbols: IndexSet<String> = content
            .lines()
            .filter_map(|line| self.object_class_re.captures(line))
            .filter_map(|caps| caps.get(1))
            .filter(|class| !class.as_str().is_empty())
            .map(|class| class.as_str().to_string())
            .collect();

        symbols.into_iter().collect()
    }
}
