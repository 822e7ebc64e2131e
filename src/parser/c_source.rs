//! C source and header extractor
//!
//! Scrapes identifiers that start with one of the configured library prefixes.
//! This is token scraping, not C parsing:
//!
//! - preprocessor conditionals, includes and defines are skipped;
//! - `( ) : , # . *` separate tokens and `!` is dropped;
//! - any other punctuation stays attached (`gtk_main;` is kept as is).

use indexmap::IndexSet;

use crate::parser::traits::SymbolExtractor;
use crate::parser::types::{SourceKind, detect_source_kind};

const SKIPPED_DIRECTIVES: &[&str] = &["#if", "#else", "#elif", "#endif", "#include", "#define"];

const SEPARATORS: &[char] = &['(', ')', ':', ',', '#', '.', '*'];

/// Extractor for .c and .h files
pub struct CSourceExtractor {
    prefixes: Vec<String>,
}

impl CSourceExtractor {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    fn is_skipped(line: &str) -> bool {
        SKIPPED_DIRECTIVES
            .iter()
            .any(|directive| line.starts_with(directive))
    }
}

impl Default for CSourceExtractor {
    fn default() -> Self {
        Self::new(["gtk", "Gtk"])
    }
}

impl SymbolExtractor for CSourceExtractor {
    fn can_extract(&self, path: &std::path::Path) -> bool {
        detect_source_kind(path) == Some(SourceKind::CSource)
    }

    fn extract(&self, content: &str) -> Vec<String> {
        let mut symbols = IndexSet::new();

        for line in content.lines() {
            let line = line.trim();
            if Self::is_skipped(line) {
                continue;
            }

            let cleaned: String = line
                .chars()
                .filter(|c| *c != '!')
                .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
                .collect();

            for prefix in &self.prefixes {
                if !line.contains(prefix.as_str()) {
                    continue;
                }
                for token in cleaned.split_whitespace() {
                    if token.starts_with(prefix.as_str()) {
                        symbols.insert(token.to_string());
                    }
                }
            }
        }

        symbols.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case("gtk_widget_show(widget);", vec!["gtk_widget_show"])]
    #[case("#define GTK_FOO 1", vec![])]
    #[case("#include <gtk/gtk.h>", vec![])]
    #[case("#ifdef GTK_DISABLE_DEPRECATED", vec![])]
    #[case("#endif /* gtk */", vec![])]
    #[case("GtkWidget *window = gtk_window_new(GTK_WINDOW_TOPLEVEL);", vec!["gtk_window_new", "GtkWidget"])]
    #[case("if (!gtk_widget_get_visible(w)) {", vec!["gtk_widget_get_visible"])]
    #[case("gtk_main_quit;", vec!["gtk_main_quit;"])]
    #[case("priv.gtk_window = NULL;", vec!["gtk_window"])]
    #[case("g_signal_connect(button, \"clicked\", NULL, NULL);", vec![])]
    #[case("GtkBox", vec!["GtkBox"])]
    fn extract_returns_expected_tokens(#[case] line: &str, #[case] expected: Vec<&str>) {
        let extractor = CSourceExtractor::default();

        assert_eq!(extractor.extract(line), expected);
    }

    #[test]
    fn extract_deduplicates_in_first_seen_order() {
        let content = r#"
#include <gtk/gtk.h>

static void
activate (GtkApplication *app, gpointer user_data)
{
  GtkWidget *window;

  window = gtk_application_window_new (app);
  gtk_window_set_title (GTK_WINDOW (window), "Window");
  gtk_widget_show (window);
  gtk_widget_show (window);
}
"#;

        let extractor = CSourceExtractor::default();

        assert_eq!(
            extractor.extract(content),
            vec![
                "GtkApplication",
                "GtkWidget",
                "gtk_application_window_new",
                "gtk_window_set_title",
                "gtk_widget_show",
            ]
        );
    }

    #[test]
    fn extract_uses_configured_prefixes() {
        let extractor = CSourceExtractor::new(["gdk_"]);

        assert_eq!(
            extractor.extract("gdk_flush(); gtk_main();"),
            vec!["gdk_flush"]
        );
    }

    #[rstest]
    #[case("src/app.c", true)]
    #[case("src/app.h", true)]
    #[case("data/app.ui", false)]
    fn can_extract_matches_c_files(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(CSourceExtractor::default().can_extract(Path::new(path)), expected);
    }
}
