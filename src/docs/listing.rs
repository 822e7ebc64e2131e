//! Symbol listings scraped from reference HTML
//!
//! Two index layouts are understood:
//!
//! - Flat indexes (`api-index-full.html`, `api-index-deprecated.html`) carry
//!   one entry per line as a link whose `title` attribute reads like
//!   `"gtk_widget_show ()"`.
//! - The object index (`gtkobjects.html`) lists classes as reference entry
//!   titles. Entries after the link to the deprecated objects chapter are
//!   deprecated classes.
//!
//! Lines that do not fit the expected shape are skipped.

use tracing::debug;

use crate::symbols::database::VersionListing;

const TITLE_ATTR: &str = "title=";
const CALL_MARKER: &str = "()";
const REFENTRY_MARKER: &str = "class=\"refentrytitle";
const DEPRECATED_CHAPTER: &str = "DeprecatedObjects.html";

/// Classes found in an object index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectListing {
    pub available: Vec<String>,
    pub deprecated: Vec<String>,
}

/// Extract function and macro names from a flat index document.
pub fn parse_symbol_index(content: &str) -> Vec<String> {
    content.lines().filter_map(parse_index_line).collect()
}

fn parse_index_line(line: &str) -> Option<String> {
    let (_, after) = line.split_once(TITLE_ATTR)?;
    let title = after.split('>').next()?.replace('\u{a0}', " ");
    if !title.contains(CALL_MARKER) {
        return None;
    }

    let word = title.split_whitespace().next()?;
    let mut chars = word.chars();
    chars.next();
    let symbol = chars.as_str().trim();

    if symbol.is_empty() {
        debug!("Skipping index entry without a name: {}", line.trim());
        return None;
    }
    Some(symbol.to_string())
}

/// Extract class names starting with `class_prefix` from an object index document.
pub fn parse_object_index(content: &str, class_prefix: &str) -> ObjectListing {
    let mut listing = ObjectListing::default();
    let mut deprecated = false;

    for line in content.lines() {
        if line.contains("chapter") && line.contains(DEPRECATED_CHAPTER) {
            deprecated = true;
        }

        if !line.contains(REFENTRY_MARKER) {
            continue;
        }

        let Some(title) = line
            .split_once("html\">")
            .and_then(|(_, rest)| rest.split('<').next())
        else {
            continue;
        };

        if !title.starts_with(class_prefix) {
            continue;
        }

        if let Some(symbol) = title.split_whitespace().next() {
            if deprecated {
                listing.deprecated.push(symbol.to_string());
            } else {
                listing.available.push(symbol.to_string());
            }
        }
    }

    listing
}

/// Combine the three documents of one release into its listing
pub fn build_version_listing(
    symbol_index: &str,
    deprecated_index: &str,
    object_index: &str,
    class_prefix: &str,
) -> VersionListing {
    let objects = parse_object_index(object_index, class_prefix);

    let mut available = parse_symbol_index(symbol_index);
    available.extend(objects.available);

    let mut deprecated = parse_symbol_index(deprecated_index);
    deprecated.extend(objects.deprecated);

    VersionListing::new(available, deprecated)
}
