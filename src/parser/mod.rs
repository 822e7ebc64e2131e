//! Extractor layer
//! - traits.rs: SymbolExtractor trait definition
//! - types.rs: Common types (SourceKind)
//! - c_source.rs: C source and header extractor
//! - ui_markup.rs: GtkBuilder .ui/.glade extractor

pub mod c_source;
pub mod traits;
pub mod types;
pub mod ui_markup;

pub use c_source::CSourceExtractor;
pub use traits::SymbolExtractor;
pub use types::{SourceKind, detect_source_kind};
pub use ui_markup::UiMarkupExtractor;
