//! Check GTK symbols used by a source tree against the API reference of a
//! target GTK release.

pub mod config;
pub mod docs;
pub mod logging;
pub mod parser;
pub mod report;
pub mod runner;
pub mod scan;
pub mod symbols;
