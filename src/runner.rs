//! End-to-end check of a source tree

use std::path::Path;

use tracing::info;

use crate::config::CheckConfig;
use crate::docs::fetcher::DocumentFetcher;
use crate::docs::loader::load_listings;
use crate::report::{Summary, render_report};
use crate::scan::SourceScanner;
use crate::symbols::checker::{SymbolCheck, check_symbols};
use crate::symbols::database::SymbolDatabase;

/// Result of checking a source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// One result per extracted symbol, in extraction order
    pub checks: Vec<SymbolCheck>,
    /// Report lines for the non-valid results
    pub lines: Vec<String>,
    pub summary: Summary,
}

/// Build the symbol database from the reference documents
pub async fn build_database(fetcher: &dyn DocumentFetcher, config: &CheckConfig) -> SymbolDatabase {
    let loaded = load_listings(fetcher, &config.docs.series(), &config.scan.class_prefix).await;
    let database = loaded.into_database();
    info!("Symbol database holds {} symbols", database.len());
    database
}

/// Check every symbol found under `source_dir` against `database`
pub fn check_source_tree(
    database: &SymbolDatabase,
    config: &CheckConfig,
    source_dir: &Path,
) -> CheckOutcome {
    let scanner = SourceScanner::with_prefixes(config.scan.symbol_prefixes.iter().cloned());
    let symbols = scanner.scan_directory(source_dir);

    let target = config.report.target_version;
    info!("Checking {} symbols against GTK {}", symbols.len(), target);

    let checks = check_symbols(database, &symbols, target);
    let lines = render_report(&checks, config.report.hide_not_found);
    let summary = Summary::from_checks(&checks);
    summary.log();

    CheckOutcome {
        checks,
        lines,
        summary,
    }
}

/// Build the database and check `source_dir` against it
pub async fn run_check(
    fetcher: &dyn DocumentFetcher,
    config: &CheckConfig,
    source_dir: &Path,
) -> CheckOutcome {
    let database = build_database(fetcher, config).await;
    check_source_tree(&database, config, source_dir)
}
