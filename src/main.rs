use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use gtk_symbol_check::config::{CheckConfig, cache_path, data_dir};
use gtk_symbol_check::docs::{CachingFetcher, DocumentCache, HttpFetcher};
use gtk_symbol_check::logging::init_logging;
use gtk_symbol_check::runner::run_check;
use gtk_symbol_check::symbols::Version;

#[derive(Parser)]
#[command(name = "gtk-symbol-check")]
#[command(version, about = "Check C/GtkBuilder sources for GTK symbols unavailable in a release")]
struct Cli {
    /// Source directory where project files are stored
    source_dir: PathBuf,

    /// GTK version to validate against (MAJOR.MINOR)
    #[arg(long = "gtk-version", value_name = "VERSION")]
    gtk_version: Option<Version>,

    /// Do not display undocumented symbols
    #[arg(long)]
    hide_not_found: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the API reference
    #[arg(long, value_name = "URL")]
    docs_url: Option<String>,

    /// Only use reference documents already in the cache
    #[arg(long)]
    offline: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<CheckConfig> {
        let mut config = match &self.config {
            Some(path) => CheckConfig::from_file(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => CheckConfig::default(),
        };

        if let Some(version) = self.gtk_version {
            config.report.target_version = version;
        }
        if self.hide_not_found {
            config.report.hide_not_found = true;
        }
        if let Some(url) = &self.docs_url {
            config.docs.base_url = url.clone();
        }
        if self.offline {
            config.docs.offline = true;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let data_dir = data_dir();
    let _guard = init_logging(cli.verbose, Some(&data_dir));
    info!("Starting gtk-symbol-check with {:?}", config);

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
    let cache = DocumentCache::new(&cache_path())
        .with_context(|| format!("Failed to open document cache in {:?}", data_dir))?;
    let fetcher = CachingFetcher::new(
        HttpFetcher::new(&config.docs.base_url),
        cache,
        config.docs.offline,
    );

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run_check(&fetcher, &config, &cli.source_dir));

    for line in &outcome.lines {
        println!("{}", line);
    }

    Ok(())
}
