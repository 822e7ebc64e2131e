//! Logging setup
//!
//! Logs always go to a file in the data directory when it is writable.
//! With `-v` a compact copy is written to stderr. stdout carries only the
//! report.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::LOG_FILE_NAME;

/// Default filter directive for a verbosity count
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 | 1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` takes precedence over the verbosity level
fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)))
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must be held until
/// the process exits.
pub fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let appender = log_dir.and_then(|dir| {
        std::fs::create_dir_all(dir)
            .and_then(|_| {
                RollingFileAppender::builder()
                    .rotation(Rotation::NEVER)
                    .filename_prefix(LOG_FILE_NAME)
                    .build(dir)
                    .map_err(std::io::Error::other)
            })
            .inspect_err(|e| eprintln!("Failed to open log file in {:?}: {}", dir, e))
            .ok()
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter(verbose));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = (verbose > 0).then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(env_filter(verbose))
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    guard
}
