//! Tracing setup
//!
//! The TUI owns the terminal, so in that mode events go to a log file under
//! the base directory. One-shot commands log to stderr.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LedgerlyPaths, Settings};
use crate::error::{LedgerlyError, LedgerlyResult};

static TRACING_INIT: Once = Once::new();

/// Where tracing output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Build the filter: `RUST_LOG` wins, otherwise the configured level for this crate
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("ledgerly={}", settings.log_level))
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(settings: &Settings, paths: &LedgerlyPaths, target: LogTarget) -> LedgerlyResult<()> {
    let mut outcome = Ok(());

    TRACING_INIT.call_once(|| {
        let filter = build_filter(settings);
        outcome = match target {
            LogTarget::Stderr => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| LedgerlyError::Config(format!("Failed to install logger: {}", e))),
            LogTarget::File => paths.ensure_directories().and_then(|_| {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(paths.log_file())
                    .map_err(|e| LedgerlyError::Io(format!("Failed to open log file: {}", e)))?;
                fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
                    .map_err(|e| LedgerlyError::Config(format!("Failed to install logger: {}", e)))
            }),
        };
    });

    if outcome.is_ok() {
        tracing::debug!(?target, "tracing initialised");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        let settings = Settings {
            log_level: "debug".into(),
            ..Settings::default()
        };
        // Only meaningful when RUST_LOG is unset; the call itself must not panic.
        let filter = build_filter(&settings);
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(filter.to_string(), "ledgerly=debug");
        }
    }
}
