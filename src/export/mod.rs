//! Export of the session's data
//!
//! The profile screen's "Export Data" writes here. Formats:
//! - CSV: the active mode's ledger (spreadsheet-compatible)
//! - JSON: full session snapshot, machine-readable
//! - YAML: full session snapshot, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_business_entries_csv, export_transactions_csv};
pub use self::json::{export_session_json, ExportMetadata, SessionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_session_yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::LedgerlyPaths;
use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::Mode;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Csv, Self::Json, Self::Yaml];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = LedgerlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerlyError::Export(format!("Unknown format: {}", other))),
        }
    }
}

/// Write one export file into the exports directory and return its path
pub fn export_to_dir(
    store: &Store,
    paths: &LedgerlyPaths,
    format: ExportFormat,
    now: DateTime<Utc>,
) -> LedgerlyResult<PathBuf> {
    paths.ensure_directories()?;

    let subject = match (format, store.mode()) {
        (ExportFormat::Csv, Mode::Business) => "business-entries",
        (ExportFormat::Csv, _) => "transactions",
        _ => "session",
    };
    let path = paths.export_dir().join(format!(
        "ledgerly-{}-{}.{}",
        subject,
        now.format("%Y%m%d-%H%M%S"),
        format.extension()
    ));

    let file = File::create(&path)
        .map_err(|e| LedgerlyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match (format, store.mode()) {
        (ExportFormat::Csv, Mode::Business) => export_business_entries_csv(store, &mut writer)?,
        (ExportFormat::Csv, _) => export_transactions_csv(store, &mut writer)?,
        (ExportFormat::Json, _) => export_session_json(store, &mut writer)?,
        (ExportFormat::Yaml, _) => export_session_yaml(store, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| LedgerlyError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), format = format.extension(), "Exported session data");
    Ok(path)
}
