//! YAML export for human-readable snapshots

use std::io::Write;

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::export::json::SessionExport;
use crate::store::Store;

pub fn export_session_yaml<W: Write>(store: &Store, writer: &mut W) -> LedgerlyResult<()> {
    let export = SessionExport::from_store(store);
    let export_err = |e: std::io::Error| LedgerlyError::Export(e.to_string());

    writeln!(writer, "# Ledgerly session export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerlyError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessEntryType, Money, NewBusinessEntry};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let mut store = Store::new();
        store.add_business_entry(NewBusinessEntry::new(
            BusinessEntryType::Revenue,
            Money::from_units(2500),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        ));

        let mut output = Vec::new();
        export_session_yaml(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Ledgerly session export"));
        let parsed: SessionExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.business_entries.len(), 1);
        assert_eq!(parsed.business_entries[0].amount, Money::from_units(2500));
    }
}
