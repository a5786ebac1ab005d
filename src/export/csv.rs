//! CSV export of the two ledgers (spreadsheet-compatible)

use std::io::Write;

use crate::error::LedgerlyResult;
use crate::store::Store;

/// Personal transactions, newest first
pub fn export_transactions_csv<W: Write>(store: &Store, writer: W) -> LedgerlyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Type", "Category", "Amount", "Notes"])?;

    for txn in store.transactions() {
        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.amount.to_string(),
            txn.notes.clone().unwrap_or_default(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Business entries, newest first
pub fn export_business_entries_csv<W: Write>(store: &Store, writer: W) -> LedgerlyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "ID", "Date", "Type", "Category", "Reference Type", "Reference", "Amount", "Notes",
    ])?;

    for entry in store.business_entries() {
        csv.write_record([
            entry.id.as_uuid().to_string(),
            entry.date.to_string(),
            entry.kind.to_string(),
            entry.category.clone().unwrap_or_default(),
            entry.ref_type.map(|r| r.to_string()).unwrap_or_default(),
            entry.ref_name.clone().unwrap_or_default(),
            entry.amount.to_string(),
            entry.notes.clone().unwrap_or_default(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};
    use chrono::NaiveDate;

    #[test]
    fn test_transactions_csv_quotes_commas() {
        let mut store = Store::new();
        store.add_transaction(
            NewTransaction::expense(
                "Groceries",
                Money::from_units(150),
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            )
            .with_notes("milk, eggs"),
        );

        let mut output = Vec::new();
        export_transactions_csv(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Type,Category,Amount,Notes");
        assert!(lines[1].ends_with(",2025-01-02,expense,Groceries,150,\"milk, eggs\""));
    }

    #[test]
    fn test_empty_business_csv_has_header_only() {
        let store = Store::new();
        let mut output = Vec::new();
        export_business_entries_csv(&store, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
