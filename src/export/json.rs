//! JSON export of the whole session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::{
    Budget, BusinessEntry, BusinessProfile, ExpenseDefinition, Investment, Mode, Product, Service,
    Transaction, UserProfile,
};
use crate::store::Store;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of everything the session holds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub mode: Mode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<BusinessProfile>,
    pub transactions: Vec<Transaction>,
    pub budget: Budget,
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub expense_definitions: Vec<ExpenseDefinition>,
    pub business_entries: Vec<BusinessEntry>,
    pub investments: Vec<Investment>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub business_entry_count: usize,
    pub catalog_count: usize,
    pub investment_count: usize,
    /// Earliest dated record across both ledgers
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

impl SessionExport {
    pub fn from_store(store: &Store) -> Self {
        let dates: Vec<_> = store
            .transactions()
            .iter()
            .map(|t| t.date)
            .chain(store.business_entries().iter().map(|e| e.date))
            .collect();

        let metadata = ExportMetadata {
            transaction_count: store.transactions().len(),
            business_entry_count: store.business_entries().len(),
            catalog_count: store.products().len()
                + store.services().len()
                + store.expense_definitions().len(),
            investment_count: store.investments().len(),
            earliest: dates.iter().min().map(|d| d.to_string()),
            latest: dates.iter().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            mode: store.mode(),
            user_profile: store.user_profile().cloned(),
            business_profile: store.business_profile().cloned(),
            transactions: store.transactions().to_vec(),
            budget: store.budget().clone(),
            products: store.products().to_vec(),
            services: store.services().to_vec(),
            expense_definitions: store.expense_definitions().to_vec(),
            business_entries: store.business_entries().to_vec(),
            investments: store.investments().to_vec(),
            metadata,
        }
    }
}

/// Write the session as pretty-printed JSON
pub fn export_session_json<W: Write>(store: &Store, writer: &mut W) -> LedgerlyResult<()> {
    let export = SessionExport::from_store(store);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerlyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerlyError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let mut store = Store::new();
        store.set_mode(Mode::Personal);
        store.add_transaction(NewTransaction::income(
            "Salary",
            Money::from_units(5000),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ));
        store.add_transaction(NewTransaction::expense(
            "Groceries",
            Money::from_units(150),
            NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
        ));

        let mut output = Vec::new();
        export_session_json(&store, &mut output).unwrap();
        let parsed: SessionExport = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.transactions.len(), 2);
        assert_eq!(parsed.metadata.earliest.as_deref(), Some("2025-01-01"));
        assert_eq!(parsed.metadata.latest.as_deref(), Some("2025-01-09"));
        assert_eq!(parsed.mode, Mode::Personal);
    }
}
