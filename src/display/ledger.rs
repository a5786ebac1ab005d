//! Ledger row formatting

use crate::models::{BusinessEntry, Money, Transaction};

/// Amount with a leading `+`/`-` and the currency symbol: `+₹5000`
pub fn format_signed(sign: char, amount: Money, symbol: &str) -> String {
    format!("{}{}", sign, amount.abs().format_with_symbol(symbol))
}

/// One line of the recent-transactions list
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {:20} {:>12}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 20),
        format_signed(txn.kind.sign(), txn.amount, symbol)
    )
}

pub fn format_entry_row(entry: &BusinessEntry, symbol: &str) -> String {
    format!(
        "{} {:10} {:20} {:>12}",
        entry.date.format("%Y-%m-%d"),
        entry.kind.label(),
        truncate(entry.label(), 20),
        format_signed(entry.kind.sign(), entry.amount, symbol)
    )
}

/// Truncate to `max_len` characters, ending in `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessEntryType, NewBusinessEntry, NewTransaction};
    use chrono::NaiveDate;

    #[test]
    fn test_transaction_row_signs() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let income = Transaction::from_input(NewTransaction::income(
            "Salary",
            Money::from_units(5000),
            date,
        ));
        let row = format_transaction_row(&income, "₹");
        assert!(row.starts_with("2025-01-15 Salary"));
        assert!(row.ends_with("+₹5000"));
    }

    #[test]
    fn test_entry_row_uses_label() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let entry = BusinessEntry::from_input(
            NewBusinessEntry::new(BusinessEntryType::Expense, Money::from_units(800), date)
                .with_category("Rent"),
        );
        let row = format_entry_row(&entry, "$");
        assert!(row.contains("Expense"));
        assert!(row.contains("Rent"));
        assert!(row.ends_with("-$800"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello", 10), "Hello");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("Groceries", 2), "Gr");
    }
}
