//! Category palettes for `ledgerly categories`

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::category::{business_categories_for, personal_categories_for};
use crate::models::{BusinessEntryType, TransactionType};

#[derive(Tabled)]
struct PaletteRow {
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Categories")]
    categories: String,
}

/// The category suggestions the entry forms offer for a mode
pub fn format_category_palettes(business: bool) -> String {
    let rows: Vec<PaletteRow> = if business {
        BusinessEntryType::ALL
            .iter()
            .map(|kind| PaletteRow {
                kind: kind.label(),
                categories: business_categories_for(*kind).join(", "),
            })
            .collect()
    } else {
        [TransactionType::Income, TransactionType::Expense]
            .iter()
            .map(|kind| PaletteRow {
                kind: kind.label(),
                categories: personal_categories_for(*kind).join(", "),
            })
            .collect()
    };

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_palettes() {
        let table = format_category_palettes(false);
        assert!(table.contains("Salary, Miscellaneous"));
        assert!(table.contains("Home Bills"));
    }

    #[test]
    fn test_business_palettes() {
        let table = format_category_palettes(true);
        assert!(table.contains("Revenue"));
        assert!(table.contains("Product Sale"));
        assert!(table.contains("Real Estate"));
    }
}
