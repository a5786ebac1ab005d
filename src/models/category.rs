//! Category palettes offered by the entry forms
//!
//! Categories are plain strings everywhere in the ledger. These lists are
//! suggestions; forms also accept free text.

use super::business_entry::BusinessEntryType;
use super::transaction::TransactionType;

/// Every personal category, in palette order
pub const PERSONAL_CATEGORIES: &[&str] = &[
    "Home Bills",
    "Entertainment",
    "Groceries",
    "Snacks",
    "Health",
    "Education",
    "Grooming",
    "Shopping",
    "Transportation",
    "Gardening",
    "Insurance",
    "Housing",
    "Salary",
    "Miscellaneous",
];

/// Categories the income form offers
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Miscellaneous"];

/// Categories that always get a row on the budget screen
pub const BUDGET_CATEGORIES: &[&str] = &[
    "Groceries",
    "Entertainment",
    "Transportation",
    "Home Bills",
    "Shopping",
    "Health",
];

pub const REVENUE_CATEGORIES: &[&str] = &[
    "Product Sale",
    "Service Fee",
    "Subscription",
    "Consulting",
    "Other Income",
];

pub const BUSINESS_EXPENSE_CATEGORIES: &[&str] = &[
    "Inventory",
    "Marketing",
    "Operations",
    "Salaries",
    "Utilities",
    "Rent",
    "Other",
];

pub const INVESTMENT_CATEGORIES: &[&str] = &[
    "Equipment",
    "Marketing",
    "Technology",
    "Real Estate",
    "Stocks",
    "Other",
];

/// Suggested industry tags for business onboarding
pub const INDUSTRY_SUGGESTIONS: &[&str] = &[
    "Retail",
    "Food & Beverage",
    "Manufacturing",
    "Consulting",
    "Technology",
    "Healthcare",
    "Education",
    "Services",
];

/// Palette for a personal transaction type
pub fn personal_categories_for(kind: TransactionType) -> Vec<&'static str> {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES.to_vec(),
        TransactionType::Expense => PERSONAL_CATEGORIES
            .iter()
            .copied()
            .filter(|c| *c != "Salary")
            .collect(),
    }
}

/// Palette for a business entry type
pub fn business_categories_for(kind: BusinessEntryType) -> &'static [&'static str] {
    match kind {
        BusinessEntryType::Revenue => REVENUE_CATEGORIES,
        BusinessEntryType::Expense => BUSINESS_EXPENSE_CATEGORIES,
        BusinessEntryType::Investment => INVESTMENT_CATEGORIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_palette() {
        assert_eq!(
            personal_categories_for(TransactionType::Income),
            vec!["Salary", "Miscellaneous"]
        );
    }

    #[test]
    fn test_expense_palette_excludes_salary() {
        let palette = personal_categories_for(TransactionType::Expense);
        assert_eq!(palette.len(), PERSONAL_CATEGORIES.len() - 1);
        assert!(!palette.contains(&"Salary"));
        assert!(palette.contains(&"Miscellaneous"));
    }

    #[test]
    fn test_business_palettes() {
        assert_eq!(business_categories_for(BusinessEntryType::Revenue)[0], "Product Sale");
        assert!(business_categories_for(BusinessEntryType::Expense).contains(&"Rent"));
        assert!(business_categories_for(BusinessEntryType::Investment).contains(&"Real Estate"));
    }
}
