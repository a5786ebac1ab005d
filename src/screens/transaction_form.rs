//! Personal "add transaction" form

use chrono::NaiveDate;

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::category::personal_categories_for;
use crate::models::{Money, NewTransaction, TransactionType};
use crate::routes::Route;
use crate::store::Store;

use super::input::TextInput;
use super::onboarding::palette_step;
use super::FormScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Category,
    Amount,
    Date,
    Notes,
}

impl TransactionField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Notes,
            Self::Notes => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Notes,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Notes => Self::Date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub kind: TransactionType,
    /// Category text; palette picks write into it, free text is also allowed
    pub category: TextInput,
    pub palette_index: usize,
    pub amount: TextInput,
    pub date: TextInput,
    pub notes: TextInput,
    pub focus: TransactionField,
}

impl TransactionForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            category: TextInput::new("Category").placeholder("Pick or type"),
            palette_index: 0,
            amount: TextInput::new("Amount").placeholder("0"),
            date: TextInput::new("Date").content(today.format("%Y-%m-%d").to_string()),
            notes: TextInput::new("Notes").placeholder("Optional"),
            focus: TransactionField::default(),
        }
    }

    pub fn palette(&self) -> Vec<&'static str> {
        personal_categories_for(self.kind)
    }

    /// Switching type clears the category, since the palettes differ
    pub fn set_kind(&mut self, kind: TransactionType) {
        if self.kind != kind {
            self.kind = kind;
            self.category.clear();
            self.palette_index = 0;
        }
    }

    pub fn toggle_kind(&mut self) {
        let next = match self.kind {
            TransactionType::Income => TransactionType::Expense,
            TransactionType::Expense => TransactionType::Income,
        };
        self.set_kind(next);
    }

    /// Move the palette cursor and copy the highlighted category
    pub fn cycle_palette(&mut self, forward: bool) {
        let palette = self.palette();
        self.palette_index = palette_step(
            self.palette_index,
            palette.len(),
            forward,
            self.category.is_blank(),
        );
        if let Some(name) = palette.get(self.palette_index) {
            self.category.set(*name);
        }
    }

    /// Save is available once category and amount are filled in
    pub fn can_save(&self) -> bool {
        !self.category.is_blank() && !self.amount.is_blank()
    }

    /// The record this form would create. Unparseable amounts become zero;
    /// an unparseable date falls back to `today`.
    pub fn to_input(&self, today: NaiveDate) -> NewTransaction {
        let date = NaiveDate::parse_from_str(self.date.trimmed(), "%Y-%m-%d").unwrap_or(today);
        let notes = self.notes.trimmed();
        NewTransaction {
            kind: self.kind,
            category: self.category.trimmed().to_string(),
            amount: Money::parse_lenient(self.amount.value()),
            date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }

    pub fn save(&self, store: &mut Store, today: NaiveDate) -> LedgerlyResult<Route> {
        if !self.can_save() {
            return Err(LedgerlyError::Validation(
                "Category and amount are required".into(),
            ));
        }
        store.add_transaction(self.to_input(today));
        Ok(Route::PersonalHome)
    }
}

impl FormScreen for TransactionForm {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        Some(match self.focus {
            TransactionField::Category => &mut self.category,
            TransactionField::Amount => &mut self.amount,
            TransactionField::Date => &mut self.date,
            TransactionField::Notes => &mut self.notes,
        })
    }

    fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_save_requires_category_and_amount() {
        let mut store = Store::new();
        let mut form = TransactionForm::new(today());
        assert!(!form.can_save());
        form.amount.set("150");
        assert!(form.save(&mut store, today()).unwrap_err().is_validation());

        form.category.set("Groceries");
        assert_eq!(form.save(&mut store, today()).unwrap(), Route::PersonalHome);
        let saved = &store.transactions()[0];
        assert_eq!(saved.amount, Money::from_units(150));
        assert_eq!(saved.date, today());
        assert!(saved.notes.is_none());
    }

    #[test]
    fn test_switching_type_clears_category() {
        let mut form = TransactionForm::new(today());
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Home Bills");
        form.toggle_kind();
        assert_eq!(form.kind, TransactionType::Income);
        assert!(form.category.is_blank());
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Salary");
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Miscellaneous");
    }

    #[test]
    fn test_palette_starts_at_either_end_when_blank() {
        let mut form = TransactionForm::new(today());
        form.cycle_palette(false);
        assert_eq!(form.category.value(), "Miscellaneous");
        form.cycle_palette(false);
        assert_ne!(form.category.value(), "Miscellaneous");

        form.category.clear();
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Home Bills");
    }

    #[test]
    fn test_malformed_amount_becomes_zero() {
        let mut form = TransactionForm::new(today());
        form.category.set("Snacks");
        form.amount.set("abc");
        form.date.set("not a date");
        let input = form.to_input(today());
        assert!(input.amount.is_zero());
        assert_eq!(input.date, today());
    }
}
