//! Investment portfolio form

use chrono::NaiveDate;

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::{InvestmentCategory, InvestmentKind, Money, NewInvestment};
use crate::store::Store;

use super::input::TextInput;
use super::onboarding::cycle;
use super::FormScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentField {
    Name,
    Date,
    Amount,
}

#[derive(Debug, Clone)]
pub struct InvestmentsScreen {
    pub form_open: bool,
    pub category_index: usize,
    pub kind: InvestmentKind,
    pub name: TextInput,
    pub date: TextInput,
    pub amount: TextInput,
    pub focus: InvestmentField,
}

impl Default for InvestmentsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl InvestmentsScreen {
    pub fn new() -> Self {
        Self {
            form_open: false,
            category_index: 0,
            kind: InvestmentKind::Financial,
            name: TextInput::new("Name"),
            date: TextInput::new("Date").placeholder("YYYY-MM-DD"),
            amount: TextInput::new("Amount"),
            focus: InvestmentField::Name,
        }
    }

    pub fn category(&self) -> InvestmentCategory {
        InvestmentCategory::ALL[self.category_index % InvestmentCategory::ALL.len()]
    }

    /// Changing category resets the kind to the one that category implies
    pub fn cycle_category(&mut self, forward: bool) {
        self.category_index = cycle(self.category_index, InvestmentCategory::ALL.len(), forward);
        self.kind = self.category().default_kind();
    }

    pub fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            InvestmentKind::Financial => InvestmentKind::Physical,
            InvestmentKind::Physical => InvestmentKind::Financial,
        };
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
        self.focus = InvestmentField::Name;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        self.category_index = 0;
        self.kind = InvestmentKind::Financial;
        self.name.clear();
        self.date.clear();
        self.amount.clear();
    }

    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trimmed(), "%Y-%m-%d").ok()
    }

    pub fn can_save(&self) -> bool {
        !self.name.is_blank() && !self.amount.is_blank() && self.parsed_date().is_some()
    }

    pub fn save(&mut self, store: &mut Store) -> LedgerlyResult<()> {
        let Some(date) = self.parsed_date().filter(|_| self.can_save()) else {
            return Err(LedgerlyError::Validation(
                "Name, amount and date are required".into(),
            ));
        };
        store.add_investment(NewInvestment {
            category: self.category(),
            name: self.name.trimmed().to_string(),
            investment_type: self.kind,
            date,
            amount: Money::parse_lenient(self.amount.value()),
        });
        self.close_form();
        Ok(())
    }
}

impl FormScreen for InvestmentsScreen {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        if !self.form_open {
            return None;
        }
        Some(match self.focus {
            InvestmentField::Name => &mut self.name,
            InvestmentField::Date => &mut self.date,
            InvestmentField::Amount => &mut self.amount,
        })
    }

    fn next_field(&mut self) {
        self.focus = match self.focus {
            InvestmentField::Name => InvestmentField::Date,
            InvestmentField::Date => InvestmentField::Amount,
            InvestmentField::Amount => InvestmentField::Name,
        };
    }

    fn prev_field(&mut self) {
        self.focus = match self.focus {
            InvestmentField::Name => InvestmentField::Amount,
            InvestmentField::Date => InvestmentField::Name,
            InvestmentField::Amount => InvestmentField::Date,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_asset_sets_kind() {
        let mut screen = InvestmentsScreen::new();
        while screen.category() != InvestmentCategory::PhysicalAsset {
            screen.cycle_category(true);
        }
        assert_eq!(screen.kind, InvestmentKind::Physical);
        screen.cycle_category(true);
        assert_eq!(screen.kind, InvestmentKind::Financial);
    }

    #[test]
    fn test_save_requires_name_amount_and_date() {
        let mut store = Store::new();
        let mut screen = InvestmentsScreen::new();
        screen.open_form();
        screen.name.set("Index fund");
        screen.amount.set("2000");
        assert!(screen.save(&mut store).is_err());

        screen.date.set("2025-12-12");
        screen.save(&mut store).unwrap();
        let investment = &store.investments()[0];
        assert_eq!(investment.category, InvestmentCategory::Stocks);
        assert_eq!(investment.amount, Money::from_units(2000));
        assert!(!screen.form_open);
    }
}
