//! Business "add entry" form
//!
//! An entry may be tied to a catalog item or expense template. Picking one
//! fills the amount from its selling price or default amount.

use chrono::NaiveDate;

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::category::business_categories_for;
use crate::models::{
    BusinessEntryType, ExpenseDefinitionId, ExpenseKind, Money, NewBusinessEntry, ProductId,
    ReferenceKind, ServiceId,
};
use crate::routes::Route;
use crate::store::Store;

use super::input::TextInput;
use super::onboarding::palette_step;
use super::transaction_form::TransactionField as EntryField;
use super::FormScreen;

/// Something an entry can point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReference {
    pub kind: ReferenceKind,
    pub id: String,
    pub name: String,
    pub amount: Option<Money>,
}

impl EntryReference {
    /// The referenced record must still be in the catalog
    pub fn ensure_exists(&self, store: &Store) -> LedgerlyResult<()> {
        let found = match self.kind {
            ReferenceKind::Product => ProductId::parse(&self.id)
                .ok()
                .and_then(|id| store.find_product(id))
                .is_some(),
            ReferenceKind::Service => ServiceId::parse(&self.id)
                .ok()
                .and_then(|id| store.find_service(id))
                .is_some(),
            ReferenceKind::Salary | ReferenceKind::Petty => ExpenseDefinitionId::parse(&self.id)
                .ok()
                .and_then(|id| store.find_expense_definition(id))
                .is_some(),
        };
        if found {
            return Ok(());
        }
        Err(match self.kind {
            ReferenceKind::Product => LedgerlyError::product_not_found(&self.name),
            ReferenceKind::Service => LedgerlyError::service_not_found(&self.name),
            ReferenceKind::Salary | ReferenceKind::Petty => {
                LedgerlyError::expense_definition_not_found(&self.name)
            }
        })
    }

    /// Category used when the form has none yet
    fn default_category(&self) -> &'static str {
        match self.kind {
            ReferenceKind::Product => "Product Sale",
            ReferenceKind::Service => "Service Fee",
            ReferenceKind::Salary => "Salaries",
            ReferenceKind::Petty => "Operations",
        }
    }
}

/// References offered for an entry type: catalog items for revenue,
/// expense templates for expenses, nothing for investments
pub fn references_for(store: &Store, kind: BusinessEntryType) -> Vec<EntryReference> {
    match kind {
        BusinessEntryType::Revenue => store
            .products()
            .iter()
            .map(|p| EntryReference {
                kind: ReferenceKind::Product,
                id: p.id.as_uuid().to_string(),
                name: p.name.clone(),
                amount: Some(p.selling_price),
            })
            .chain(store.services().iter().map(|s| EntryReference {
                kind: ReferenceKind::Service,
                id: s.id.as_uuid().to_string(),
                name: s.name.clone(),
                amount: Some(s.selling_price),
            }))
            .collect(),
        BusinessEntryType::Expense => store
            .expense_definitions()
            .iter()
            .map(|d| EntryReference {
                kind: match d.expense_type {
                    ExpenseKind::Salary => ReferenceKind::Salary,
                    ExpenseKind::Petty => ReferenceKind::Petty,
                },
                id: d.id.as_uuid().to_string(),
                name: d.name.clone(),
                amount: d.default_amount,
            })
            .collect(),
        BusinessEntryType::Investment => Vec::new(),
    }
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    pub kind: BusinessEntryType,
    pub category: TextInput,
    pub palette_index: usize,
    pub reference: Option<EntryReference>,
    pub amount: TextInput,
    pub date: TextInput,
    pub notes: TextInput,
    pub focus: EntryField,
}

impl EntryForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: BusinessEntryType::Revenue,
            category: TextInput::new("Category").placeholder("Pick or type"),
            palette_index: 0,
            reference: None,
            amount: TextInput::new("Amount").placeholder("0"),
            date: TextInput::new("Date").content(today.format("%Y-%m-%d").to_string()),
            notes: TextInput::new("Notes").placeholder("Optional"),
            focus: EntryField::default(),
        }
    }

    pub fn palette(&self) -> &'static [&'static str] {
        business_categories_for(self.kind)
    }

    /// Switching type clears the category and any reference
    pub fn set_kind(&mut self, kind: BusinessEntryType) {
        if self.kind != kind {
            self.kind = kind;
            self.category.clear();
            self.palette_index = 0;
            self.reference = None;
        }
    }

    pub fn cycle_kind(&mut self) {
        let all = BusinessEntryType::ALL;
        let index = all.iter().position(|k| *k == self.kind).unwrap_or(0);
        self.set_kind(all[(index + 1) % all.len()]);
    }

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

    pub fn select_reference(&mut self, reference: EntryReference) {
        if let Some(amount) = reference.amount {
            self.amount.set(amount.to_string());
        }
        if self.category.is_blank() {
            self.category.set(reference.default_category());
        }
        self.reference = Some(reference);
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    pub fn can_save(&self) -> bool {
        !self.category.is_blank() && !self.amount.is_blank()
    }

    pub fn to_input(&self, today: NaiveDate) -> NewBusinessEntry {
        let date = NaiveDate::parse_from_str(self.date.trimmed(), "%Y-%m-%d").unwrap_or(today);
        let amount = Money::parse_lenient(self.amount.value());
        let mut input =
            NewBusinessEntry::new(self.kind, amount, date).with_category(self.category.trimmed());
        if let Some(reference) = &self.reference {
            input =
                input.with_reference(reference.id.clone(), reference.kind, reference.name.clone());
        }
        let notes = self.notes.trimmed();
        if !notes.is_empty() {
            input = input.with_notes(notes);
        }
        input
    }

    pub fn save(&self, store: &mut Store, today: NaiveDate) -> LedgerlyResult<Route> {
        if !self.can_save() {
            return Err(LedgerlyError::Validation(
                "Category and amount are required".into(),
            ));
        }
        if let Some(reference) = &self.reference {
            reference.ensure_exists(store)?;
        }
        store.add_business_entry(self.to_input(today));
        Ok(Route::BusinessDashboard)
    }
}

impl FormScreen for EntryForm {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        Some(match self.focus {
            EntryField::Category => &mut self.category,
            EntryField::Amount => &mut self.amount,
            EntryField::Date => &mut self.date,
            EntryField::Notes => &mut self.notes,
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
    use crate::models::{NewExpenseDefinition, NewProduct};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_type_switch_clears_category() {
        let mut form = EntryForm::new(today());
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Product Sale");
        form.cycle_palette(true);
        assert_eq!(form.category.value(), "Service Fee");
        form.cycle_kind();
        assert_eq!(form.kind, BusinessEntryType::Expense);
        assert!(form.category.is_blank());
    }

    #[test]
    fn test_product_reference_prefills_amount() {
        let mut store = Store::new();
        store.add_product(NewProduct {
            name: "Premium Widget".into(),
            category: "Electronics".into(),
            cost_price: Money::from_units(50),
            selling_price: Money::from_units(99),
            quantity: 25,
        });

        let mut form = EntryForm::new(today());
        let refs = references_for(&store, BusinessEntryType::Revenue);
        form.select_reference(refs[0].clone());
        assert_eq!(form.amount.value(), "99");
        assert_eq!(form.category.value(), "Product Sale");

        form.save(&mut store, today()).unwrap();
        let entry = &store.business_entries()[0];
        assert_eq!(entry.ref_name.as_deref(), Some("Premium Widget"));
        assert_eq!(entry.ref_type, Some(ReferenceKind::Product));
        assert_eq!(entry.amount, Money::from_units(99));
    }

    #[test]
    fn test_expense_template_reference() {
        let mut store = Store::new();
        store.add_expense_definition(NewExpenseDefinition {
            name: "Payroll".into(),
            expense_type: ExpenseKind::Salary,
            default_amount: Some(Money::from_units(3000)),
        });
        store.add_expense_definition(NewExpenseDefinition {
            name: "Tea".into(),
            expense_type: ExpenseKind::Petty,
            default_amount: None,
        });

        let refs = references_for(&store, BusinessEntryType::Expense);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].kind, ReferenceKind::Salary);

        let mut form = EntryForm::new(today());
        form.set_kind(BusinessEntryType::Expense);
        form.select_reference(refs[1].clone());
        assert!(form.amount.is_blank());
        assert!(!form.can_save());
        assert!(references_for(&store, BusinessEntryType::Investment).is_empty());
    }

    #[test]
    fn test_reference_to_missing_item_is_rejected() {
        let mut other = Store::new();
        other.add_product(NewProduct {
            name: "Ghost".into(),
            category: "Misc".into(),
            cost_price: Money::from_units(1),
            selling_price: Money::from_units(2),
            quantity: 1,
        });
        let stale = references_for(&other, BusinessEntryType::Revenue).remove(0);

        let mut store = Store::new();
        let mut form = EntryForm::new(today());
        form.select_reference(stale);
        let err = form.save(&mut store, today()).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.business_entries().is_empty());
    }
}
