//! Budget editor: the overall total and per-category limits
//!
//! Edits replace the whole budget record. An unparseable total keeps the
//! old total; an unparseable category limit becomes zero.

use crate::models::{Budget, Money};
use crate::services::PersonalService;
use crate::store::Store;

use super::input::TextInput;
use super::FormScreen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetTarget {
    Total,
    Category(String),
}

#[derive(Debug, Clone, Default)]
pub struct BudgetEditor {
    /// Highlighted row: 0 is the total, then one per category row
    pub selected: usize,
    pub editing: Option<BudgetTarget>,
    pub value: TextInput,
}

impl BudgetEditor {
    pub fn new() -> Self {
        Self {
            value: TextInput::new("Limit"),
            ..Self::default()
        }
    }

    /// Category names in the order the budget screen lists them
    pub fn rows(store: &Store) -> Vec<String> {
        PersonalService::new(store)
            .budget_status()
            .categories
            .into_iter()
            .map(|c| c.category)
            .collect()
    }

    pub fn move_selection(&mut self, store: &Store, forward: bool) {
        let len = Self::rows(store).len() + 1;
        self.selected = super::onboarding::cycle(self.selected, len, forward);
    }

    pub fn target_for_selection(&self, store: &Store) -> BudgetTarget {
        match self.selected {
            0 => BudgetTarget::Total,
            n => Self::rows(store)
                .into_iter()
                .nth(n - 1)
                .map(BudgetTarget::Category)
                .unwrap_or(BudgetTarget::Total),
        }
    }

    /// Open the editor on the selected row, pre-filled with its current value
    pub fn begin_edit(&mut self, store: &Store) {
        let target = self.target_for_selection(store);
        let budget = store.budget();
        let current = match &target {
            BudgetTarget::Total => budget.total,
            BudgetTarget::Category(name) => budget.limit_for(name),
        };
        self.value.set(if current.is_zero() {
            String::new()
        } else {
            current.to_string()
        });
        self.editing = Some(target);
    }

    pub fn cancel(&mut self) {
        self.editing = None;
        self.value.clear();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Write the edited value back as a new budget record
    pub fn commit(&mut self, store: &mut Store) {
        let Some(target) = self.editing.take() else {
            return;
        };
        let budget = next_budget(store.budget(), &target, self.value.value());
        store.set_budget(budget);
        self.value.clear();
    }
}

fn next_budget(current: &Budget, target: &BudgetTarget, raw: &str) -> Budget {
    match target {
        BudgetTarget::Total => match Money::parse(raw) {
            Ok(total) if !total.is_zero() => current.with_total(total),
            _ => current.clone(),
        },
        BudgetTarget::Category(name) => current.with_limit(name.clone(), Money::parse_lenient(raw)),
    }
}

impl FormScreen for BudgetEditor {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        if self.is_editing() {
            Some(&mut self.value)
        } else {
            None
        }
    }
}
