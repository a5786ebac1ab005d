//! Products, services and expense templates
//!
//! One screen with three tabs. Each tab has its own add form; saving
//! appends to the matching catalog list and closes the form.

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::{ExpenseKind, Money, NewExpenseDefinition, NewProduct, NewService};
use crate::store::Store;

use super::input::TextInput;
use super::FormScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogTab {
    #[default]
    Products,
    Services,
    Expenses,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 3] = [Self::Products, Self::Services, Self::Expenses];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Services => "Services",
            Self::Expenses => "Expenses",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Products => Self::Services,
            Self::Services => Self::Expenses,
            Self::Expenses => Self::Products,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Name,
    Category,
    Cost,
    Price,
    Quantity,
}

#[derive(Debug, Clone)]
pub struct CatalogScreen {
    pub tab: CatalogTab,
    pub form_open: bool,
    pub name: TextInput,
    pub category: TextInput,
    pub cost: TextInput,
    pub price: TextInput,
    pub quantity: TextInput,
    pub expense_kind: ExpenseKind,
    pub focus: CatalogField,
}

impl Default for CatalogScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            tab: CatalogTab::Products,
            form_open: false,
            name: TextInput::new("Name"),
            category: TextInput::new("Category"),
            cost: TextInput::new("Cost price"),
            price: TextInput::new("Selling price"),
            quantity: TextInput::new("Quantity").placeholder("0"),
            expense_kind: ExpenseKind::Salary,
            focus: CatalogField::Name,
        }
    }

    pub fn switch_tab(&mut self, tab: CatalogTab) {
        self.tab = tab;
        self.close_form();
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
        self.focus = CatalogField::Name;
    }

    pub fn close_form(&mut self) {
        self.form_open = false;
        for input in [
            &mut self.name,
            &mut self.category,
            &mut self.cost,
            &mut self.price,
            &mut self.quantity,
        ] {
            input.clear();
        }
        self.expense_kind = ExpenseKind::Salary;
    }

    pub fn toggle_expense_kind(&mut self) {
        self.expense_kind = match self.expense_kind {
            ExpenseKind::Salary => ExpenseKind::Petty,
            ExpenseKind::Petty => ExpenseKind::Salary,
        };
    }

    /// Fields shown for the current tab, in tab order
    pub fn fields(&self) -> &'static [CatalogField] {
        match self.tab {
            CatalogTab::Products => &[
                CatalogField::Name,
                CatalogField::Category,
                CatalogField::Cost,
                CatalogField::Price,
                CatalogField::Quantity,
            ],
            CatalogTab::Services => &[
                CatalogField::Name,
                CatalogField::Category,
                CatalogField::Cost,
                CatalogField::Price,
            ],
            CatalogTab::Expenses => &[CatalogField::Name, CatalogField::Price],
        }
    }

    pub fn can_save(&self) -> bool {
        match self.tab {
            CatalogTab::Products | CatalogTab::Services => {
                !self.name.is_blank() && !self.cost.is_blank() && !self.price.is_blank()
            }
            CatalogTab::Expenses => !self.name.is_blank(),
        }
    }

    pub fn save(&mut self, store: &mut Store) -> LedgerlyResult<()> {
        if !self.can_save() {
            return Err(LedgerlyError::Validation(match self.tab {
                CatalogTab::Expenses => "Name is required".into(),
                _ => "Name, cost and selling price are required".into(),
            }));
        }

        let name = self.name.trimmed().to_string();
        let category = self.category.trimmed().to_string();
        match self.tab {
            CatalogTab::Products => {
                store.add_product(NewProduct {
                    name,
                    category,
                    cost_price: Money::parse_lenient(self.cost.value()),
                    selling_price: Money::parse_lenient(self.price.value()),
                    quantity: self.quantity.trimmed().parse().unwrap_or(0),
                });
            }
            CatalogTab::Services => {
                store.add_service(NewService {
                    name,
                    category,
                    cost: Money::parse_lenient(self.cost.value()),
                    selling_price: Money::parse_lenient(self.price.value()),
                });
            }
            CatalogTab::Expenses => {
                let default_amount = (!self.price.is_blank())
                    .then(|| Money::parse_lenient(self.price.value()));
                store.add_expense_definition(NewExpenseDefinition {
                    name,
                    expense_type: self.expense_kind,
                    default_amount,
                });
            }
        }
        self.close_form();
        Ok(())
    }
}

impl FormScreen for CatalogScreen {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        if !self.form_open {
            return None;
        }
        Some(match self.focus {
            CatalogField::Name => &mut self.name,
            CatalogField::Category => &mut self.category,
            CatalogField::Cost => &mut self.cost,
            CatalogField::Price => &mut self.price,
            CatalogField::Quantity => &mut self.quantity,
        })
    }

    fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }
}
