//! Session state container
//!
//! `Store` holds everything the screens read and write: the session flags,
//! both profiles, the personal ledger and budget, and the business catalog,
//! ledger and investments. Nothing is persisted; the store lives exactly as
//! long as the `AppContext` that owns it.
//!
//! Ledger lists (transactions, business entries) are kept newest-first.
//! Catalog lists (products, services, expense definitions) and investments
//! are kept in insertion order. No record is ever removed.

mod context;

pub use context::AppContext;

use tracing::info;

use crate::models::{
    Budget, BusinessEntry, BusinessEntryId, BusinessProfile, ExpenseDefinition,
    ExpenseDefinitionId, Investment, InvestmentId, Mode, NewBusinessEntry, NewExpenseDefinition,
    NewInvestment, NewProduct, NewService, NewTransaction, Product, ProductId, Service, ServiceId,
    Transaction, TransactionId, UserProfile,
};

#[derive(Debug, Default)]
pub struct Store {
    authenticated: bool,
    mode: Mode,
    user_profile: Option<UserProfile>,
    business_profile: Option<BusinessProfile>,
    transactions: Vec<Transaction>,
    budget: Budget,
    products: Vec<Product>,
    services: Vec<Service>,
    expense_definitions: Vec<ExpenseDefinition>,
    business_entries: Vec<BusinessEntry>,
    investments: Vec<Investment>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // --- scalar state ---

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        info!(authenticated, "Session authentication changed");
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        info!(%mode, "Mode selected");
    }

    pub fn set_user_profile(&mut self, profile: Option<UserProfile>) {
        info!(present = profile.is_some(), "User profile replaced");
        self.user_profile = profile;
    }

    pub fn set_business_profile(&mut self, profile: Option<BusinessProfile>) {
        info!(present = profile.is_some(), "Business profile replaced");
        self.business_profile = profile;
    }

    pub fn set_budget(&mut self, budget: Budget) {
        info!(
            total = %budget.total,
            categories = budget.categories.len(),
            "Budget replaced"
        );
        self.budget = budget;
    }

    // --- ledger lists (newest first) ---

    /// Record a personal transaction. Identical inputs create distinct records.
    pub fn add_transaction(&mut self, input: NewTransaction) -> TransactionId {
        let transaction = Transaction::from_input(input);
        let id = transaction.id;
        info!(
            %id,
            kind = %transaction.kind,
            category = %transaction.category,
            amount = %transaction.amount,
            "Transaction added"
        );
        self.transactions.insert(0, transaction);
        id
    }

    pub fn add_business_entry(&mut self, input: NewBusinessEntry) -> BusinessEntryId {
        let entry = BusinessEntry::from_input(input);
        let id = entry.id;
        info!(%id, kind = %entry.kind, amount = %entry.amount, "Business entry added");
        self.business_entries.insert(0, entry);
        id
    }

    // --- catalog lists (insertion order) ---

    pub fn add_product(&mut self, input: NewProduct) -> ProductId {
        let product = Product::from_input(input);
        let id = product.id;
        info!(%id, name = %product.name, "Product added");
        self.products.push(product);
        id
    }

    pub fn add_service(&mut self, input: NewService) -> ServiceId {
        let service = Service::from_input(input);
        let id = service.id;
        info!(%id, name = %service.name, "Service added");
        self.services.push(service);
        id
    }

    pub fn add_expense_definition(&mut self, input: NewExpenseDefinition) -> ExpenseDefinitionId {
        let definition = ExpenseDefinition::from_input(input);
        let id = definition.id;
        info!(
            %id,
            name = %definition.name,
            kind = %definition.expense_type,
            "Expense definition added"
        );
        self.expense_definitions.push(definition);
        id
    }

    pub fn add_investment(&mut self, input: NewInvestment) -> InvestmentId {
        let investment = Investment::from_input(input);
        let id = investment.id;
        info!(
            %id,
            category = %investment.category,
            amount = %investment.amount,
            "Investment added"
        );
        self.investments.push(investment);
        id
    }

    // --- accessors ---

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.user_profile.as_ref()
    }

    pub fn business_profile(&self) -> Option<&BusinessProfile> {
        self.business_profile.as_ref()
    }

    /// Newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn expense_definitions(&self) -> &[ExpenseDefinition] {
        &self.expense_definitions
    }

    /// Newest first
    pub fn business_entries(&self) -> &[BusinessEntry] {
        &self.business_entries
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_service(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn find_expense_definition(&self, id: ExpenseDefinitionId) -> Option<&ExpenseDefinition> {
        self.expense_definitions.iter().find(|d| d.id == id)
    }

    /// Currency symbol of the profile for the active mode
    pub fn currency_symbol(&self) -> &'static str {
        match self.mode {
            Mode::Business => crate::models::currency::symbol_for(
                self.business_profile.as_ref().map(|p| p.currency.as_str()),
            ),
            _ => crate::models::currency::symbol_for(
                self.user_profile.as_ref().map(|p| p.currency.as_str()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BusinessEntryType, Money};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_transactions_are_newest_first() {
        let mut store = Store::new();
        let first = store.add_transaction(NewTransaction::income(
            "Salary",
            Money::from_units(5000),
            date(1),
        ));
        let second = store.add_transaction(NewTransaction::expense(
            "Groceries",
            Money::from_units(150),
            date(2),
        ));

        let ids: Vec<_> = store.transactions().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second, first]);
        assert_eq!(store.transactions()[0].category, "Groceries");
        assert_eq!(store.transactions()[1].amount, Money::from_units(5000));
    }

    #[test]
    fn test_identical_inputs_create_distinct_records() {
        let mut store = Store::new();
        let input = NewTransaction::expense("Snacks", Money::from_units(3), date(5));
        let a = store.add_transaction(input.clone());
        let b = store.add_transaction(input);
        assert_ne!(a, b);
        assert_eq!(store.transactions().len(), 2);
    }

    #[test]
    fn test_catalog_lists_append() {
        let mut store = Store::new();
        for name in ["First", "Second"] {
            store.add_product(NewProduct {
                name: name.into(),
                category: "Widgets".into(),
                cost_price: Money::from_units(50),
                selling_price: Money::from_units(100),
                quantity: 1,
            });
        }
        let names: Vec<_> = store.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_business_entries_prepend() {
        let mut store = Store::new();
        store.add_business_entry(NewBusinessEntry::new(
            BusinessEntryType::Revenue,
            Money::from_units(2500),
            date(1),
        ));
        store.add_business_entry(NewBusinessEntry::new(
            BusinessEntryType::Expense,
            Money::from_units(800),
            date(2),
        ));
        assert_eq!(store.business_entries()[0].kind, BusinessEntryType::Expense);
    }

    #[test]
    fn test_setters_replace_wholesale() {
        let mut store = Store::new();
        store.set_authenticated(true);
        store.set_mode(Mode::Personal);
        let budget =
            Budget::new(Money::from_units(1000)).with_limit("Health", Money::from_units(50));
        store.set_budget(budget);
        store.set_budget(Budget::new(Money::from_units(400)));

        assert!(store.is_authenticated());
        assert_eq!(store.mode(), Mode::Personal);
        assert_eq!(store.budget().total, Money::from_units(400));
        assert!(store.budget().categories.get("Health").is_none());

        store.set_authenticated(false);
        store.set_user_profile(None);
        assert!(!store.is_authenticated());
        assert!(store.user_profile().is_none());
    }

    #[test]
    fn test_currency_symbol_follows_mode() {
        let mut store = Store::new();
        assert_eq!(store.currency_symbol(), "$");

        store.set_business_profile(Some(BusinessProfile {
            owner_name: "Ravi".into(),
            business_name: "Ravi Traders".into(),
            industries: vec!["Retail".into()],
            currency: "EUR".into(),
            start_date: None,
            location: None,
        }));
        store.set_mode(Mode::Business);
        assert_eq!(store.currency_symbol(), "€");
    }
}
