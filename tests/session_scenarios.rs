use chrono::NaiveDate;

use ledgerly::assistant::{Conversation, Persona};
use ledgerly::models::{
    BusinessEntryType, BusinessProfile, Mode, Money, NewBusinessEntry, NewProduct,
    NewTransaction, UserProfile,
};
use ledgerly::screens::TransactionForm;
use ledgerly::services::{AnalysisPeriod, BusinessService, Granularity, PersonalService};
use ledgerly::store::Store;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn personal_store(currency: &str) -> Store {
    let mut store = Store::new();
    store.set_authenticated(true);
    store.set_mode(Mode::Personal);
    store.set_user_profile(Some(UserProfile {
        full_name: "Asha Verma".into(),
        profile_picture: None,
        currency: currency.into(),
        occupation: "Engineer".into(),
        phone: String::new(),
        email: String::new(),
    }));
    store
}

#[test]
fn personal_dashboard_in_rupees() {
    let mut store = personal_store("INR");
    store.add_transaction(NewTransaction::income("Salary", Money::from_units(5000), date(1)));
    store.add_transaction(NewTransaction::expense("Groceries", Money::from_units(150), date(2)));

    let summary = PersonalService::new(&store).summary(5);
    let symbol = store.currency_symbol();
    assert_eq!(summary.balance.format_with_symbol(symbol), "₹4850");
    assert_eq!(summary.income.format_with_symbol(symbol), "₹5000");
    assert_eq!(summary.expenses.format_with_symbol(symbol), "₹150");
}

#[test]
fn business_net_profit_uses_business_currency() {
    let mut store = Store::new();
    store.set_mode(Mode::Business);
    store.set_business_profile(Some(BusinessProfile {
        owner_name: "Ravi".into(),
        business_name: "Ravi Traders".into(),
        industries: vec!["Retail".into()],
        currency: "GBP".into(),
        start_date: None,
        location: None,
    }));
    store.add_business_entry(
        NewBusinessEntry::new(BusinessEntryType::Revenue, Money::from_units(2500), date(3))
            .with_category("Product Sale"),
    );
    store.add_business_entry(
        NewBusinessEntry::new(BusinessEntryType::Expense, Money::from_units(800), date(4))
            .with_category("Rent"),
    );

    let summary = BusinessService::new(&store).summary(5);
    assert_eq!(summary.net_profit, Money::from_units(1700));
    assert_eq!(
        summary.net_profit.format_with_symbol(store.currency_symbol()),
        "£1700"
    );
}

#[test]
fn transactions_are_listed_newest_first() {
    let mut store = personal_store("USD");
    for (i, category) in ["Groceries", "Health", "Shopping"].iter().enumerate() {
        store.add_transaction(NewTransaction::expense(
            *category,
            Money::from_units(10 + i as i64),
            date(1),
        ));
    }

    let categories: Vec<&str> = store
        .transactions()
        .iter()
        .map(|t| t.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Shopping", "Health", "Groceries"]);
    assert_eq!(store.transactions()[0].amount, Money::from_units(12));
}

#[test]
fn budget_remaining_tracks_expenses_only() {
    let mut store = personal_store("USD");
    let budget = store
        .budget()
        .with_total(Money::from_units(1000))
        .with_limit("Groceries", Money::from_units(300));
    store.set_budget(budget);

    let empty = PersonalService::new(&store).budget_status();
    assert_eq!(empty.remaining, Money::from_units(1000));

    store.add_transaction(NewTransaction::income("Salary", Money::from_units(5000), date(1)));
    store.add_transaction(NewTransaction::expense("Groceries", Money::from_units(120), date(2)));
    store.add_transaction(NewTransaction::expense("groceries", Money::from_units(30), date(2)));

    let status = PersonalService::new(&store).budget_status();
    assert_eq!(status.remaining, Money::from_units(850));
    let groceries = status
        .categories
        .iter()
        .find(|c| c.category == "Groceries")
        .unwrap();
    assert_eq!(groceries.spent, Money::from_units(120));
    assert_eq!(groceries.remaining, Money::from_units(180));
}

#[test]
fn product_margin_is_whole_percent() {
    let mut store = Store::new();
    store.add_product(NewProduct {
        name: "Widget".into(),
        category: "Hardware".into(),
        cost_price: Money::from_units(50),
        selling_price: Money::from_units(100),
        quantity: 4,
    });
    assert_eq!(store.products()[0].margin_percent().to_string(), "50");
}

#[test]
fn chatbot_exact_match_and_fallback() {
    let mut conversation = Conversation::new(Persona::Personal);
    let reply = conversation.send("How can I save more?").unwrap();
    assert!(reply.starts_with("Here are some tips to save more:"));

    conversation.receive(reply);
    let fallback = conversation.send("Tell me a joke").unwrap();
    assert_eq!(fallback, Persona::Personal.fallback());
    assert!(!fallback.is_empty());
}

#[test]
fn largest_amounts_saturate_instead_of_crashing() {
    const LARGEST: &str = "79228162514264337593543950335";
    let mut store = personal_store("USD");
    let budget = store.budget().with_total(Money::from_units(1000));
    store.set_budget(budget);

    for _ in 0..2 {
        let mut form = TransactionForm::new(date(10));
        form.category.set("Groceries");
        form.amount.set(LARGEST);
        form.save(&mut store, date(10)).unwrap();
    }
    assert_eq!(store.transactions().len(), 2);

    let service = PersonalService::new(&store);
    let largest = Money::parse(LARGEST).unwrap();
    assert_eq!(service.summary(5).expenses, largest);
    assert_eq!(service.summary(5).balance, -largest);
    assert_eq!(service.budget_status().spent, largest);
    assert_eq!(service.analysis(AnalysisPeriod::Weekly, date(10)).expenses, largest);

    let mut business = Store::new();
    business.set_mode(Mode::Business);
    let kinds = [
        BusinessEntryType::Revenue,
        BusinessEntryType::Revenue,
        BusinessEntryType::Expense,
    ];
    for kind in kinds {
        business.add_business_entry(NewBusinessEntry::new(kind, largest, date(5)));
    }
    let service = BusinessService::new(&business);
    assert_eq!(service.summary(5).net_profit, Money::zero());
    assert_eq!(service.series(Granularity::Monthly).len(), 1);
}
