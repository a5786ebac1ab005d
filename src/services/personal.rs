//! Personal-mode derivations
//!
//! Everything here is recomputed from the store on every read. Nothing is
//! cached.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::category::BUDGET_CATEGORIES;
use crate::models::{Money, Transaction, TransactionType};
use crate::store::Store;

/// Dashboard cards
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalSummary {
    pub income: Money,
    pub expenses: Money,
    /// income − expenses
    pub balance: Money,
    /// Most recent transactions, newest first
    pub recent: Vec<Transaction>,
}

/// Where a budget line stands against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    OnTrack,
    /// At or above 80% of the limit
    Warning,
    /// At or above 100% of the limit
    Exceeded,
}

impl BudgetHealth {
    pub const WARNING_PERCENT: f64 = 80.0;
    pub const EXCEEDED_PERCENT: f64 = 100.0;

    pub fn from_percent(percent_used: f64) -> Self {
        if percent_used >= Self::EXCEEDED_PERCENT {
            Self::Exceeded
        } else if percent_used >= Self::WARNING_PERCENT {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::Warning => "Approaching limit",
            Self::Exceeded => "Over budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percent_used: f64,
    pub health: BudgetHealth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub total: Money,
    pub spent: Money,
    /// total − every expense, including uncategorised ones
    pub remaining: Money,
    pub percent_used: f64,
    pub health: BudgetHealth,
    pub categories: Vec<CategoryBudgetStatus>,
}

/// One slice of the expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

/// Window the analysis screen looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPeriod {
    Weekly,
    #[default]
    Monthly,
}

impl AnalysisPeriod {
    pub fn days(&self) -> i64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Weekly,
        }
    }

    /// True when `date` falls in the window ending on `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date <= today && date >= today - Duration::days(self.days() - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsVerdict {
    Great,
    RoomForImprovement,
    ReduceExpenses,
}

impl SavingsVerdict {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 20.0 {
            Self::Great
        } else if rate >= 10.0 {
            Self::RoomForImprovement
        } else {
            Self::ReduceExpenses
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Great => "Great job!",
            Self::RoomForImprovement => "Room for improvement",
            Self::ReduceExpenses => "Consider reducing expenses",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingAnalysis {
    pub period: AnalysisPeriod,
    pub income: Money,
    pub expenses: Money,
    /// Expense categories in order of first appearance
    pub breakdown: Vec<CategoryShare>,
    pub top_category: Option<CategoryShare>,
    /// `(income − expenses) / income × 100`, 0 without income
    pub savings_rate: f64,
    pub verdict: SavingsVerdict,
}

impl SpendingAnalysis {
    pub fn savings_rate_display(&self) -> String {
        format!("{:.1}%", self.savings_rate)
    }
}

/// Read-only personal derivations over a store
pub struct PersonalService<'a> {
    store: &'a Store,
}

impl<'a> PersonalService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn total_income(&self) -> Money {
        sum_of(self.store.transactions(), TransactionType::Income)
    }

    pub fn total_expenses(&self) -> Money {
        sum_of(self.store.transactions(), TransactionType::Expense)
    }

    pub fn summary(&self, recent_limit: usize) -> PersonalSummary {
        let income = self.total_income();
        let expenses = self.total_expenses();
        PersonalSummary {
            income,
            expenses,
            balance: income - expenses,
            recent: self
                .store
                .transactions()
                .iter()
                .take(recent_limit)
                .cloned()
                .collect(),
        }
    }

    /// Sum of expense transactions whose category matches exactly
    pub fn spent_in(&self, category: &str) -> Money {
        self.store
            .transactions()
            .iter()
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    /// Budget screen rows: the standard categories first, then any other
    /// key the budget carries
    pub fn budget_status(&self) -> BudgetStatus {
        let budget = self.store.budget();
        let spent = self.total_expenses();

        let mut names: Vec<&str> = BUDGET_CATEGORIES.to_vec();
        for key in budget.categories.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }

        let categories = names
            .into_iter()
            .map(|name| {
                let limit = budget.limit_for(name);
                let spent = self.spent_in(name);
                let percent_used = spent.percent_of(limit);
                CategoryBudgetStatus {
                    category: name.to_string(),
                    limit,
                    spent,
                    remaining: limit - spent,
                    percent_used,
                    health: BudgetHealth::from_percent(percent_used),
                }
            })
            .collect();

        let percent_used = spent.percent_of(budget.total);
        debug!(total = %budget.total, %spent, "Derived budget status");

        BudgetStatus {
            total: budget.total,
            spent,
            remaining: budget.total - spent,
            percent_used,
            health: BudgetHealth::from_percent(percent_used),
            categories,
        }
    }

    pub fn analysis(&self, period: AnalysisPeriod, today: NaiveDate) -> SpendingAnalysis {
        let in_window: Vec<&Transaction> = self
            .store
            .transactions()
            .iter()
            .filter(|t| period.contains(t.date, today))
            .collect();

        let income: Money = in_window
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expenses: Money = in_window
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        // The store is newest-first; first appearance means oldest first.
        let mut totals: Vec<(String, Money)> = Vec::new();
        for txn in in_window.iter().rev().filter(|t| t.is_expense()) {
            match totals.iter_mut().find(|(name, _)| *name == txn.category) {
                Some((_, amount)) => *amount += txn.amount,
                None => totals.push((txn.category.clone(), txn.amount)),
            }
        }

        let breakdown: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percentage: amount.percent_of(expenses),
                category,
                amount,
            })
            .collect();

        let mut top_category: Option<CategoryShare> = None;
        for share in &breakdown {
            if top_category.as_ref().map_or(true, |top| share.amount > top.amount) {
                top_category = Some(share.clone());
            }
        }

        let savings_rate = (income - expenses).percent_of(income);
        debug!(
            period = period.label(),
            %income,
            %expenses,
            savings_rate,
            "Derived spending analysis"
        );

        SpendingAnalysis {
            period,
            income,
            expenses,
            breakdown,
            top_category,
            savings_rate,
            verdict: SavingsVerdict::from_rate(savings_rate),
        }
    }
}

fn sum_of(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, NewTransaction};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn money(units: i64) -> Money {
        Money::from_units(units)
    }

    #[test]
    fn test_summary_cards() {
        let mut store = Store::new();
        store.add_transaction(NewTransaction::income("Salary", money(5000), day(1)));
        store.add_transaction(NewTransaction::expense("Groceries", money(150), day(2)));

        let summary = PersonalService::new(&store).summary(5);
        assert_eq!(summary.income, money(5000));
        assert_eq!(summary.expenses, money(150));
        assert_eq!(summary.balance, money(4850));
        assert_eq!(summary.recent[0].category, "Groceries");
    }

    #[test]
    fn test_recent_is_limited() {
        let mut store = Store::new();
        for i in 1..=8 {
            store.add_transaction(NewTransaction::expense("Snacks", money(i), day(i as u32)));
        }
        let summary = PersonalService::new(&store).summary(5);
        assert_eq!(summary.recent.len(), 5);
        assert_eq!(summary.recent[0].amount, money(8));
    }

    #[test]
    fn test_budget_remaining_without_transactions() {
        let mut store = Store::new();
        store.set_budget(Budget::new(money(2000)));
        let status = PersonalService::new(&store).budget_status();
        assert_eq!(status.remaining, money(2000));
        assert_eq!(status.health, BudgetHealth::OnTrack);
    }

    #[test]
    fn test_spent_matches_category_exactly_and_ignores_income() {
        let mut store = Store::new();
        store.set_budget(Budget::new(money(1000)).with_limit("Groceries", money(200)));
        store.add_transaction(NewTransaction::expense("Groceries", money(120), day(1)));
        store.add_transaction(NewTransaction::expense("groceries", money(40), day(2)));
        store.add_transaction(NewTransaction::income("Groceries", money(500), day(3)));
        store.add_transaction(NewTransaction::expense("Groceries", money(50), day(4)));

        let status = PersonalService::new(&store).budget_status();
        let groceries = status
            .categories
            .iter()
            .find(|c| c.category == "Groceries")
            .unwrap();
        assert_eq!(groceries.spent, money(170));
        assert_eq!(groceries.remaining, money(30));
        assert_eq!(groceries.health, BudgetHealth::Warning);
        assert_eq!(status.remaining, money(790));
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(BudgetHealth::from_percent(79.9), BudgetHealth::OnTrack);
        assert_eq!(BudgetHealth::from_percent(80.0), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::from_percent(100.0), BudgetHealth::Exceeded);
    }

    #[test]
    fn test_zero_limit_is_on_track() {
        let mut store = Store::new();
        store.add_transaction(NewTransaction::expense("Health", money(30), day(1)));
        let status = PersonalService::new(&store).budget_status();
        let health = status.categories.iter().find(|c| c.category == "Health").unwrap();
        assert_eq!(health.percent_used, 0.0);
        assert_eq!(health.health, BudgetHealth::OnTrack);
    }

    #[test]
    fn test_extra_budget_keys_are_listed_after_standard_rows() {
        let mut store = Store::new();
        store.set_budget(Budget::new(money(100)).with_limit("Gardening", money(25)));
        let status = PersonalService::new(&store).budget_status();
        assert_eq!(status.categories.len(), BUDGET_CATEGORIES.len() + 1);
        assert_eq!(status.categories.last().unwrap().category, "Gardening");
    }

    #[test]
    fn test_analysis_breakdown_and_top_category() {
        let mut store = Store::new();
        store.add_transaction(NewTransaction::income("Salary", money(1000), day(10)));
        store.add_transaction(NewTransaction::expense("Snacks", money(100), day(11)));
        store.add_transaction(NewTransaction::expense("Groceries", money(300), day(12)));
        store.add_transaction(NewTransaction::expense("Snacks", money(200), day(13)));

        let analysis = PersonalService::new(&store).analysis(AnalysisPeriod::Monthly, day(15));
        let names: Vec<_> = analysis.breakdown.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Snacks", "Groceries"]);
        assert_eq!(analysis.breakdown[0].percentage, 50.0);

        // Tie on 300: the first encountered wins.
        assert_eq!(analysis.top_category.as_ref().unwrap().category, "Snacks");
        assert_eq!(analysis.savings_rate_display(), "40.0%");
        assert_eq!(analysis.verdict, SavingsVerdict::Great);
    }

    #[test]
    fn test_weekly_window() {
        let mut store = Store::new();
        store.add_transaction(NewTransaction::expense("Snacks", money(10), day(1)));
        store.add_transaction(NewTransaction::expense("Snacks", money(20), day(9)));

        let analysis = PersonalService::new(&store).analysis(AnalysisPeriod::Weekly, day(15));
        assert_eq!(analysis.expenses, money(20));
        assert_eq!(analysis.savings_rate, 0.0);
        assert_eq!(analysis.verdict, SavingsVerdict::ReduceExpenses);
    }

    #[test]
    fn test_future_dates_fall_outside_window() {
        let mut store = Store::new();
        store.add_transaction(NewTransaction::expense("Snacks", money(20), day(15)));
        store.add_transaction(NewTransaction::expense("Snacks", money(99), day(16)));
        store.add_transaction(NewTransaction::expense(
            "Travel",
            money(500),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        ));

        for period in [AnalysisPeriod::Weekly, AnalysisPeriod::Monthly] {
            let analysis = PersonalService::new(&store).analysis(period, day(15));
            assert_eq!(analysis.expenses, money(20));
            assert_eq!(analysis.breakdown.len(), 1);
        }
        assert!(AnalysisPeriod::Weekly.contains(day(9), day(15)));
        assert!(!AnalysisPeriod::Weekly.contains(day(16), day(15)));
    }

    #[test]
    fn test_savings_verdicts() {
        assert_eq!(SavingsVerdict::from_rate(20.0).message(), "Great job!");
        assert_eq!(SavingsVerdict::from_rate(10.0).message(), "Room for improvement");
        assert_eq!(SavingsVerdict::from_rate(9.9).message(), "Consider reducing expenses");
    }
}
