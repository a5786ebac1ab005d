//! Business-mode derivations: dashboard totals, breakdowns and time series

use chrono::Datelike;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{BusinessEntry, BusinessEntryType, Money};
use crate::store::Store;

use super::personal::CategoryShare;

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessSummary {
    pub revenue: Money,
    pub expenses: Money,
    pub investments: Money,
    /// revenue − expenses; investments are not deducted
    pub net_profit: Money,
    /// net profit as a percentage of revenue, 0 without revenue
    pub profit_margin: f64,
    pub recent: Vec<BusinessEntry>,
}

/// How the analysis chart buckets entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Monthly,
    Quarterly,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Monthly => Self::Quarterly,
            Self::Quarterly => Self::Monthly,
        }
    }
}

/// One bucket of the revenue/expense/profit chart
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotals {
    /// `2025-03` or `2025-Q1`
    pub label: String,
    pub revenue: Money,
    pub expenses: Money,
    pub profit: Money,
}

pub struct BusinessService<'a> {
    store: &'a Store,
}

impl<'a> BusinessService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn total_of(&self, kind: BusinessEntryType) -> Money {
        self.store
            .business_entries()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.amount)
            .sum()
    }

    pub fn summary(&self, recent_limit: usize) -> BusinessSummary {
        let revenue = self.total_of(BusinessEntryType::Revenue);
        let expenses = self.total_of(BusinessEntryType::Expense);
        let investments = self.total_of(BusinessEntryType::Investment);
        let net_profit = revenue - expenses;
        debug!(%revenue, %expenses, %net_profit, "Derived business summary");

        BusinessSummary {
            revenue,
            expenses,
            investments,
            net_profit,
            profit_margin: net_profit.percent_of(revenue),
            recent: self
                .store
                .business_entries()
                .iter()
                .take(recent_limit)
                .cloned()
                .collect(),
        }
    }

    /// Totals per entry label for one entry type, in order of first appearance
    pub fn breakdown(&self, kind: BusinessEntryType) -> Vec<CategoryShare> {
        let total = self.total_of(kind);
        let mut totals: Vec<(String, Money)> = Vec::new();

        for entry in self.store.business_entries().iter().rev().filter(|e| e.kind == kind) {
            let label = entry.label();
            match totals.iter_mut().find(|(name, _)| name == label) {
                Some((_, amount)) => *amount += entry.amount,
                None => totals.push((label.to_string(), entry.amount)),
            }
        }

        totals
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percentage: amount.percent_of(total),
                category,
                amount,
            })
            .collect()
    }

    /// Revenue, expenses and profit per bucket, oldest bucket first
    pub fn series(&self, granularity: Granularity) -> Vec<PeriodTotals> {
        let mut buckets: BTreeMap<String, (Money, Money)> = BTreeMap::new();

        for entry in self.store.business_entries() {
            let key = match granularity {
                Granularity::Monthly => entry.date.format("%Y-%m").to_string(),
                Granularity::Quarterly => {
                    format!("{}-Q{}", entry.date.year(), entry.date.month0() / 3 + 1)
                }
            };
            let bucket = buckets.entry(key).or_default();
            match entry.kind {
                BusinessEntryType::Revenue => bucket.0 += entry.amount,
                BusinessEntryType::Expense => bucket.1 += entry.amount,
                BusinessEntryType::Investment => {}
            }
        }

        buckets
            .into_iter()
            .map(|(label, (revenue, expenses))| PeriodTotals {
                label,
                revenue,
                expenses,
                profit: revenue - expenses,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBusinessEntry;
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn entry(kind: BusinessEntryType, units: i64, m: u32) -> NewBusinessEntry {
        NewBusinessEntry::new(kind, Money::from_units(units), date(m, 1))
    }

    #[test]
    fn test_net_profit() {
        let mut store = Store::new();
        store.add_business_entry(entry(BusinessEntryType::Revenue, 2500, 1));
        store.add_business_entry(entry(BusinessEntryType::Expense, 800, 1));
        store.add_business_entry(entry(BusinessEntryType::Investment, 1000, 1));

        let summary = BusinessService::new(&store).summary(5);
        assert_eq!(summary.net_profit, Money::from_units(1700));
        assert_eq!(summary.investments, Money::from_units(1000));
        assert_eq!(summary.profit_margin, 68.0);
    }

    #[test]
    fn test_margin_without_revenue() {
        let mut store = Store::new();
        store.add_business_entry(entry(BusinessEntryType::Expense, 50, 2));
        let summary = BusinessService::new(&store).summary(5);
        assert_eq!(summary.net_profit, Money::from_units(-50));
        assert_eq!(summary.profit_margin, 0.0);
    }

    #[test]
    fn test_revenue_breakdown_uses_labels() {
        let mut store = Store::new();
        for (amount, month, category) in [
            (300, 1, "Consulting"),
            (100, 1, "Product Sale"),
            (100, 2, "Consulting"),
        ] {
            store.add_business_entry(
                entry(BusinessEntryType::Revenue, amount, month).with_category(category),
            );
        }

        let breakdown = BusinessService::new(&store).breakdown(BusinessEntryType::Revenue);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Consulting");
        assert_eq!(breakdown[0].amount, Money::from_units(400));
        assert_eq!(breakdown[0].percentage, 80.0);
    }

    #[test]
    fn test_monthly_and_quarterly_series() {
        let mut store = Store::new();
        store.add_business_entry(entry(BusinessEntryType::Revenue, 1000, 1));
        store.add_business_entry(entry(BusinessEntryType::Expense, 400, 2));
        store.add_business_entry(entry(BusinessEntryType::Revenue, 500, 4));

        let service = BusinessService::new(&store);
        let monthly = service.series(Granularity::Monthly);
        let labels: Vec<_> = monthly.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2025-01", "2025-02", "2025-04"]);
        assert_eq!(monthly[1].profit, Money::from_units(-400));

        let quarterly = service.series(Granularity::Quarterly);
        assert_eq!(quarterly.len(), 2);
        assert_eq!(quarterly[0].label, "2025-Q1");
        assert_eq!(quarterly[0].profit, Money::from_units(600));
        assert_eq!(quarterly[1].label, "2025-Q2");
    }
}
