//! Investment portfolio totals

use crate::models::{InvestmentCategory, Money};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentShare {
    pub category: InvestmentCategory,
    pub amount: Money,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentSummary {
    pub total: Money,
    pub count: usize,
    /// Categories with at least one investment, in category order
    pub distribution: Vec<InvestmentShare>,
}

pub struct InvestmentService<'a> {
    store: &'a Store,
}

impl<'a> InvestmentService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> InvestmentSummary {
        let investments = self.store.investments();
        let total: Money = investments.iter().map(|i| i.amount).sum();

        let distribution = InvestmentCategory::ALL
            .iter()
            .filter_map(|category| {
                let matching: Vec<_> = investments
                    .iter()
                    .filter(|i| i.category == *category)
                    .collect();
                if matching.is_empty() {
                    return None;
                }
                let amount: Money = matching.iter().map(|i| i.amount).sum();
                Some(InvestmentShare {
                    category: *category,
                    amount,
                    percentage: amount.percent_of(total),
                })
            })
            .collect();

        InvestmentSummary {
            total,
            count: investments.len(),
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewInvestment;
    use chrono::NaiveDate;

    fn invest(category: InvestmentCategory, units: i64) -> NewInvestment {
        NewInvestment {
            category,
            name: format!("{} holding", category),
            investment_type: category.default_kind(),
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            amount: Money::from_units(units),
        }
    }

    #[test]
    fn test_distribution() {
        let mut store = Store::new();
        store.add_investment(invest(InvestmentCategory::Gold, 250));
        store.add_investment(invest(InvestmentCategory::Stocks, 500));
        store.add_investment(invest(InvestmentCategory::Gold, 250));

        let summary = InvestmentService::new(&store).summary();
        assert_eq!(summary.total, Money::from_units(1000));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.distribution.len(), 2);
        assert_eq!(summary.distribution[0].category, InvestmentCategory::Stocks);
        assert_eq!(summary.distribution[1].percentage, 50.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let store = Store::new();
        let summary = InvestmentService::new(&store).summary();
        assert!(summary.total.is_zero());
        assert!(summary.distribution.is_empty());
    }
}
