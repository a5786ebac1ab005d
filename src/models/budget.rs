//! Personal budget
//!
//! One budget per personal profile: an overall total plus per-category
//! limits keyed by category *name*. Renaming a category elsewhere leaves its
//! old key in place; nothing reconciles the two.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub total: Money,

    /// Category name → limit
    #[serde(default)]
    pub categories: BTreeMap<String, Money>,
}

impl Budget {
    pub fn new(total: Money) -> Self {
        Self {
            total,
            categories: BTreeMap::new(),
        }
    }

    /// Limit for a category, zero when unset
    pub fn limit_for(&self, category: &str) -> Money {
        self.categories.get(category).copied().unwrap_or_default()
    }

    /// Copy of this budget with a different total
    pub fn with_total(&self, total: Money) -> Self {
        Self {
            total,
            categories: self.categories.clone(),
        }
    }

    /// Copy of this budget with one category limit replaced
    pub fn with_limit(&self, category: impl Into<String>, limit: Money) -> Self {
        let mut categories = self.categories.clone();
        categories.insert(category.into(), limit);
        Self {
            total: self.total,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let budget = Budget::default();
        assert!(budget.total.is_zero());
        assert!(budget.categories.is_empty());
        assert_eq!(budget.limit_for("Groceries"), Money::zero());
    }

    #[test]
    fn test_with_limit_leaves_original_untouched() {
        let budget = Budget::new(Money::from_units(1000));
        let updated = budget.with_limit("Groceries", Money::from_units(300));

        assert_eq!(budget.limit_for("Groceries"), Money::zero());
        assert_eq!(updated.limit_for("Groceries"), Money::from_units(300));
        assert_eq!(updated.total, Money::from_units(1000));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let budget = Budget::default().with_limit("Groceries", Money::from_units(10));
        assert_eq!(budget.limit_for("groceries"), Money::zero());
    }
}
