//! Business catalog: products, services and reusable expense templates
//!
//! Catalog lists are append-only and undated. They describe what the
//! business sells or pays for; money only moves through business entries.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseDefinitionId, ProductId, ServiceId};
use super::money::Money;

/// `(selling - cost) / selling * 100`, rounded to a whole percent.
/// Zero when the selling price is zero.
pub fn margin_percent(cost: Money, selling_price: Money) -> Decimal {
    if selling_price.is_zero() {
        return Decimal::ZERO;
    }
    cost.as_decimal()
        .checked_div(selling_price.as_decimal())
        .and_then(|ratio| Decimal::ONE.checked_sub(ratio))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub cost_price: Money,
    pub selling_price: Money,
    pub quantity: i64,
}

/// An inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost_price: Money,
    pub selling_price: Money,
    pub quantity: i64,
}

impl Product {
    pub fn from_input(input: NewProduct) -> Self {
        Self {
            id: ProductId::new(),
            name: input.name,
            category: input.category,
            cost_price: input.cost_price,
            selling_price: input.selling_price,
            quantity: input.quantity,
        }
    }

    pub fn profit_per_unit(&self) -> Money {
        self.selling_price - self.cost_price
    }

    pub fn margin_percent(&self) -> Decimal {
        margin_percent(self.cost_price, self.selling_price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub category: String,
    pub cost: Money,
    pub selling_price: Money,
}

/// A business offering with no stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub cost: Money,
    pub selling_price: Money,
}

impl Service {
    pub fn from_input(input: NewService) -> Self {
        Self {
            id: ServiceId::new(),
            name: input.name,
            category: input.category,
            cost: input.cost,
            selling_price: input.selling_price,
        }
    }

    pub fn profit_per_sale(&self) -> Money {
        self.selling_price - self.cost
    }

    pub fn margin_percent(&self) -> Decimal {
        margin_percent(self.cost, self.selling_price)
    }
}

/// Kind of recurring business expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Salary,
    Petty,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salary => write!(f, "salary"),
            Self::Petty => write!(f, "petty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseDefinition {
    pub name: String,
    pub expense_type: ExpenseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_amount: Option<Money>,
}

/// Reusable template for a recurring expense (a salary, a petty-cash item)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDefinition {
    pub id: ExpenseDefinitionId,
    pub name: String,
    pub expense_type: ExpenseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_amount: Option<Money>,
}

impl ExpenseDefinition {
    pub fn from_input(input: NewExpenseDefinition) -> Self {
        Self {
            id: ExpenseDefinitionId::new(),
            name: input.name,
            expense_type: input.expense_type,
            default_amount: input.default_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(cost: i64, price: i64) -> Product {
        Product::from_input(NewProduct {
            name: "Widget".into(),
            category: "Electronics".into(),
            cost_price: Money::from_units(cost),
            selling_price: Money::from_units(price),
            quantity: 3,
        })
    }

    #[test]
    fn test_half_margin() {
        assert_eq!(product(50, 100).margin_percent(), Decimal::from(50));
    }

    #[test]
    fn test_margin_rounds_to_whole_percent() {
        // 49 / 99 = 49.49..%
        assert_eq!(product(50, 99).margin_percent(), Decimal::from(49));
        // 10 / 15 = 66.66..%
        assert_eq!(product(5, 15).margin_percent(), Decimal::from(67));
    }

    #[test]
    fn test_zero_price_margin() {
        assert_eq!(product(10, 0).margin_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_extreme_prices_do_not_panic() {
        let max = Money::parse("79228162514264337593543950335").unwrap();
        let item = Product::from_input(NewProduct {
            name: "Huge".into(),
            category: "Other".into(),
            cost_price: -max,
            selling_price: max,
            quantity: 1,
        });
        assert_eq!(item.margin_percent(), Decimal::from(200));
        assert_eq!(item.profit_per_unit(), max);
    }

    #[test]
    fn test_service_margin_and_profit() {
        let service = Service::from_input(NewService {
            name: "Consulting Hour".into(),
            category: "Professional".into(),
            cost: Money::from_units(50),
            selling_price: Money::from_units(150),
        });
        assert_eq!(service.margin_percent(), Decimal::from(67));
        assert_eq!(service.profit_per_sale(), Money::from_units(100));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let json = serde_json::to_value(product(1, 2)).unwrap();
        assert!(json.get("costPrice").is_some());
        assert!(json.get("sellingPrice").is_some());
    }
}
