//! Business ledger entries
//!
//! Entries are the only records that move money in business mode. An entry
//! may point at a catalog item or expense template it was created from.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BusinessEntryId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessEntryType {
    #[default]
    Revenue,
    Expense,
    Investment,
}

impl BusinessEntryType {
    pub const ALL: [BusinessEntryType; 3] = [Self::Revenue, Self::Expense, Self::Investment];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
            Self::Investment => "Investment",
        }
    }

    /// Revenue is shown as money in, everything else as money out
    pub fn sign(&self) -> char {
        match self {
            Self::Revenue => '+',
            Self::Expense | Self::Investment => '-',
        }
    }
}

impl fmt::Display for BusinessEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Revenue => write!(f, "revenue"),
            Self::Expense => write!(f, "expense"),
            Self::Investment => write!(f, "investment"),
        }
    }
}

/// What kind of record `ref_id` points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Product,
    Service,
    Salary,
    Petty,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Service => write!(f, "service"),
            Self::Salary => write!(f, "salary"),
            Self::Petty => write!(f, "petty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBusinessEntry {
    #[serde(rename = "type")]
    pub kind: BusinessEntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<ReferenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewBusinessEntry {
    pub fn new(kind: BusinessEntryType, amount: Money, date: NaiveDate) -> Self {
        Self {
            kind,
            category: None,
            ref_id: None,
            ref_type: None,
            ref_name: None,
            amount,
            date,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_reference(
        mut self,
        ref_id: impl Into<String>,
        ref_type: ReferenceKind,
        ref_name: impl Into<String>,
    ) -> Self {
        self.ref_id = Some(ref_id.into());
        self.ref_type = Some(ref_type);
        self.ref_name = Some(ref_name.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A business-mode ledger line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntry {
    pub id: BusinessEntryId,
    #[serde(rename = "type")]
    pub kind: BusinessEntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<ReferenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BusinessEntry {
    pub fn from_input(input: NewBusinessEntry) -> Self {
        Self {
            id: BusinessEntryId::new(),
            kind: input.kind,
            category: input.category,
            ref_id: input.ref_id,
            ref_type: input.ref_type,
            ref_name: input.ref_name,
            amount: input.amount,
            date: input.date,
            notes: input.notes,
            created_at: Utc::now(),
        }
    }

    /// Label used in lists: the category, else the referenced name, else the type
    pub fn label(&self) -> &str {
        self.category
            .as_deref()
            .or(self.ref_name.as_deref())
            .unwrap_or_else(|| self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_label_fallbacks() {
        let plain = BusinessEntry::from_input(NewBusinessEntry::new(
            BusinessEntryType::Expense,
            Money::from_units(800),
            date(),
        ));
        assert_eq!(plain.label(), "Expense");

        let referenced = BusinessEntry::from_input(
            NewBusinessEntry::new(BusinessEntryType::Revenue, Money::from_units(99), date())
                .with_reference("abc", ReferenceKind::Product, "Premium Widget"),
        );
        assert_eq!(referenced.label(), "Premium Widget");

        let categorised = BusinessEntry::from_input(
            NewBusinessEntry::new(BusinessEntryType::Revenue, Money::from_units(99), date())
                .with_category("Product Sale"),
        );
        assert_eq!(categorised.label(), "Product Sale");
    }

    #[test]
    fn test_serialized_shape() {
        let entry = BusinessEntry::from_input(
            NewBusinessEntry::new(BusinessEntryType::Investment, Money::from_units(5), date())
                .with_reference("x", ReferenceKind::Salary, "Payroll"),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "investment");
        assert_eq!(json["refType"], "salary");
        assert_eq!(json["refName"], "Payroll");
        assert!(json.get("notes").is_none());
    }
}
