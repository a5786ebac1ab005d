//! Business investments (stocks, SIPs, gold, physical assets)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InvestmentId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvestmentCategory {
    #[default]
    Stocks,
    #[serde(rename = "SIP")]
    Sip,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Gold,
    Silver,
    #[serde(rename = "Physical Asset")]
    PhysicalAsset,
    Other,
}

impl InvestmentCategory {
    pub const ALL: [InvestmentCategory; 7] = [
        Self::Stocks,
        Self::Sip,
        Self::MutualFund,
        Self::Gold,
        Self::Silver,
        Self::PhysicalAsset,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Sip => "SIP",
            Self::MutualFund => "Mutual Fund",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::PhysicalAsset => "Physical Asset",
            Self::Other => "Other",
        }
    }

    /// Kind implied by picking this category
    pub fn default_kind(&self) -> InvestmentKind {
        match self {
            Self::PhysicalAsset => InvestmentKind::Physical,
            _ => InvestmentKind::Financial,
        }
    }
}

impl fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InvestmentKind {
    #[default]
    Financial,
    Physical,
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Financial => write!(f, "Financial"),
            Self::Physical => write!(f, "Physical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub category: InvestmentCategory,
    pub name: String,
    pub investment_type: InvestmentKind,
    pub date: NaiveDate,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: InvestmentId,
    pub category: InvestmentCategory,
    pub name: String,
    pub investment_type: InvestmentKind,
    pub date: NaiveDate,
    pub amount: Money,
}

impl Investment {
    pub fn from_input(input: NewInvestment) -> Self {
        Self {
            id: InvestmentId::new(),
            category: input.category,
            name: input.name,
            investment_type: input.investment_type,
            date: input.date,
            amount: input.amount,
        }
    }
}
