//! Core data models for Ledgerly
//!
//! Plain data shapes for both modes: personal transactions and budgets,
//! business catalog items, entries and investments, and the profiles
//! produced by onboarding.

pub mod budget;
pub mod business_entry;
pub mod catalog;
pub mod category;
pub mod currency;
pub mod ids;
pub mod investment;
pub mod money;
pub mod profile;
pub mod transaction;

pub use budget::Budget;
pub use business_entry::{BusinessEntry, BusinessEntryType, NewBusinessEntry, ReferenceKind};
pub use catalog::{
    ExpenseDefinition, ExpenseKind, NewExpenseDefinition, NewProduct, NewService, Product, Service,
};
pub use currency::Currency;
pub use ids::{
    BusinessEntryId, ExpenseDefinitionId, InvestmentId, MessageId, ProductId, ServiceId,
    TransactionId,
};
pub use investment::{Investment, InvestmentCategory, InvestmentKind, NewInvestment};
pub use money::Money;
pub use profile::{BusinessProfile, Location, Mode, UserProfile};
pub use transaction::{NewTransaction, Transaction, TransactionType};
