//! Derived views over the session store
//!
//! Services borrow the store and compute totals, breakdowns and statuses on
//! demand. They never mutate state.

pub mod business;
pub mod investment;
pub mod personal;

pub use business::{BusinessService, BusinessSummary, Granularity, PeriodTotals};
pub use investment::{InvestmentService, InvestmentShare, InvestmentSummary};
pub use personal::{
    AnalysisPeriod, BudgetHealth, BudgetStatus, CategoryBudgetStatus, CategoryShare,
    PersonalService, PersonalSummary, SavingsVerdict, SpendingAnalysis,
};
