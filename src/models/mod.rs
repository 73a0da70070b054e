//! Core data models for budget-tracker
//!
//! Periods, money, the per-period budget record and expense transactions.

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetRecord, BudgetWarning};
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError, MONTH_NAMES};
pub use transaction::{Transaction, TransactionValidationError};
