//! Service layer for budget-tracker
//!
//! Business logic on top of the per-period ledger storage.

pub mod budget;
pub mod clock;

pub use budget::{BudgetService, BudgetSet, ExpenseRecorded};
pub use clock::{Clock, FixedClock, SystemClock};
