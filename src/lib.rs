//! budget-tracker - Terminal monthly budget and expense tracker
//!
//! Each calendar month gets its own budget and expense list, stored as
//! JSON files under a per-month directory. Recording an expense draws the
//! month's remaining balance down, and warnings fire when the balance is
//! exhausted or within 10% of the budget.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, periods, budget records and transactions
//! - `storage`: Per-period JSON ledger
//! - `services`: Budget and expense operations
//! - `reports`: Expense summary by category
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal formatting
//! - `cli`: Subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::BudgetPaths;
//! use budget_tracker::models::{Money, Period};
//! use budget_tracker::services::BudgetService;
//! use budget_tracker::storage::LedgerStore;
//!
//! let store = LedgerStore::new(BudgetPaths::new(), Period::current());
//! let service = BudgetService::new(&store);
//! service.set_budget(Money::from_dollars_cents(500, 0))?;
//! service.record_expense("Groceries", Money::from_dollars_cents(42, 10))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::BudgetError;
