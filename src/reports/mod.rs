//! Reports module for budget-tracker
//!
//! Derived views over a period's persisted ledger data.

pub mod summary;

pub use summary::{CategoryTotal, SummaryReport};
