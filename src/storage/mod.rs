//! Storage layer for budget-tracker
//!
//! JSON files partitioned by period:
//!
//! ```text
//! <base>/data/2025_January/budget.json
//! <base>/data/2025_January/transactions.json
//! ```

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, read_json_optional, write_json_atomic};
pub use ledger::LedgerStore;
