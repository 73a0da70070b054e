//! Display formatting for terminal output
//!
//! Turns confirmations, warnings and reports into text. Nothing here reads
//! or writes ledger data.

pub mod report;
pub mod theme;

pub use report::{
    format_budget_set, format_budget_status, format_date, format_expense_recorded,
    format_percentage, format_summary, format_transactions, format_warning, REMINDER,
};
pub use theme::Theme;
