//! Configuration module for budget-tracker
//!
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::{BudgetPaths, DATA_DIR_ENV};
pub use settings::Settings;
