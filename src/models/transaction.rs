//! Expense transaction model
//!
//! Transactions are append-only. File order is entry order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded expense (`transactions.json` element)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date the expense was entered (serialized as YYYY-MM-DD)
    pub date: NaiveDate,

    /// Free-text category label used for summary grouping
    pub category: String,

    /// Amount spent
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction, trimming the category label
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        let category = category.into();
        Self {
            date,
            category: category.trim().to_string(),
            amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
