//! Monthly budget record
//!
//! One record per period. `remaining` starts at `budget` and only moves when
//! an expense is recorded; it is never clamped, so an over-budget month has
//! a negative remaining balance.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// The persisted budget for a single period (`budget.json`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    /// The amount budgeted for the period
    pub budget: Money,

    /// Budget minus every expense recorded since the budget was set
    pub remaining: Money,
}

impl BudgetRecord {
    /// A fresh record with nothing spent yet
    pub fn new(budget: Money) -> Self {
        Self {
            budget,
            remaining: budget,
        }
    }

    /// Total spent against this record, `None` if it does not fit in cents
    pub fn spent(&self) -> Option<Money> {
        self.budget.checked_sub(self.remaining)
    }

    /// The record after an expense, `None` if the balance would overflow
    pub fn with_expense(&self, amount: Money) -> Option<Self> {
        Some(Self {
            budget: self.budget,
            remaining: self.remaining.checked_sub(amount)?,
        })
    }

    /// Whether the budget has been used up (zero counts as exceeded)
    pub fn is_exceeded(&self) -> bool {
        self.remaining.cents() <= 0
    }

    /// Whether remaining is at or below 10% of the original budget
    ///
    /// Computed in cents as `remaining * 10 <= budget`, so the boundary is
    /// exact.
    pub fn is_within_ten_percent(&self) -> bool {
        (self.remaining.cents() as i128) * 10 <= self.budget.cents() as i128
    }

    /// The warning to show for this record, most severe first
    pub fn warning(&self) -> Option<BudgetWarning> {
        if self.is_exceeded() {
            Some(BudgetWarning::Exceeded)
        } else if self.is_within_ten_percent() {
            Some(BudgetWarning::NearLimit {
                remaining: self.remaining,
            })
        } else {
            None
        }
    }
}

/// Warning raised by the state of a period's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetWarning {
    /// Remaining balance is zero or negative
    Exceeded,

    /// Remaining balance is positive but at most 10% of the budget
    NearLimit { remaining: Money },
}
