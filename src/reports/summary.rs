//! Expense Summary Report
//!
//! Groups a period's expenses by category. Categories appear in the order
//! they were first used, not sorted by name or amount.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, Money, Period, Transaction};

/// Total spent under one category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Summary of a period's budget and expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub period: Period,
    /// Per-category totals in first-occurrence order
    pub category_totals: Vec<CategoryTotal>,
    /// Sum of every transaction amount
    pub total_expenses: Money,
    /// The period's budget
    pub budget: Money,
    /// Remaining balance as stored in the budget record
    pub remaining_budget: Money,
    /// True when remaining is at or below 10% of the budget
    pub reminder_present: bool,
    pub transaction_count: usize,
}

impl SummaryReport {
    /// Build a report from a budget record and the period's transactions
    ///
    /// Fails if a category total or the overall total overflows.
    pub fn generate(
        period: Period,
        record: &BudgetRecord,
        transactions: &[Transaction],
    ) -> BudgetResult<Self> {
        let overflow = || {
            BudgetError::Validation(format!(
                "Expense totals for {} exceed the supported range",
                period
            ))
        };
        let mut category_totals: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            match category_totals
                .iter_mut()
                .find(|c| c.category == txn.category)
            {
                Some(existing) => {
                    existing.total = existing.total.checked_add(txn.amount).ok_or_else(overflow)?;
                    existing.transaction_count += 1;
                }
                None => category_totals.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                }),
            }
        }

        let total_expenses =
            Money::checked_sum(transactions.iter().map(|t| &t.amount)).ok_or_else(overflow)?;

        Ok(Self {
            period,
            category_totals,
            total_expenses,
            budget: record.budget,
            remaining_budget: record.remaining,
            reminder_present: record.is_within_ten_percent(),
            transaction_count: transactions.len(),
        })
    }

    /// Total for one category, if any expense used that label
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.category_totals
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Share of total expenses spent in a category, as a percentage
    pub fn category_percentage(&self, total: &CategoryTotal) -> f64 {
        if self.total_expenses.is_zero() {
            0.0
        } else {
            total.total.cents() as f64 / self.total_expenses.cents() as f64 * 100.0
        }
    }
}
