//! Budget service
//!
//! The ledger operations: set a budget, record an expense, check warnings
//! and summarize a period. Every mutation is written to the audit log.
//!
//! Recording an expense is two separate writes (append the transaction,
//! then decrement the budget). They are not atomic; a crash between them
//! leaves the transaction log ahead of the remaining balance. Audit entries
//! are written only after both ledger writes.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, BudgetWarning, Money, Period, Transaction};
use crate::reports::SummaryReport;
use crate::storage::LedgerStore;

use super::clock::{Clock, SystemClock};

/// Service for budget and expense operations on the store's bound period
pub struct BudgetService<'a> {
    store: &'a LedgerStore,
    audit: AuditLogger,
    clock: Box<dyn Clock + 'a>,
}

/// Confirmation returned by [`BudgetService::set_budget`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSet {
    pub period: Period,
    pub budget: Money,
}

/// Confirmation returned by [`BudgetService::record_expense`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecorded {
    pub period: Period,
    pub transaction: Transaction,
    /// New remaining balance, `None` when the period has no budget
    pub remaining: Option<Money>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service dating expenses with the system clock
    pub fn new(store: &'a LedgerStore) -> Self {
        Self {
            store,
            audit: AuditLogger::new(store.paths().audit_log()),
            clock: Box::new(SystemClock),
        }
    }

    /// Use a different clock for expense dates
    pub fn with_clock(mut self, clock: impl Clock + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn period(&self) -> Period {
        self.store.period()
    }

    /// Create or overwrite the period's budget, resetting remaining to `amount`
    ///
    /// Zero and negative budgets are accepted.
    pub fn set_budget(&self, amount: Money) -> BudgetResult<BudgetSet> {
        let period = self.store.period();
        let before = self.store.load_budget()?;
        let record = BudgetRecord::new(amount);

        self.store.save_budget(&record)?;

        let entry = match before {
            None => AuditEntry::create(EntityType::Budget, period.storage_key(), None, &record),
            Some(before) => AuditEntry::update(
                EntityType::Budget,
                period.storage_key(),
                None,
                &before,
                &record,
                Some(format!(
                    "budget: {} -> {}, remaining: {} -> {}",
                    before.budget, record.budget, before.remaining, record.remaining
                )),
            ),
        };
        self.audit.log(&entry)?;

        Ok(BudgetSet {
            period,
            budget: amount,
        })
    }

    /// Read the period's budget record
    pub fn load_budget(&self) -> BudgetResult<Option<BudgetRecord>> {
        self.store.load_budget()
    }

    /// Read the period's transactions in entry order
    pub fn transactions(&self) -> BudgetResult<Vec<Transaction>> {
        self.store.load_transactions()
    }

    /// Record an expense dated today and decrement the remaining balance
    ///
    /// The transaction is always stored. If the period has no budget the
    /// balance update is skipped and `remaining` in the result is `None`.
    /// Amounts are not sign-checked, but an expense that would overflow the
    /// remaining balance is refused before anything is written.
    pub fn record_expense(&self, category: &str, amount: Money) -> BudgetResult<ExpenseRecorded> {
        let period = self.store.period();
        let transaction = Transaction::new(self.clock.today(), category, amount);
        transaction
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let update = match self.store.load_budget()? {
            Some(before) => {
                let after = before.with_expense(amount).ok_or_else(|| {
                    BudgetError::Validation(format!(
                        "Expense of {} would overflow the remaining budget for {}",
                        amount, period
                    ))
                })?;
                Some((before, after))
            }
            None => None,
        };

        self.store.append_transaction(transaction.clone())?;
        if let Some((_, after)) = &update {
            self.store.save_budget(after)?;
        }

        let mut entries = vec![AuditEntry::create(
            EntityType::Transaction,
            period.storage_key(),
            Some(transaction.category.clone()),
            &transaction,
        )];
        if let Some((before, after)) = &update {
            entries.push(AuditEntry::update(
                EntityType::Budget,
                period.storage_key(),
                None,
                before,
                after,
                Some(format!(
                    "remaining: {} -> {}",
                    before.remaining, after.remaining
                )),
            ));
        }
        self.audit.log_batch(&entries)?;

        Ok(ExpenseRecorded {
            period,
            transaction,
            remaining: update.map(|(_, after)| after.remaining),
        })
    }

    /// Exceeded / near-limit warning for the period, if any
    ///
    /// No budget means no warning.
    pub fn check_budget_warning(&self) -> BudgetResult<Option<BudgetWarning>> {
        Ok(self.store.load_budget()?.and_then(|r| r.warning()))
    }

    /// Category summary for the period, `None` when no budget is set
    pub fn summarize(&self) -> BudgetResult<Option<SummaryReport>> {
        let Some(record) = self.store.load_budget()? else {
            return Ok(None);
        };
        let transactions = self.store.load_transactions()?;

        SummaryReport::generate(self.store.period(), &record, &transactions).map(Some)
    }
}
