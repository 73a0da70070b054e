//! Per-period ledger storage
//!
//! A `LedgerStore` is bound to one period at a time and owns that period's
//! `budget.json` and `transactions.json`. Nothing is cached: every read goes
//! back to disk, so files edited between calls are picked up immediately.

use std::fs;
use std::path::PathBuf;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{BudgetRecord, Period, Transaction};

use super::file_io::{read_json, read_json_optional, write_json_atomic};

/// File-backed store for one period's budget and transactions
#[derive(Debug, Clone)]
pub struct LedgerStore {
    paths: BudgetPaths,
    period: Period,
}

impl LedgerStore {
    /// Create a store bound to `period`; nothing is touched on disk
    pub fn new(paths: BudgetPaths, period: Period) -> Self {
        Self { paths, period }
    }

    /// Rebind to a different period
    pub fn bind_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Storage directory of the bound period
    pub fn period_dir(&self) -> PathBuf {
        self.paths.period_dir(&self.period)
    }

    pub fn budget_file(&self) -> PathBuf {
        self.paths.budget_file(&self.period)
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.paths.transactions_file(&self.period)
    }

    /// Whether the bound period has a storage directory yet
    pub fn storage_exists(&self) -> bool {
        self.period_dir().is_dir()
    }

    /// Create the bound period's storage directory if absent
    pub fn ensure_storage_exists(&self) -> Result<(), BudgetError> {
        let dir = self.period_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        })
    }

    /// Read the budget record, `None` if no budget has been set
    pub fn load_budget(&self) -> Result<Option<BudgetRecord>, BudgetError> {
        read_json_optional(self.budget_file())
    }

    /// Create or overwrite the budget record
    pub fn save_budget(&self, record: &BudgetRecord) -> Result<(), BudgetError> {
        self.ensure_storage_exists()?;
        write_json_atomic(self.budget_file(), record)
    }

    /// Read all transactions in entry order (empty if none recorded)
    pub fn load_transactions(&self) -> Result<Vec<Transaction>, BudgetError> {
        read_json(self.transactions_file())
    }

    /// Append one transaction by rewriting the whole sequence
    pub fn append_transaction(&self, transaction: Transaction) -> Result<(), BudgetError> {
        let mut transactions = self.load_transactions()?;
        transactions.push(transaction);

        self.ensure_storage_exists()?;
        write_json_atomic(self.transactions_file(), &transactions)
    }

    /// Periods that have a storage directory, oldest first
    pub fn list_periods(&self) -> Result<Vec<Period>, BudgetError> {
        let data_dir = self.paths.data_dir();
        if !data_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&data_dir).map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", data_dir.display(), e))
        })?;

        let mut periods = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(period) = entry.file_name().to_str().and_then(Period::from_storage_key) {
                periods.push(period);
            }
        }

        periods.sort();
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = LedgerStore::new(paths, Period::new(2025, 1).unwrap());
        (temp_dir, store)
    }

    fn txn(category: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_new_store_touches_nothing() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.storage_exists());
        assert!(store.load_budget().unwrap().is_none());
        assert!(store.load_transactions().unwrap().is_empty());
        assert!(!store.storage_exists());
    }

    #[test]
    fn test_ensure_storage_exists_is_idempotent() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_storage_exists().unwrap();
        store.ensure_storage_exists().unwrap();
        assert!(store.storage_exists());
        assert!(store.period_dir().ends_with("2025_January"));
    }

    #[test]
    fn test_save_and_load_budget() {
        let (_temp_dir, store) = create_test_store();
        let record = BudgetRecord::new(Money::from_cents(10000));

        store.save_budget(&record).unwrap();
        assert!(store.storage_exists());
        assert_eq!(store.load_budget().unwrap(), Some(record));
    }

    #[test]
    fn test_append_preserves_order() {
        let (_temp_dir, store) = create_test_store();
        store.append_transaction(txn("Food", 100)).unwrap();
        store.append_transaction(txn("Rent", 200)).unwrap();
        store.append_transaction(txn("Food", 300)).unwrap();

        let categories: Vec<_> = store
            .load_transactions()
            .unwrap()
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(categories, vec!["Food", "Rent", "Food"]);
    }

    #[test]
    fn test_external_edits_are_visible() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_storage_exists().unwrap();
        fs::write(store.budget_file(), r#"{"budget": 50, "remaining": 12.34}"#).unwrap();

        let record = store.load_budget().unwrap().unwrap();
        assert_eq!(record.remaining.cents(), 1234);

        fs::write(
            store.transactions_file(),
            r#"[{"date": "2025-01-02", "category": "Gas", "amount": 40}]"#,
        )
        .unwrap();
        assert_eq!(store.load_transactions().unwrap(), vec![txn_on(2, "Gas", 4000)]);
    }

    fn txn_on(day: u32, category: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_corrupt_budget_file_errors() {
        let (_temp_dir, store) = create_test_store();
        store.ensure_storage_exists().unwrap();
        fs::write(store.budget_file(), "{ broken").unwrap();

        assert!(store.load_budget().is_err());
    }

    #[test]
    fn test_periods_are_isolated() {
        let (_temp_dir, mut store) = create_test_store();
        store
            .save_budget(&BudgetRecord::new(Money::from_cents(100)))
            .unwrap();
        store.append_transaction(txn("Food", 50)).unwrap();

        store.bind_period(Period::new(2025, 2).unwrap());
        assert!(store.load_budget().unwrap().is_none());
        assert!(store.load_transactions().unwrap().is_empty());
        assert!(!store.storage_exists());
    }

    #[test]
    fn test_list_periods() {
        let (_temp_dir, mut store) = create_test_store();
        assert!(store.list_periods().unwrap().is_empty());

        store.bind_period(Period::new(2025, 3).unwrap());
        store.ensure_storage_exists().unwrap();
        store.bind_period(Period::new(2024, 11).unwrap());
        store.ensure_storage_exists().unwrap();
        fs::create_dir_all(store.paths().data_dir().join("not-a-period")).unwrap();

        assert_eq!(
            store.list_periods().unwrap(),
            vec![Period::new(2024, 11).unwrap(), Period::new(2025, 3).unwrap()]
        );
    }
}
