//! Path management for budget-tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The platform data directory (`~/.local/share/budget-tracker` on Linux)
//! 4. `./budget_data` when no home directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;
use crate::models::Period;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

/// Manages all paths used by budget-tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all budget-tracker data
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from the environment and platform defaults
    pub fn new() -> Self {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self { base_dir }
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `explicit` if given, otherwise fall back to [`BudgetPaths::new`]
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(dir) => Self::with_base_dir(dir),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one subdirectory per period
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Storage directory for one period (`data/2025_January`)
    pub fn period_dir(&self, period: &Period) -> PathBuf {
        self.data_dir().join(period.storage_key())
    }

    /// Budget record file for a period
    pub fn budget_file(&self, period: &Period) -> PathBuf {
        self.period_dir(period).join("budget.json")
    }

    /// Transaction log file for a period
    pub fn transactions_file(&self, period: &Period) -> PathBuf {
        self.period_dir(period).join("transactions.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

impl Default for BudgetPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "budget-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("budget_data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::resolve(Some(temp_dir.path().to_path_buf()));
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_period_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let period = Period::new(2025, 3).unwrap();

        let dir = temp_dir.path().join("data").join("2025_March");
        assert_eq!(paths.period_dir(&period), dir);
        assert_eq!(paths.budget_file(&period), dir.join("budget.json"));
        assert_eq!(
            paths.transactions_file(&period),
            dir.join("transactions.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
