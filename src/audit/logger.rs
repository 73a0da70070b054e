//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the log, creating the file if needed
    pub fn log(&self, entry: &AuditEntry) -> BudgetResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several entries with a single flush
    pub fn log_batch(&self, entries: &[AuditEntry]) -> BudgetResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| BudgetError::Audit(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BudgetError::Audit(format!("Failed to open audit log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry)
                .map_err(|e| BudgetError::Json(format!("Failed to serialize audit entry: {}", e)))?;

            writeln!(file, "{}", json)
                .map_err(|e| BudgetError::Audit(format!("Failed to write audit entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| BudgetError::Audit(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> BudgetResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Audit(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                BudgetError::Audit(format!(
                    "Failed to read audit log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                BudgetError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> BudgetResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> BudgetResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BudgetError::Audit(format!("Failed to open audit log: {}", e)))?;

        let count = BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn budget_entry(key: &str) -> AuditEntry {
        AuditEntry::create(
            EntityType::Budget,
            key,
            None,
            &json!({"budget": 100.0, "remaining": 100.0}),
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&budget_entry("2025_January")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Budget);
    }

    #[test]
    fn test_log_batch_and_count() {
        let (logger, _temp) = create_test_logger();
        let entries: Vec<_> = ["2025_January", "2025_February", "2025_March"]
            .iter()
            .map(|k| budget_entry(k))
            .collect();

        logger.log_batch(&entries).unwrap();
        logger.log_batch(&[]).unwrap();

        assert_eq!(logger.entry_count().unwrap(), 3);
        assert_eq!(logger.read_all().unwrap().len(), 3);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for month in ["2025_January", "2025_February", "2025_March", "2025_April"] {
            logger.log(&budget_entry(month)).unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity_id, "2025_March");
        assert_eq!(recent[1].entity_id, "2025_April");

        assert_eq!(logger.read_recent(10).unwrap().len(), 4);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_creates_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("fresh").join("audit.log"));

        logger.log(&budget_entry("2025_January")).unwrap();
        assert!(logger.exists());
    }

    #[test]
    fn test_corrupt_line_errors() {
        let (logger, _temp) = create_test_logger();
        logger.log(&budget_entry("2025_January")).unwrap();
        fs::write(logger.path(), "garbage\n").unwrap();

        assert!(logger.read_all().is_err());
    }
}
