//! Audit logging for budget-tracker
//!
//! Every budget and transaction mutation is appended to `audit.log` as one
//! JSON line, with before/after values for updates.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::Budget, "2025_January", None, &record);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
