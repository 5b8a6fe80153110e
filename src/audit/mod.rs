//! Audit logging for LibraNet
//!
//! Records every borrow and return in an append-only audit log so the
//! history of the catalog survives between runs.
//!
//! - `AuditEntry`: a single event with timestamp, operation and the item it
//!   touched, with the item's record before and after the change.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use libranet::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let before = item.clone();
//! let outcome = item.borrow("7 days")?;
//! logger.log(&AuditEntry::borrowed(&before, &item, &outcome))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
