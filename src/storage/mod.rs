//! Storage layer for LibraNet
//!
//! JSON file storage for the item collection with atomic writes, plus the
//! audit log that records what happened to it.

pub mod file_io;
pub mod library;
pub mod record;
pub mod seed;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use library::{LibraryStore, LoadReport};
pub use record::{deserialize, deserialize_value, serialize, ItemRecord};
pub use seed::default_catalog;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LibraryPaths;
use crate::error::LibraryError;

/// Main storage coordinator
pub struct Storage {
    paths: LibraryPaths,
    pub library: LibraryStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LibraryPaths) -> Result<Self, LibraryError> {
        paths.ensure_directories()?;

        Ok(Self {
            library: LibraryStore::new(paths.library_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an audit entry if auditing is enabled
    pub fn log(&self, entry: &AuditEntry) -> Result<(), LibraryError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(entry)
    }

    /// Check if the library file has been written yet
    pub fn is_initialized(&self) -> bool {
        self.library.exists()
    }
}
