//! User settings for LibraNet
//!
//! Stored as config.json next to the data directory. Missing fields fall
//! back to their defaults so older files keep loading.

use chrono::format::{Item as FormatItem, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::LibraryPaths;
use crate::error::LibraryError;
use crate::models::parse_loan_days;
use crate::storage::file_io::{read_json_or_default, write_json_atomic};

/// User settings for LibraNet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of this file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Loan duration used when `borrow` is given none
    #[serde(default = "default_loan")]
    pub default_loan: String,

    /// Whether borrow/return events go to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Date format for due dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_loan() -> String {
    "7 days".to_string()
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_loan: default_loan(),
            audit_enabled: default_true(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    ///
    /// Defaults are not written; the caller decides when to persist.
    pub fn load_or_create(paths: &LibraryPaths) -> Result<Self, LibraryError> {
        let settings: Settings = read_json_or_default(paths.settings_file())
            .map_err(|e| LibraryError::Config(format!("Failed to load settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibraryPaths) -> Result<(), LibraryError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check that the default loan and date format are usable
    pub fn validate(&self) -> Result<(), LibraryError> {
        parse_loan_days(&self.default_loan).map_err(|e| {
            LibraryError::Config(format!("Invalid default_loan '{}': {}", self.default_loan, e))
        })?;

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, FormatItem::Error)) {
            return Err(LibraryError::Config(format!(
                "Invalid date_format '{}'",
                self.date_format
            )));
        }

        Ok(())
    }
}
