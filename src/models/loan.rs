//! Borrowing support types
//!
//! Parsing of free-form loan durations and the outcomes that borrow and
//! return report back to the caller. Borrowing an unavailable item or
//! returning one that is on the shelf are expected user-facing situations,
//! so they are outcomes here rather than errors.

use chrono::{DateTime, Utc};
use std::fmt;

use super::fine::Fine;
use crate::error::{LibraryError, LibraryResult};

/// Extract a whole number of days from text such as "7 days"
///
/// The first run of ASCII digits is the day count; anything around it is
/// ignored. A minus sign directly in front of the digits is rejected.
pub fn parse_loan_days(text: &str) -> LibraryResult<u32> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| {
            LibraryError::DurationParse(format!("no day count found in '{}'", text.trim()))
        })?;

    if text[..start].trim_end().ends_with('-') {
        return Err(LibraryError::DurationParse(format!(
            "day count must not be negative: '{}'",
            text.trim()
        )));
    }

    let end = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |offset| start + offset);

    text[start..end].parse::<u32>().map_err(|e| {
        LibraryError::DurationParse(format!("invalid day count '{}': {}", &text[start..end], e))
    })
}

/// Result of a borrow request
#[derive(Debug, Clone, PartialEq)]
pub enum BorrowOutcome {
    /// The item was checked out
    Borrowed {
        title: String,
        days: u32,
        due_date: DateTime<Utc>,
    },
    /// The item is already out; nothing changed
    Unavailable { title: String },
}

impl BorrowOutcome {
    /// Check whether the item was actually checked out
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed { .. })
    }
}

impl fmt::Display for BorrowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed { title, days, .. } => write!(f, "{} borrowed for {} days.", title, days),
            Self::Unavailable { title } => write!(f, "{} is currently not available.", title),
        }
    }
}

/// Result of a return request
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnOutcome {
    /// Returned on or before the due date
    OnTime { title: String },
    /// Returned late; a fine is owed
    Overdue {
        title: String,
        days: i64,
        fine: Fine,
    },
    /// The item was not out; nothing changed
    NotBorrowed { title: String },
}

impl ReturnOutcome {
    /// Fine owed for this return (zero unless overdue)
    pub fn fine(&self) -> Fine {
        match self {
            Self::Overdue { fine, .. } => *fine,
            _ => Fine::zero(),
        }
    }

    /// Check whether the item was actually returned
    pub fn is_returned(&self) -> bool {
        !matches!(self, Self::NotBorrowed { .. })
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTime { title } => write!(f, "{} returned on time.", title),
            Self::Overdue { title, fine, .. } => write!(f, "{} returned. Fine: {}", title, fine),
            Self::NotBorrowed { title } => write!(f, "{} was not borrowed.", title),
        }
    }
}
