//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BorrowOutcome, Fine, Item, ItemId, ReturnOutcome};
use crate::storage::ItemRecord;

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Default catalog written to disk
    Initialize,
    /// Item checked out
    Borrow,
    /// Item checked back in
    Return,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Initialize => write!(f, "INIT"),
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
        }
    }
}

/// A single audit log entry
///
/// Borrow and return entries carry the item's record before and after the
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Item affected, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,

    /// Title of the affected item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,

    /// Due date set by a borrow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Fine charged by a late return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,

    /// Item record before the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Item record after the operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable outcome
    pub summary: String,
}

fn snapshot(item: &Item) -> Option<serde_json::Value> {
    serde_json::to_value(ItemRecord::from(item)).ok()
}

impl AuditEntry {
    fn for_item(operation: Operation, before: &Item, after: &Item, summary: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            item_id: Some(after.id),
            item_title: Some(after.title.clone()),
            due_date: None,
            fine: None,
            before: snapshot(before),
            after: snapshot(after),
            summary,
        }
    }

    /// Entry for a completed borrow
    pub fn borrowed(before: &Item, after: &Item, outcome: &BorrowOutcome) -> Self {
        let mut entry = Self::for_item(Operation::Borrow, before, after, outcome.to_string());
        if let BorrowOutcome::Borrowed { due_date, .. } = outcome {
            entry.due_date = Some(*due_date);
        }
        entry
    }

    /// Entry for a completed return
    pub fn returned(before: &Item, after: &Item, outcome: &ReturnOutcome) -> Self {
        let mut entry = Self::for_item(Operation::Return, before, after, outcome.to_string());
        let fine = outcome.fine();
        if !fine.is_zero() {
            entry.fine = Some(fine);
        }
        entry
    }

    /// Entry for writing the default catalog
    pub fn initialized(item_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Initialize,
            item_id: None,
            item_title: None,
            due_date: None,
            fine: None,
            before: None,
            after: None,
            summary: format!("Default catalog created with {} items", item_count),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(id) = self.item_id {
            output.push_str(&format!(" Item {}", id));
        }

        output.push_str(&format!(": {}", self.summary));

        if let Some(due) = self.due_date {
            output.push_str(&format!(" (due {})", due.format("%Y-%m-%d")));
        }

        output
    }
}
