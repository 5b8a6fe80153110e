//! Persisted item records
//!
//! Items are stored as flat JSON objects tagged by a `type` discriminator:
//!
//! ```json
//! { "type": "Book", "item_id": 1, "title": "Clean Code",
//!   "author": "Robert C. Martin", "page_count": 450, "is_available": false,
//!   "borrow_date": "2024-03-10T10:00:00Z", "due_date": "2024-03-17T10:00:00Z" }
//! ```
//!
//! The loan dates are only written while an item is out. Records without
//! them still load; a borrowed item restored that way has no due date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Audiobook, Book, EMagazine, Item, ItemId, ItemType, ItemVariant};

/// Flat on-disk representation of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemRecord {
    Book {
        item_id: ItemId,
        title: String,
        author: String,
        page_count: u32,
        is_available: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        borrow_date: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        due_date: Option<DateTime<Utc>>,
    },
    Audiobook {
        item_id: ItemId,
        title: String,
        author: String,
        duration: f64,
        is_available: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        borrow_date: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        due_date: Option<DateTime<Utc>>,
    },
    EMagazine {
        item_id: ItemId,
        title: String,
        author: String,
        issue_number: i64,
        is_available: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        borrow_date: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        due_date: Option<DateTime<Utc>>,
    },
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        let item_id = item.id;
        let title = item.title.clone();
        let author = item.author.clone();
        let is_available = item.is_available;
        let borrow_date = item.borrow_date;
        let due_date = item.due_date;

        match item.variant {
            ItemVariant::Book(b) => Self::Book {
                item_id,
                title,
                author,
                page_count: b.page_count,
                is_available,
                borrow_date,
                due_date,
            },
            ItemVariant::Audiobook(a) => Self::Audiobook {
                item_id,
                title,
                author,
                duration: a.duration,
                is_available,
                borrow_date,
                due_date,
            },
            ItemVariant::EMagazine(m) => Self::EMagazine {
                item_id,
                title,
                author,
                issue_number: m.issue_number,
                is_available,
                borrow_date,
                due_date,
            },
        }
    }
}

/// Convert an item to its persisted record
pub fn serialize(item: &Item) -> ItemRecord {
    ItemRecord::from(item)
}

/// Rebuild an item from a record
///
/// Loan dates are restored only for borrowed items, and only as a pair.
pub fn deserialize(record: ItemRecord) -> LibraryResult<Item> {
    let (item_id, title, author, is_available, borrow_date, due_date, variant) = match record {
        ItemRecord::Book {
            item_id,
            title,
            author,
            page_count,
            is_available,
            borrow_date,
            due_date,
        } => (
            item_id,
            title,
            author,
            is_available,
            borrow_date,
            due_date,
            ItemVariant::from(Book { page_count }),
        ),
        ItemRecord::Audiobook {
            item_id,
            title,
            author,
            duration,
            is_available,
            borrow_date,
            due_date,
        } => (
            item_id,
            title,
            author,
            is_available,
            borrow_date,
            due_date,
            ItemVariant::from(Audiobook { duration }),
        ),
        ItemRecord::EMagazine {
            item_id,
            title,
            author,
            issue_number,
            is_available,
            borrow_date,
            due_date,
        } => (
            item_id,
            title,
            author,
            is_available,
            borrow_date,
            due_date,
            ItemVariant::from(EMagazine { issue_number }),
        ),
    };

    let mut item = Item::new(item_id, title, author, variant);
    item.validate()?;

    if !is_available {
        item.is_available = false;
        match (borrow_date, due_date) {
            (Some(borrowed), Some(due)) => {
                item.borrow_date = Some(borrowed);
                item.due_date = Some(due);
            }
            (None, None) => {}
            _ => {
                return Err(LibraryError::Validation(format!(
                    "Item {} must have both borrow_date and due_date or neither",
                    item.id
                )))
            }
        }
    }

    Ok(item)
}

/// Rebuild an item from an untyped JSON object
///
/// An unrecognized `type` yields `LibraryError::UnknownVariant` so callers can
/// tell it apart from a malformed record. Extra keys are ignored.
pub fn deserialize_value(value: &Value) -> LibraryResult<Item> {
    let tag = value
        .get("type")
        .ok_or_else(|| LibraryError::Json("missing field `type`".into()))?
        .as_str()
        .ok_or_else(|| LibraryError::Json("field `type` must be a string".into()))?;

    if ItemType::from_tag(tag).is_none() {
        return Err(LibraryError::UnknownVariant(tag.to_string()));
    }

    let record: ItemRecord = serde_json::from_value(value.clone())
        .map_err(|e| LibraryError::Json(format!("Invalid {} record: {}", tag, e)))?;

    deserialize(record)
}
