//! Catalog item model
//!
//! An item is a borrowable entry in the catalog. Borrow and return move it
//! between the available and checked-out states; the dates are only set
//! while it is checked out.

use chrono::{DateTime, Days, Utc};
use std::fmt;

use super::fine::{Fine, FINE_RATE};
use super::ids::ItemId;
use super::loan::{parse_loan_days, BorrowOutcome, ReturnOutcome};
use super::variant::{Audiobook, Book, EMagazine, ItemType, ItemVariant, PlayableItem};
use crate::error::{LibraryError, LibraryResult};

/// A catalog item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Identifier, unique within a collection
    pub id: ItemId,

    /// Title (e.g., "Clean Code")
    pub title: String,

    /// Author or editorial credit
    pub author: String,

    /// Whether the item is on the shelf
    pub is_available: bool,

    /// When the current loan started
    pub borrow_date: Option<DateTime<Utc>>,

    /// When the current loan ends
    pub due_date: Option<DateTime<Utc>>,

    /// Fine charged per overdue day
    pub fine_rate: Fine,

    /// Kind-specific data
    pub variant: ItemVariant,
}

impl Item {
    /// Create a new, available item
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        variant: impl Into<ItemVariant>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            is_available: true,
            borrow_date: None,
            due_date: None,
            fine_rate: FINE_RATE,
            variant: variant.into(),
        }
    }

    /// Create a book
    pub fn book(id: u32, title: impl Into<String>, author: impl Into<String>, page_count: u32) -> Self {
        Self::new(id, title, author, Book { page_count })
    }

    /// Create an audiobook; `duration` is in hours
    pub fn audiobook(id: u32, title: impl Into<String>, author: impl Into<String>, duration: f64) -> Self {
        Self::new(id, title, author, Audiobook { duration })
    }

    /// Create an e-magazine issue
    pub fn emagazine(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        issue_number: i64,
    ) -> Self {
        Self::new(id, title, author, EMagazine { issue_number })
    }

    /// The kind of this item
    pub fn item_type(&self) -> ItemType {
        self.variant.item_type()
    }

    /// Whether the item can be borrowed right now
    pub fn check_availability(&self) -> bool {
        self.is_available
    }

    /// Borrow the item starting now
    pub fn borrow(&mut self, duration: &str) -> LibraryResult<BorrowOutcome> {
        self.borrow_at(duration, Utc::now())
    }

    /// Borrow the item with the loan starting at `now`
    ///
    /// Returns `BorrowOutcome::Unavailable` without touching anything if the
    /// item is already out. A duration without a usable day count is an
    /// error and also leaves the item unchanged.
    pub fn borrow_at(&mut self, duration: &str, now: DateTime<Utc>) -> LibraryResult<BorrowOutcome> {
        if !self.is_available {
            return Ok(BorrowOutcome::Unavailable {
                title: self.title.clone(),
            });
        }

        let days = parse_loan_days(duration)?;
        let due_date = now
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| LibraryError::DurationParse(format!("{} days is too far out", days)))?;

        self.borrow_date = Some(now);
        self.due_date = Some(due_date);
        self.is_available = false;

        Ok(BorrowOutcome::Borrowed {
            title: self.title.clone(),
            days,
            due_date,
        })
    }

    /// Return the item now
    pub fn return_item(&mut self) -> ReturnOutcome {
        self.return_item_at(Utc::now())
    }

    /// Return the item at `now`, charging for each whole day past the due date
    pub fn return_item_at(&mut self, now: DateTime<Utc>) -> ReturnOutcome {
        if self.is_available {
            return ReturnOutcome::NotBorrowed {
                title: self.title.clone(),
            };
        }

        let overdue_days = self.overdue_days_at(now);

        self.is_available = true;
        self.borrow_date = None;
        self.due_date = None;

        if overdue_days > 0 {
            ReturnOutcome::Overdue {
                title: self.title.clone(),
                days: overdue_days,
                fine: self.fine_rate.for_days(overdue_days),
            }
        } else {
            ReturnOutcome::OnTime {
                title: self.title.clone(),
            }
        }
    }

    /// Whole days past the due date at `now` (zero if not overdue or no due date)
    pub fn overdue_days_at(&self, now: DateTime<Utc>) -> i64 {
        self.due_date
            .map_or(0, |due| (now - due).num_days().max(0))
    }

    /// One-line summary of the item
    pub fn display_info(&self) -> String {
        let (label, value) = self.variant.detail();
        format!(
            "{}[{}]: {} by {}, {}: {}, Available: {}",
            self.item_type(),
            self.id,
            self.title,
            self.author,
            label,
            value,
            self.is_available
        )
    }

    /// Playback view of this item, if it is an audiobook
    pub fn as_playable(&self) -> Option<PlayableItem<'_>> {
        match &self.variant {
            ItemVariant::Audiobook(audiobook) => Some(PlayableItem {
                title: &self.title,
                audiobook,
            }),
            _ => None,
        }
    }

    /// Archive this issue, if the item is an e-magazine
    pub fn archive_issue(&self) -> Option<String> {
        match &self.variant {
            ItemVariant::EMagazine(m) => Some(format!(
                "Archiving issue #{} of {}",
                m.issue_number, self.title
            )),
            _ => None,
        }
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.get() == 0 {
            return Err(ItemValidationError::ZeroId);
        }

        if self.title.trim().is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }

        if self.author.trim().is_empty() {
            return Err(ItemValidationError::EmptyAuthor);
        }

        match self.variant {
            ItemVariant::Book(b) if b.page_count == 0 => Err(ItemValidationError::NoPages),
            ItemVariant::Audiobook(a) if !(a.duration.is_finite() && a.duration > 0.0) => {
                Err(ItemValidationError::InvalidDuration(a.duration))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    ZeroId,
    EmptyTitle,
    EmptyAuthor,
    NoPages,
    InvalidDuration(f64),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroId => write!(f, "Item id must be positive"),
            Self::EmptyTitle => write!(f, "Item title cannot be empty"),
            Self::EmptyAuthor => write!(f, "Item author cannot be empty"),
            Self::NoPages => write!(f, "Book page count must be positive"),
            Self::InvalidDuration(d) => {
                write!(f, "Audiobook duration must be a positive number of hours, got {}", d)
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

impl From<ItemValidationError> for LibraryError {
    fn from(err: ItemValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use crate::models::variant::Playable;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_new_item_is_available() {
        let item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        assert!(item.check_availability());
        assert!(item.borrow_date.is_none());
        assert!(item.due_date.is_none());
        assert_eq!(item.fine_rate, FINE_RATE);
    }

    #[test]
    fn test_borrow_sets_dates() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        let now = at(2024, 3, 10);

        let outcome = item.borrow_at("7 days", now).unwrap();

        assert!(outcome.is_borrowed());
        assert_eq!(outcome.to_string(), "Clean Code borrowed for 7 days.");
        assert!(!item.is_available);
        assert_eq!(item.borrow_date, Some(now));
        assert_eq!(item.due_date, Some(at(2024, 3, 17)));
    }

    #[test]
    fn test_borrow_crosses_month_boundary() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        item.borrow_at("5 days", at(2024, 1, 30)).unwrap();
        assert_eq!(item.due_date, Some(at(2024, 2, 4)));
    }

    #[test]
    fn test_borrow_crosses_year_boundary() {
        let mut item = Item::emagazine(3, "Tech Monthly", "Editorial Team", 42);
        item.borrow_at("5 days", at(2023, 12, 30)).unwrap();
        assert_eq!(item.due_date, Some(at(2024, 1, 4)));
    }

    #[test]
    fn test_borrow_handles_leap_february() {
        let mut item = Item::audiobook(4, "Atomic Habits", "James Clear", 6.5);
        item.borrow_at("3 days", at(2024, 2, 27)).unwrap();
        assert_eq!(item.due_date, Some(at(2024, 3, 1)));
    }

    #[test]
    fn test_borrow_unavailable_is_noop() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        item.borrow_at("7 days", at(2024, 3, 10)).unwrap();
        let before = item.clone();

        let outcome = item.borrow_at("3 days", at(2024, 3, 11)).unwrap();

        assert_eq!(
            outcome,
            BorrowOutcome::Unavailable {
                title: "Clean Code".into()
            }
        );
        assert_eq!(item, before);
    }

    #[test]
    fn test_borrow_bad_duration_leaves_item_unchanged() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        let before = item.clone();

        let err = item.borrow_at("a week", at(2024, 3, 10)).unwrap_err();

        assert!(matches!(err, LibraryError::DurationParse(_)));
        assert_eq!(item, before);
    }

    #[test]
    fn test_return_late_charges_fine() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        let borrowed = at(2024, 3, 10);
        item.borrow_at("3 days", borrowed).unwrap();

        let outcome = item.return_item_at(borrowed + Duration::days(5));

        assert_eq!(outcome.fine(), FINE_RATE.for_days(2));
        assert_eq!(outcome.to_string(), "Clean Code returned. Fine: Rs 20");
        assert!(item.is_available);
        assert!(item.borrow_date.is_none());
        assert!(item.due_date.is_none());
    }

    #[test]
    fn test_return_on_due_date_is_free() {
        let mut item = Item::book(2, "The Pragmatic Programmer", "Andy Hunt", 320);
        let borrowed = at(2024, 3, 10);
        item.borrow_at("3 days", borrowed).unwrap();

        let outcome = item.return_item_at(borrowed + Duration::days(3));
        assert_eq!(
            outcome,
            ReturnOutcome::OnTime {
                title: "The Pragmatic Programmer".into()
            }
        );

        item.borrow_at("3 days", borrowed).unwrap();
        let early = item.return_item_at(borrowed + Duration::days(1));
        assert!(early.fine().is_zero());
    }

    #[test]
    fn test_partial_day_late_is_not_charged() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        let borrowed = at(2024, 3, 10);
        item.borrow_at("1 day", borrowed).unwrap();

        let outcome = item.return_item_at(borrowed + Duration::days(1) + Duration::hours(23));
        assert!(outcome.fine().is_zero());
    }

    #[test]
    fn test_return_available_is_noop() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        let before = item.clone();

        let outcome = item.return_item_at(at(2024, 3, 10));

        assert!(!outcome.is_returned());
        assert_eq!(item, before);
    }

    #[test]
    fn test_return_without_due_date_is_on_time() {
        let mut item = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        item.is_available = false;

        let outcome = item.return_item_at(at(2024, 3, 10));

        assert!(matches!(outcome, ReturnOutcome::OnTime { .. }));
        assert!(item.is_available);
    }

    #[test]
    fn test_display_info() {
        let book = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        assert_eq!(
            book.display_info(),
            "Book[1]: Clean Code by Robert C. Martin, Pages: 450, Available: true"
        );

        let audio = Item::audiobook(4, "Atomic Habits", "James Clear", 6.5);
        assert_eq!(
            audio.display_info(),
            "Audiobook[4]: Atomic Habits by James Clear, Duration: 6.5 hours, Available: true"
        );

        let mag = Item::emagazine(3, "Tech Monthly", "Editorial Team", 42);
        assert_eq!(
            mag.display_info(),
            "EMagazine[3]: Tech Monthly by Editorial Team, Issue: 42, Available: true"
        );
    }

    #[test]
    fn test_play_ignores_availability() {
        let mut audio = Item::audiobook(4, "Atomic Habits", "James Clear", 6.5);
        audio.borrow_at("2 days", at(2024, 3, 10)).unwrap();

        let playable = audio.as_playable().unwrap();
        assert_eq!(playable.play(), "Playing audiobook: Atomic Habits (6.5 hrs)");
        assert!(!audio.is_available);

        let book = Item::book(1, "Clean Code", "Robert C. Martin", 450);
        assert!(book.as_playable().is_none());
    }

    #[test]
    fn test_archive_issue() {
        let mag = Item::emagazine(3, "Tech Monthly", "Editorial Team", 42);
        let before = mag.clone();
        assert_eq!(
            mag.archive_issue().as_deref(),
            Some("Archiving issue #42 of Tech Monthly")
        );
        assert_eq!(mag, before);
        assert!(Item::book(1, "Clean Code", "Robert C. Martin", 450)
            .archive_issue()
            .is_none());
    }

    #[test]
    fn test_validation() {
        let mut item = Item::book(1, "Valid", "Someone", 100);
        assert!(item.validate().is_ok());

        item.title = "  ".into();
        assert_eq!(item.validate(), Err(ItemValidationError::EmptyTitle));

        let zero_pages = Item::book(1, "Valid", "Someone", 0);
        assert_eq!(zero_pages.validate(), Err(ItemValidationError::NoPages));

        let bad_audio = Item::audiobook(2, "Valid", "Someone", -1.0);
        assert!(matches!(
            bad_audio.validate(),
            Err(ItemValidationError::InvalidDuration(_))
        ));

        let zero_id = Item::book(0, "Valid", "Someone", 10);
        assert_eq!(zero_id.validate(), Err(ItemValidationError::ZeroId));
    }
}
