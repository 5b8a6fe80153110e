//! Catalog service
//!
//! `Catalog` owns a loaded collection and resolves item ids to items before
//! handing requests to the item model. `CatalogService` wraps it with the
//! load/save/audit cycle each command needs.

use chrono::{DateTime, Utc};

use crate::audit::AuditEntry;
use crate::error::{LibraryError, LibraryResult};
use crate::models::{BorrowOutcome, Item, ItemId, Playable, ReturnOutcome};
use crate::storage::{LoadReport, Storage};

use super::search::SearchQuery;

/// An in-memory item collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wrap a collection
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All items in collection order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by id (first match wins)
    pub fn get(&self, id: ItemId) -> LibraryResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| LibraryError::item_not_found(id))
    }

    /// Find an item by id for modification
    pub fn get_mut(&mut self, id: ItemId) -> LibraryResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| LibraryError::item_not_found(id))
    }

    /// Borrow an item with the loan starting at `now`
    pub fn borrow_at(
        &mut self,
        id: ItemId,
        duration: &str,
        now: DateTime<Utc>,
    ) -> LibraryResult<BorrowOutcome> {
        self.get_mut(id)?.borrow_at(duration, now)
    }

    /// Return an item at `now`
    pub fn return_at(&mut self, id: ItemId, now: DateTime<Utc>) -> LibraryResult<ReturnOutcome> {
        Ok(self.get_mut(id)?.return_item_at(now))
    }

    /// Play an audiobook
    pub fn play(&self, id: ItemId) -> LibraryResult<String> {
        let item = self.get(id)?;
        item.as_playable()
            .map(|p| p.play())
            .ok_or_else(|| LibraryError::Validation(format!("Item {} is not an audiobook", id)))
    }

    /// Archive an e-magazine issue
    pub fn archive_issue(&self, id: ItemId) -> LibraryResult<String> {
        let item = self.get(id)?;
        item.archive_issue()
            .ok_or_else(|| LibraryError::Validation(format!("Item {} is not an e-magazine", id)))
    }

    /// Run a search over the collection
    pub fn search(&self, query: &SearchQuery) -> Vec<&Item> {
        query.apply(&self.items)
    }
}

/// Service tying the catalog to storage and the audit log
pub struct CatalogService<'a> {
    storage: &'a Storage,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the current collection
    pub fn load(&self) -> LibraryResult<Catalog> {
        Ok(Catalog::new(self.storage.library.load()?))
    }

    /// All items in collection order, with the records that were skipped
    pub fn list(&self) -> LibraryResult<LoadReport> {
        self.storage.library.load_with_report()
    }

    /// One item by id
    pub fn get(&self, id: ItemId) -> LibraryResult<Item> {
        self.load()?.get(id).cloned()
    }

    /// Items matching a query
    pub fn search(&self, query: &SearchQuery) -> LibraryResult<Vec<Item>> {
        let catalog = self.load()?;
        Ok(catalog.search(query).into_iter().cloned().collect())
    }

    /// Borrow an item now
    pub fn borrow(&self, id: ItemId, duration: &str) -> LibraryResult<BorrowOutcome> {
        self.borrow_at(id, duration, Utc::now())
    }

    /// Borrow an item, saving and auditing if it was checked out
    pub fn borrow_at(
        &self,
        id: ItemId,
        duration: &str,
        now: DateTime<Utc>,
    ) -> LibraryResult<BorrowOutcome> {
        let mut catalog = self.load()?;
        let before = catalog.get(id)?.clone();
        let outcome = catalog.borrow_at(id, duration, now)?;

        if outcome.is_borrowed() {
            self.storage.library.save(catalog.items())?;
            self.storage
                .log(&AuditEntry::borrowed(&before, catalog.get(id)?, &outcome))?;
        }

        tracing::info!(item = %id, outcome = %outcome, "borrow");
        Ok(outcome)
    }

    /// Return an item now
    pub fn return_item(&self, id: ItemId) -> LibraryResult<ReturnOutcome> {
        self.return_at(id, Utc::now())
    }

    /// Return an item, saving and auditing if it was out
    pub fn return_at(&self, id: ItemId, now: DateTime<Utc>) -> LibraryResult<ReturnOutcome> {
        let mut catalog = self.load()?;
        let before = catalog.get(id)?.clone();
        let outcome = catalog.return_at(id, now)?;

        if outcome.is_returned() {
            self.storage.library.save(catalog.items())?;
            self.storage
                .log(&AuditEntry::returned(&before, catalog.get(id)?, &outcome))?;
        }

        tracing::info!(item = %id, outcome = %outcome, "return");
        Ok(outcome)
    }

    /// Play an audiobook
    pub fn play(&self, id: ItemId) -> LibraryResult<String> {
        self.load()?.play(id)
    }

    /// Archive an e-magazine issue
    pub fn archive_issue(&self, id: ItemId) -> LibraryResult<String> {
        self.load()?.archive_issue(id)
    }

    /// Write the default catalog if no library file exists
    pub fn initialize(&self) -> LibraryResult<bool> {
        let created = self.storage.library.initialize()?;
        if created {
            let count = self.storage.library.load()?.len();
            self.storage.log(&AuditEntry::initialized(count))?;
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::LibraryPaths;
    use crate::models::{Fine, ItemType, FINE_RATE};
    use crate::storage::default_catalog;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_get_missing_item() {
        let catalog = Catalog::new(default_catalog());
        let err = catalog.get(ItemId::new(42)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Item not found: 42");
    }

    #[test]
    fn test_play_and_archive_dispatch_on_kind() {
        let catalog = Catalog::new(default_catalog());

        assert_eq!(
            catalog.play(ItemId::new(4)).unwrap(),
            "Playing audiobook: Atomic Habits (6.5 hrs)"
        );
        assert!(catalog.play(ItemId::new(1)).unwrap_err().is_validation());

        assert_eq!(
            catalog.archive_issue(ItemId::new(3)).unwrap(),
            "Archiving issue #42 of Tech Monthly"
        );
        assert!(catalog.archive_issue(ItemId::new(4)).is_err());
    }

    #[test]
    fn test_search_audiobooks_in_default_catalog() {
        let catalog = Catalog::new(default_catalog());
        let found = catalog.search(&SearchQuery::default().of_type(ItemType::Audiobook));
        let ids: Vec<u32> = found.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_borrow_then_late_return_through_service() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);
        let id = ItemId::new(1);
        let borrowed = at(2024, 5, 1);

        let outcome = service.borrow_at(id, "3 days", borrowed).unwrap();
        assert!(outcome.is_borrowed());
        assert!(!service.get(id).unwrap().is_available);

        let outcome = service.return_at(id, borrowed + Duration::days(5)).unwrap();
        assert_eq!(outcome.fine(), FINE_RATE.for_days(2));
        assert_eq!(outcome.fine(), Fine::from_units(20));
        assert!(service.get(id).unwrap().is_available);

        let history = storage.audit().read_all().unwrap();
        let ops: Vec<Operation> = history.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Borrow, Operation::Return]);

        let returned = &history[1];
        assert_eq!(returned.before.as_ref().unwrap()["is_available"], false);
        assert_eq!(returned.before.as_ref().unwrap()["due_date"], "2024-05-04T12:00:00Z");
        assert_eq!(returned.after.as_ref().unwrap()["is_available"], true);
        assert!(returned.after.as_ref().unwrap().get("due_date").is_none());
    }

    #[test]
    fn test_list_reports_skipped_records() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.library.path().parent().unwrap()).unwrap();
        std::fs::write(
            storage.library.path(),
            r#"[
                {"type": "Vinyl", "item_id": 7, "title": "Kind of Blue", "author": "Miles Davis", "is_available": true},
                {"type": "Book", "item_id": 1, "title": "Clean Code", "author": "Robert C. Martin", "page_count": 450, "is_available": true}
            ]"#,
        )
        .unwrap();
        let service = CatalogService::new(&storage);

        let report = service.list().unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.skipped, vec!["Vinyl".to_string()]);
        assert!(!report.seeded);
    }

    #[test]
    fn test_noop_outcomes_do_not_save() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let outcome = service.return_item(ItemId::new(2)).unwrap();

        assert!(!outcome.is_returned());
        assert!(!storage.library.exists());
        assert!(!storage.audit().exists());
    }

    #[test]
    fn test_bad_duration_is_reported_and_not_saved() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        let err = service.borrow(ItemId::new(1), "soon").unwrap_err();

        assert!(matches!(err, LibraryError::DurationParse(_)));
        assert!(!storage.library.exists());
    }

    #[test]
    fn test_borrow_unknown_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        assert!(service.borrow(ItemId::new(99), "7 days").unwrap_err().is_not_found());
    }

    #[test]
    fn test_initialize() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CatalogService::new(&storage);

        assert!(service.initialize().unwrap());
        assert!(!service.initialize().unwrap());
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }
}
