//! Library file persistence
//!
//! Loads and saves the whole item collection as a JSON array in
//! library.json. A missing file means "use the default catalog"; nothing is
//! written until the caller saves.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{LibraryError, LibraryResult};
use crate::models::Item;

use super::file_io::{read_json, write_json_atomic};
use super::record::{deserialize_value, serialize, ItemRecord};
use super::seed::default_catalog;

/// What a load produced
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Items in file order
    pub items: Vec<Item>,
    /// Discriminators of records that were skipped
    pub skipped: Vec<String>,
    /// True when the file was missing and the default catalog was used
    pub seeded: bool,
}

/// Store for the item collection
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the collection
    pub fn load(&self) -> LibraryResult<Vec<Item>> {
        self.load_with_report().map(|report| report.items)
    }

    /// Load the collection and report what was skipped
    ///
    /// Records with an unknown `type` are skipped with a warning. Any other
    /// bad record aborts the load.
    pub fn load_with_report(&self) -> LibraryResult<LoadReport> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "library file missing, using default catalog");
            return Ok(LoadReport {
                items: default_catalog(),
                skipped: Vec::new(),
                seeded: true,
            });
        }

        let records: Vec<Value> = read_json(&self.path)?;
        let mut items = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for (index, value) in records.iter().enumerate() {
            match deserialize_value(value) {
                Ok(item) => items.push(item),
                Err(LibraryError::UnknownVariant(tag)) => {
                    tracing::warn!(record = index, item_type = %tag, "skipping record with unknown item type");
                    skipped.push(tag);
                }
                Err(e) => {
                    return Err(LibraryError::Storage(format!(
                        "Record {} in {}: {}",
                        index,
                        self.path.display(),
                        e
                    )));
                }
            }
        }

        tracing::debug!(loaded = items.len(), skipped = skipped.len(), "library loaded");

        Ok(LoadReport {
            items,
            skipped,
            seeded: false,
        })
    }

    /// Write the full collection, replacing whatever was there
    pub fn save(&self, items: &[Item]) -> LibraryResult<()> {
        let records: Vec<ItemRecord> = items.iter().map(serialize).collect();
        write_json_atomic(&self.path, &records)?;
        tracing::debug!(saved = records.len(), path = %self.path.display(), "library saved");
        Ok(())
    }

    /// Write the default catalog if no library file exists yet
    ///
    /// Returns true if the file was created.
    pub fn initialize(&self) -> LibraryResult<bool> {
        if self.exists() {
            return Ok(false);
        }

        self.save(&default_catalog())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LibraryStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LibraryStore::new(temp_dir.path().join("library.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_yields_default_catalog() {
        let (_temp_dir, store) = create_test_store();

        let report = store.load_with_report().unwrap();

        assert!(report.seeded);
        assert_eq!(report.items.len(), 5);
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();
        let mut items = store.load().unwrap();
        items[0].borrow("7 days").unwrap();

        store.save(&items).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded.len(), 5);
        assert!(!reloaded[0].is_available);
        assert_eq!(reloaded[0].due_date, items[0].due_date);
        assert_eq!(reloaded[0].borrow_date, items[0].borrow_date);
        assert_eq!(reloaded[3].item_type(), ItemType::Audiobook);
    }

    #[test]
    fn test_save_overwrites() {
        let (_temp_dir, store) = create_test_store();
        store.save(&store.load().unwrap()).unwrap();

        store.save(&[Item::book(9, "Only", "One", 1)]).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].title, "Only");
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[
                {"type": "Book", "item_id": 1, "title": "Clean Code", "author": "Robert C. Martin", "page_count": 450, "is_available": true},
                {"type": "Vinyl", "item_id": 2, "title": "Kind of Blue", "author": "Miles Davis", "is_available": true},
                {"type": "EMagazine", "item_id": 3, "title": "Tech Monthly", "author": "Editorial Team", "issue_number": 42, "is_available": false}
            ]"#,
        )
        .unwrap();

        let report = store.load_with_report().unwrap();

        assert!(!report.seeded);
        assert_eq!(report.skipped, vec!["Vinyl".to_string()]);
        let ids: Vec<u32> = report.items.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_malformed_record_aborts_load() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{"type": "Book", "item_id": 1, "author": "Robert C. Martin", "page_count": 450, "is_available": true}]"#,
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_initialize_only_once() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.initialize().unwrap());
        assert!(store.exists());
        assert!(!store.initialize().unwrap());
    }
}
