//! LibraNet - personal library catalog
//!
//! Core functionality for the LibraNet catalog: books, audiobooks and
//! e-magazines that can be borrowed, returned, played and searched, with the
//! collection persisted as JSON between runs.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Items, variants, loans and fines
//! - `storage`: JSON persistence of the collection
//! - `services`: Catalog operations and search
//! - `audit`: Borrow/return history log
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use libranet::models::ItemType;
//! use libranet::services::search_by_type;
//! use libranet::storage::LibraryStore;
//!
//! # fn main() -> libranet::LibraryResult<()> {
//! let store = LibraryStore::new("library.json");
//! let mut items = store.load()?;
//! let outcome = items[0].borrow("7 days")?;
//! println!("{}", outcome);
//! for item in search_by_type(&items, ItemType::Audiobook) {
//!     println!("{}", item.display_info());
//! }
//! store.save(&items)?;
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LibraryError, LibraryResult};
