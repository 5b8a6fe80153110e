//! Service layer for LibraNet
//!
//! The service layer resolves item ids, runs the item operations and
//! searches, and drives the load/save/audit cycle around them.

pub mod catalog;
pub mod search;

pub use catalog::{Catalog, CatalogService};
pub use search::{search_by_title, search_by_title_and_type, search_by_type, SearchQuery};
