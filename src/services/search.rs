//! Catalog search
//!
//! Filters borrow the collection immutably and yield matches lazily, in the
//! order the items appear in the collection.

use crate::models::{Item, ItemType};

fn title_contains(item: &Item, needle_lower: &str) -> bool {
    item.title.to_lowercase().contains(needle_lower)
}

/// Items whose title contains `keyword`, ignoring case
///
/// An empty keyword matches every item.
pub fn search_by_title<'a>(items: &'a [Item], keyword: &str) -> impl Iterator<Item = &'a Item> + 'a {
    let needle = keyword.to_lowercase();
    items.iter().filter(move |item| title_contains(item, &needle))
}

/// Items of the given kind
pub fn search_by_type(items: &[Item], kind: ItemType) -> impl Iterator<Item = &Item> {
    items.iter().filter(move |item| item.item_type() == kind)
}

/// Items of the given kind whose title contains `keyword`, ignoring case
pub fn search_by_title_and_type<'a>(
    items: &'a [Item],
    keyword: &str,
    kind: ItemType,
) -> impl Iterator<Item = &'a Item> + 'a {
    let needle = keyword.to_lowercase();
    items
        .iter()
        .filter(move |item| item.item_type() == kind && title_contains(item, &needle))
}

/// A combined search; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub item_type: Option<ItemType>,
}

impl SearchQuery {
    /// Query on title only
    pub fn title(keyword: impl Into<String>) -> Self {
        Self {
            title: Some(keyword.into()),
            item_type: None,
        }
    }

    /// Restrict the query to one kind
    pub fn of_type(mut self, kind: ItemType) -> Self {
        self.item_type = Some(kind);
        self
    }

    /// Run the query over a collection
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        match (&self.title, self.item_type) {
            (Some(keyword), Some(kind)) => search_by_title_and_type(items, keyword, kind).collect(),
            (Some(keyword), None) => search_by_title(items, keyword).collect(),
            (None, Some(kind)) => search_by_type(items, kind).collect(),
            (None, None) => items.iter().collect(),
        }
    }

    /// Describe the query for messages, e.g. "audiobook(s) with keyword 'habit'"
    pub fn describe(&self) -> String {
        let kind = self
            .item_type
            .map_or_else(|| "item".to_string(), |k| k.tag().to_lowercase());

        match &self.title {
            Some(keyword) => format!("{}(s) with keyword '{}'", kind, keyword),
            None => format!("{}(s)", kind),
        }
    }
}
