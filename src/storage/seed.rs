//! Default catalog
//!
//! The starter collection used when no library file exists yet.

use crate::models::Item;

/// Build a fresh copy of the default catalog
pub fn default_catalog() -> Vec<Item> {
    vec![
        Item::book(1, "Clean Code", "Robert C. Martin", 450),
        Item::book(2, "The Pragmatic Programmer", "Andy Hunt", 320),
        Item::emagazine(3, "Tech Monthly", "Editorial Team", 42),
        Item::audiobook(4, "Atomic Habits", "James Clear", 6.5),
        Item::audiobook(5, "The Power of Habit", "Charles Duhigg", 10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;

    #[test]
    fn test_default_catalog_contents() {
        let items = default_catalog();
        let ids: Vec<u32> = items.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(items.iter().all(|i| i.is_available && i.validate().is_ok()));
        assert_eq!(items[3].title, "Atomic Habits");
        assert_eq!(items[3].item_type(), ItemType::Audiobook);
    }

    #[test]
    fn test_each_call_is_independent() {
        let mut first = default_catalog();
        first[0].borrow("3 days").unwrap();

        let second = default_catalog();
        assert!(second[0].is_available);
    }
}
