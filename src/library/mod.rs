//! Built-in ASCII art library.
//!
//! The catalog is compiled into the crate and never changes at runtime, so
//! every query here is a pure function of static data. Item order is always
//! category-declaration order, then item-declaration order.

mod catalog;

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single piece of ASCII art, built-in or custom.
///
/// Identity is the `id` alone: two items with the same id are the same item
/// even if their name or art differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub art: Cow<'static, str>,
}

impl Item {
    /// Create an item from owned strings (custom items).
    pub fn new(id: impl Into<String>, name: impl Into<String>, art: impl Into<String>) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            name: Cow::Owned(name.into()),
            art: Cow::Owned(art.into()),
        }
    }

    /// Create a built-in item from static strings.
    pub const fn builtin(id: &'static str, name: &'static str, art: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            art: Cow::Borrowed(art),
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A named, iconified group of items
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    /// Symbol name the frontend renders as the category icon
    pub icon: Cow<'static, str>,
    pub items: Cow<'static, [Item]>,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

/// Built-in categories, materialized from the catalog tables on first use.
static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    catalog::CATEGORIES
        .iter()
        .map(|def| Category {
            id: Cow::Borrowed(def.id),
            name: Cow::Borrowed(def.name),
            icon: Cow::Borrowed(def.icon),
            items: def
                .items
                .iter()
                .map(|&(id, name, art)| Item::builtin(id, name, art))
                .collect::<Vec<_>>()
                .into(),
        })
        .collect()
});

/// Index of built-in items by id, built on first lookup.
static ITEM_INDEX: Lazy<HashMap<&'static str, (&'static Category, &'static Item)>> =
    Lazy::new(|| {
        let mut index = HashMap::new();
        for category in CATEGORIES.iter() {
            for item in category.items.iter() {
                index.insert(&*item.id, (category, item));
            }
        }
        index
    });

/// Get the built-in categories in declaration order
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Iterate every built-in item, category by category
pub fn iter_items() -> impl Iterator<Item = &'static Item> {
    CATEGORIES.iter().flat_map(|c| c.items.iter())
}

/// Flatten every built-in item into one list
pub fn all_items() -> Vec<&'static Item> {
    iter_items().collect()
}

/// Look up a built-in category by id
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Look up a built-in item by id
pub fn item(id: &str) -> Option<&'static Item> {
    ITEM_INDEX.get(id).map(|(_, item)| *item)
}

/// Find the built-in category that declares the item
pub fn category_of(item_id: &str) -> Option<&'static Category> {
    ITEM_INDEX.get(item_id).map(|(category, _)| *category)
}

/// Check whether an item matches a search query.
///
/// `query_lower` must already be lowercased. Matching is a plain substring
/// test against both the name and the art.
pub fn matches(item: &Item, query_lower: &str) -> bool {
    item.name.to_lowercase().contains(query_lower) || item.art.to_lowercase().contains(query_lower)
}

/// Search the built-in library.
///
/// An empty query returns every item. Otherwise the result keeps library
/// order; there is no relevance ranking.
pub fn search(query: &str) -> Vec<&'static Item> {
    if query.is_empty() {
        return all_items();
    }

    let query = query.to_lowercase();
    iter_items().filter(|item| matches(item, &query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_items_in_declaration_order() {
        let items = all_items();
        assert_eq!(items.first().map(|i| &*i.id), Some("shrug"));
        assert_eq!(items.last().map(|i| &*i.id), Some("brb"));

        let expected: usize = categories().iter().map(|c| c.items.len()).sum();
        assert_eq!(items.len(), expected);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for item in iter_items() {
            assert!(seen.insert(&*item.id), "duplicate id {}", item.id);
            assert!(!item.id.starts_with("custom_"));
        }
    }

    #[test]
    fn test_category_lookup() {
        let animals = category("animals").unwrap();
        assert_eq!(animals.name, "Animals");
        assert_eq!(animals.items[0].id, "cat1");

        assert!(category("nonexistent").is_none());
    }

    #[test]
    fn test_item_lookup() {
        assert_eq!(item("lenny").map(|i| &*i.name), Some("Lenny Face"));
        assert_eq!(category_of("lenny").map(|c| &*c.id), Some("emoticons"));
        assert!(item("custom_missing").is_none());
        assert!(category_of("custom_missing").is_none());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(search(""), all_items());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search("HI");
        assert!(results.iter().any(|i| i.id == "hi"));

        let lower = search("hi");
        assert_eq!(results, lower);
    }

    #[test]
    fn test_search_matches_art() {
        let results = search("ツ");
        assert!(results.iter().any(|i| i.id == "shrug"));
    }

    #[test]
    fn test_search_keeps_library_order() {
        let results = search("o");
        let positions: Vec<usize> = results
            .iter()
            .map(|r| all_items().iter().position(|i| i.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_search_no_match() {
        assert!(search("zzzz-not-here").is_empty());
    }

    #[test]
    fn test_identity_is_id_only() {
        let a = Item::new("x", "One", "1");
        let b = Item::new("x", "Two", "2");
        assert_eq!(a, b);

        let set: HashSet<Item> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
