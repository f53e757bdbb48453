//! User-created ASCII art.
//!
//! The whole collection is persisted as one JSON array under
//! [`CUSTOM_ITEMS_KEY`] and rewritten on every change. Items are immutable
//! once created; an edit is a remove followed by an add.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::library::Item;
use crate::storage::{write_through, PersistHook, StorageDomain, CUSTOM_ITEMS_KEY};

/// Prefix that keeps custom ids apart from built-in slugs
pub const CUSTOM_ID_PREFIX: &str = "custom_";

/// An item created by the user, tagged with the category it was filed under.
///
/// `category_id` is not validated: an unknown id simply never matches a
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    pub id: String,
    pub name: String,
    pub art: String,
    pub category_id: String,
}

impl CustomItem {
    fn new(name: String, art: String, category_id: String) -> Self {
        Self {
            id: format!("{}{}", CUSTOM_ID_PREFIX, Uuid::new_v4()),
            name,
            art,
            category_id,
        }
    }

    /// The plain item, without its category tag
    pub fn to_item(&self) -> Item {
        Item::new(self.id.clone(), self.name.clone(), self.art.clone())
    }
}

/// Write-through store for custom items
pub struct CustomItemStore {
    domain: Arc<dyn StorageDomain>,
    items: Vec<CustomItem>,
    hook: Option<PersistHook>,
    last_write_persisted: bool,
}

impl CustomItemStore {
    /// Load the collection from the domain.
    ///
    /// A missing key is an empty collection. A value that does not decode is
    /// logged and treated as empty; it is replaced on the next write.
    pub fn load(domain: Arc<dyn StorageDomain>) -> Self {
        let items = match domain.get(CUSTOM_ITEMS_KEY) {
            Ok(Some(value)) => match serde_json::from_value::<Vec<CustomItem>>(value) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(domain = domain.name(), error = %e, "Ignoring undecodable custom items");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(domain = domain.name(), error = %e, "Failed to read custom items");
                Vec::new()
            }
        };

        tracing::debug!(count = items.len(), "Loaded custom items");

        Self {
            domain,
            items,
            hook: None,
            last_write_persisted: true,
        }
    }

    /// Report every write-through attempt to `hook`
    pub fn set_persist_hook(&mut self, hook: PersistHook) {
        self.hook = Some(hook);
    }

    /// Whether the most recent write reached storage
    pub fn last_write_persisted(&self) -> bool {
        self.last_write_persisted
    }

    /// Create a new item and persist the collection.
    ///
    /// Inputs are stored as given; trimming and rejecting empty values is
    /// up to the caller.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        art: impl Into<String>,
        category_id: impl Into<String>,
    ) -> CustomItem {
        let item = CustomItem::new(name.into(), art.into(), category_id.into());
        self.items.push(item.clone());
        self.persist();
        item
    }

    /// Delete an item by id and persist the collection.
    ///
    /// Returns whether anything was removed; a missing id is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        self.persist();
        removed
    }

    /// Items filed under a category, in creation order
    pub fn items_for_category(&self, category_id: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.category_id == category_id)
            .map(CustomItem::to_item)
            .collect()
    }

    /// Every custom item without its category tag, in creation order
    pub fn all_custom_items(&self) -> Vec<Item> {
        self.items.iter().map(CustomItem::to_item).collect()
    }

    /// The tagged items, in creation order
    pub fn custom_items(&self) -> &[CustomItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CustomItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&mut self) {
        self.last_write_persisted = write_through(
            self.domain.as_ref(),
            CUSTOM_ITEMS_KEY,
            &self.items,
            self.hook.as_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileDomain, MemoryDomain};
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn memory_store() -> CustomItemStore {
        CustomItemStore::load(Arc::new(MemoryDomain::new("test")))
    }

    #[test]
    fn test_add_generates_prefixed_id() {
        let mut store = memory_store();
        let item = store.add("Shrug2", "¯\\_(ツ)_/¯", "emoticons");

        assert!(item.id.starts_with(CUSTOM_ID_PREFIX));
        let uuid = &item.id[CUSTOM_ID_PREFIX.len()..];
        assert!(Uuid::parse_str(uuid).is_ok());

        let other = store.add("Shrug3", "¯\\_(ツ)_/¯", "emoticons");
        assert_ne!(item.id, other.id);
    }

    #[test]
    fn test_add_is_visible_in_category() {
        let mut store = memory_store();
        let item = store.add("Wave", "o/", "reactions");
        store.add("Other", "x", "symbols");

        let reactions = store.items_for_category("reactions");
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].id, item.id.as_str());
        assert_eq!(reactions[0].name, "Wave");
    }

    #[test]
    fn test_remove() {
        let mut store = memory_store();
        let item = store.add("Wave", "o/", "reactions");

        assert!(store.remove(&item.id));
        assert!(store.items_for_category("reactions").is_empty());
        assert!(store.get(&item.id).is_none());

        // Removing again is a no-op
        assert!(!store.remove(&item.id));
        assert!(store.last_write_persisted());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut store = memory_store();
        let a = store.add("A", "a", "art");
        let b = store.add("B", "b", "text");
        let c = store.add("C", "c", "art");

        let ids: Vec<String> = store.all_custom_items().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, vec![a.id.clone(), b.id, c.id.clone()]);

        let art: Vec<String> = store.items_for_category("art").iter().map(|i| i.id.to_string()).collect();
        assert_eq!(art, vec![a.id, c.id]);
    }

    #[test]
    fn test_unknown_category_is_stored() {
        let mut store = memory_store();
        store.add("Orphan", "?", "no-such-category");

        assert_eq!(store.len(), 1);
        assert_eq!(store.items_for_category("no-such-category").len(), 1);
        assert!(store.items_for_category("emoticons").is_empty());
    }

    #[test]
    fn test_empty_values_are_not_rejected() {
        let mut store = memory_store();
        store.add("", "", "");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_persists_across_reload() {
        let temp_dir = TempDir::new().unwrap();
        let domain = Arc::new(FileDomain::open("test.group", temp_dir.path()).unwrap());

        let item = {
            let mut store = CustomItemStore::load(domain.clone());
            store.add("Bunny", "(\\_/)", "animals")
        };

        let store = CustomItemStore::load(domain);
        assert_eq!(store.custom_items(), &[item]);
    }

    #[test]
    fn test_stored_layout() {
        let domain = Arc::new(MemoryDomain::new("test"));
        let mut store = CustomItemStore::load(domain.clone());
        let item = store.add("Hi", "o/", "text");

        assert_eq!(
            domain.get(CUSTOM_ITEMS_KEY).unwrap(),
            Some(json!([{
                "id": item.id,
                "name": "Hi",
                "art": "o/",
                "categoryId": "text",
            }]))
        );
    }

    #[test]
    fn test_undecodable_value_loads_empty() {
        let seeded = HashMap::from([(CUSTOM_ITEMS_KEY.to_string(), json!({"not": "a list"}))]);
        let store = CustomItemStore::load(Arc::new(MemoryDomain::read_only("test", seeded)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut store = CustomItemStore::load(Arc::new(MemoryDomain::read_only("test", HashMap::new())));
        let item = store.add("Kept", "k", "art");

        assert!(!store.last_write_persisted());
        assert_eq!(store.get(&item.id), Some(&item));
        assert_eq!(store.items_for_category("art").len(), 1);
    }
}
