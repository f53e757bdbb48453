//! Favorites with stable ordering.
//!
//! Two arrays are persisted: the membership array under [`FAVORITE_IDS_KEY`]
//! and the order array under [`FAVORITE_ORDER_KEY`]. The order array is the
//! source of truth; membership is a secondary index rebuilt from it on load.
//!
//! ```text
//! order: [oldest, ..., newest]     canonical, persisted first
//! ids:   {oldest, ..., newest}     derived, O(1) membership
//! ```
//!
//! Writes go order-then-ids, so a process killed between the two leaves a
//! stale membership array that the next load repairs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value;

use crate::library::Item;
use crate::storage::{
    write_through, PersistHook, StorageDomain, FAVORITE_IDS_KEY, FAVORITE_ORDER_KEY,
};

/// Write-through store for favorited item ids
pub struct FavoritesStore {
    domain: Arc<dyn StorageDomain>,
    ids: HashSet<String>,
    order: Vec<String>,
    hook: Option<PersistHook>,
    last_write_persisted: bool,
}

impl FavoritesStore {
    /// Load and reconcile the favorites from the domain
    pub fn load(domain: Arc<dyn StorageDomain>) -> Self {
        let stored_order = read_id_array(domain.as_ref(), FAVORITE_ORDER_KEY);
        let stored_ids = read_id_array(domain.as_ref(), FAVORITE_IDS_KEY);

        let mut store = Self {
            domain,
            ids: HashSet::new(),
            order: Vec::new(),
            hook: None,
            last_write_persisted: true,
        };

        match (stored_order, stored_ids) {
            (Some(order), stored_ids) => {
                store.set_order(order);
                let in_sync = stored_ids
                    .map(|ids| ids.into_iter().collect::<HashSet<_>>() == store.ids)
                    .unwrap_or(false);
                if !in_sync {
                    tracing::debug!(
                        count = store.order.len(),
                        "Rebuilt favorites membership from stored order"
                    );
                }
            }
            (None, Some(ids)) => {
                // Layout from before the order array existed
                store.set_order(ids);
                store.last_write_persisted = write_through(
                    store.domain.as_ref(),
                    FAVORITE_ORDER_KEY,
                    &store.order,
                    None,
                );
                tracing::info!(
                    count = store.order.len(),
                    "Backfilled favorites order from membership array"
                );
            }
            (None, None) => {}
        }

        store
    }

    /// Report every write-through attempt to `hook`
    pub fn set_persist_hook(&mut self, hook: PersistHook) {
        self.hook = Some(hook);
    }

    /// Whether the most recent write reached storage
    pub fn last_write_persisted(&self) -> bool {
        self.last_write_persisted
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip the favorite state of an item and persist both arrays.
    ///
    /// Re-adding an id appends it to the end of the order. Returns whether
    /// the item is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            self.order.retain(|existing| existing != id);
            false
        } else {
            self.ids.insert(id.to_string());
            self.order.push(id.to_string());
            true
        };

        self.persist();
        now_favorite
    }

    /// Favorited ids, oldest favorite first
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolve the favorites against the items that currently exist.
    ///
    /// `universe` is every item a favorite may point at (built-in plus
    /// custom). Ids without a matching item are skipped; they stay favorited.
    pub fn favorite_items<'a, I>(&self, universe: I) -> Vec<Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let index: HashMap<&str, &Item> = universe
            .into_iter()
            .map(|item| (&*item.id, item))
            .collect();

        self.order
            .iter()
            .filter_map(|id| index.get(id.as_str()).map(|item| (*item).clone()))
            .collect()
    }

    /// Replace the order, dropping duplicates, and rebuild membership
    fn set_order(&mut self, order: Vec<String>) {
        let mut seen = HashSet::with_capacity(order.len());
        self.order = order.into_iter().filter(|id| seen.insert(id.clone())).collect();
        self.ids = seen;
    }

    fn persist(&mut self) {
        let domain = self.domain.as_ref();
        let hook = self.hook.as_ref();

        let order_ok = write_through(domain, FAVORITE_ORDER_KEY, &self.order, hook);
        // Same order as `order`, so older readers see a stable iteration order
        let ids_ok = write_through(domain, FAVORITE_IDS_KEY, &self.order, hook);

        self.last_write_persisted = order_ok && ids_ok;
    }
}

/// Read an array of ids, treating a missing or malformed value as absent
fn read_id_array(domain: &dyn StorageDomain, key: &str) -> Option<Vec<String>> {
    let value = match domain.get(key) {
        Ok(value) => value?,
        Err(e) => {
            tracing::warn!(domain = domain.name(), key, error = %e, "Failed to read favorites");
            return None;
        }
    };

    match value {
        Value::Array(values) => Some(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        other => {
            tracing::warn!(key, value = %other, "Ignoring malformed favorites value");
            None
        }
    }
}
