//! The per-process view over the library and both stores.
//!
//! A `Board` is constructed once by the host app and once by the keyboard
//! extension. It owns the opened storage domain and the two stores loaded
//! from it, and answers the combined queries the frontends render:
//!
//! ```text
//! Board
//! ├── domain: OpenedDomain (shared, or process-local fallback)
//! ├── custom: CustomItemStore     ── customItems
//! └── favorites: FavoritesStore   ── favorites.order, favorites.ids
//! ```

use std::borrow::Cow;

use crate::config::Config;
use crate::library::{self, Category, Item};
use crate::services::custom_items::{CustomItem, CustomItemStore};
use crate::services::favorites::FavoritesStore;
use crate::storage::{self, DomainScope, OpenedDomain, PersistHook};

/// Id of the synthetic category that collects every custom item
pub const CUSTOM_CATEGORY_ID: &str = "custom";
/// Display name for custom items and items with no built-in category
pub const CUSTOM_CATEGORY_NAME: &str = "Custom";
const CUSTOM_CATEGORY_ICON: &str = "person.crop.square";

/// How favorites are ordered for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteSort {
    /// Most recently favorited first
    #[default]
    DateAdded,
    Name,
    /// By category name; custom items sort as "Custom"
    Category,
}

pub struct Board {
    domain: OpenedDomain,
    custom: CustomItemStore,
    favorites: FavoritesStore,
}

impl Board {
    /// Open the configured storage domain and load both stores from it
    pub fn open(config: &Config) -> Self {
        Self::with_domain(storage::open(&config.storage))
    }

    /// Load both stores from an already opened domain
    pub fn with_domain(domain: OpenedDomain) -> Self {
        let custom = CustomItemStore::load(domain.domain.clone());
        let favorites = FavoritesStore::load(domain.domain.clone());

        tracing::info!(
            domain = domain.domain.name(),
            scope = ?domain.scope,
            custom_items = custom.len(),
            favorites = favorites.len(),
            "Board ready"
        );

        Self {
            domain,
            custom,
            favorites,
        }
    }

    /// Whether changes made here are visible to the other process
    pub fn scope(&self) -> DomainScope {
        self.domain.scope
    }

    /// Report write-throughs of both stores to `hook`
    pub fn set_persist_hook(&mut self, hook: PersistHook) {
        self.custom.set_persist_hook(hook.clone());
        self.favorites.set_persist_hook(hook);
    }

    pub fn custom_items(&self) -> &CustomItemStore {
        &self.custom
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    // Library

    pub fn all_items(&self) -> Vec<&'static Item> {
        library::all_items()
    }

    pub fn category(&self, id: &str) -> Option<&'static Category> {
        library::category(id)
    }

    pub fn search(&self, query: &str) -> Vec<&'static Item> {
        library::search(query)
    }

    // Favorites

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.favorites.toggle(id)
    }

    /// Favorites that still resolve to an item, oldest favorite first
    pub fn favorite_items(&self) -> Vec<Item> {
        let custom = self.custom.all_custom_items();
        let mut universe: Vec<&Item> = custom.iter().collect();
        for item in library::iter_items() {
            universe.push(item);
        }
        self.favorites.favorite_items(universe)
    }

    /// Favorites filtered by `query` and ordered for display
    pub fn sorted_favorites(&self, query: &str, sort: FavoriteSort) -> Vec<Item> {
        let mut items = self.favorite_items();

        if !query.is_empty() {
            let query = query.to_lowercase();
            items.retain(|item| library::matches(item, &query));
        }

        match sort {
            FavoriteSort::DateAdded => items.reverse(),
            FavoriteSort::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            FavoriteSort::Category => items.sort_by(|a, b| {
                self.category_name_for(&a.id)
                    .cmp(self.category_name_for(&b.id))
            }),
        }
        items
    }

    // Custom items

    pub fn add(
        &mut self,
        name: impl Into<String>,
        art: impl Into<String>,
        category_id: impl Into<String>,
    ) -> CustomItem {
        self.custom.add(name, art, category_id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.custom.remove(id)
    }

    pub fn items_for_category(&self, category_id: &str) -> Vec<Item> {
        self.custom.items_for_category(category_id)
    }

    // Combined views

    /// The synthetic "Custom" category, if there are any custom items
    pub fn custom_category(&self) -> Option<Category> {
        if self.custom.is_empty() {
            return None;
        }

        Some(Category {
            id: Cow::Borrowed(CUSTOM_CATEGORY_ID),
            name: Cow::Borrowed(CUSTOM_CATEGORY_NAME),
            icon: Cow::Borrowed(CUSTOM_CATEGORY_ICON),
            items: Cow::Owned(self.custom.all_custom_items()),
        })
    }

    /// Categories as a frontend shows them: "Custom" first when non-empty
    pub fn visible_categories(&self) -> Vec<Category> {
        self.custom_category()
            .into_iter()
            .chain(library::categories().iter().cloned())
            .collect()
    }

    /// Items shown for a category tab.
    ///
    /// Built-in categories list their own items followed by custom items
    /// filed under them; the "Custom" category lists every custom item.
    pub fn category_items(&self, id: &str) -> Vec<Item> {
        if id == CUSTOM_CATEGORY_ID {
            return self.custom.all_custom_items();
        }

        match library::category(id) {
            Some(category) => category
                .items
                .iter()
                .cloned()
                .chain(self.custom.items_for_category(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Search everything a frontend can show, in visible-category order
    pub fn search_all(&self, query: &str) -> Vec<Item> {
        let query = query.to_lowercase();
        self.custom
            .all_custom_items()
            .into_iter()
            .chain(library::iter_items().cloned())
            .filter(|item| query.is_empty() || library::matches(item, &query))
            .collect()
    }

    /// Display name of the category an item belongs to
    pub fn category_name_for(&self, item_id: &str) -> &'static str {
        match library::category_of(item_id) {
            Some(category) => &*category.name,
            None => CUSTOM_CATEGORY_NAME,
        }
    }
}
