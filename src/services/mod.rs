//! Persistent stores that write through the shared storage domain.

pub mod custom_items;
pub mod favorites;

pub use custom_items::{CustomItem, CustomItemStore, CUSTOM_ID_PREFIX};
pub use favorites::FavoritesStore;
