//! ASCIIboard - shared ASCII art library, favorites and custom items.
//!
//! The same core runs in two processes: the host app and the keyboard
//! extension. Neither can call into the other; they only share a storage
//! domain that both read at startup and write through on every change.
//!
//! # Architecture
//!
//! - [`library`] - The built-in catalog and search over it
//! - [`storage`] - The shared key-value domain and its fallbacks
//! - [`services`] - Custom item and favorites stores
//! - [`board`] - Per-process composition of the above
//! - [`config`] - Configuration loading
//!
//! # FFI Layer
//!
//! Native frontends (the Swift app and keyboard) interact via the C FFI layer
//! in [`ffi`]. Results cross the boundary as JSON strings.
//!
//! # Example
//!
//! ```ignore
//! use asciiboard::{Board, Config};
//!
//! let mut board = Board::open(&Config::load());
//! let item = board.add("Shrug2", "¯\\_(ツ)_/¯", "emoticons");
//! board.toggle(&item.id);
//! assert!(board.favorite_items().iter().any(|i| i.id == item.id.as_str()));
//! ```

// Public modules
pub mod board;
pub mod config;
pub mod library;
pub mod services;
pub mod storage;

// FFI module - internal implementation details
#[doc(hidden)]
pub mod ffi;

// Internal modules
mod error;
mod logging;

// Re-export commonly used types for convenience
pub use board::{Board, FavoriteSort};
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use library::{Category, Item};
pub use logging::init_logging;
pub use services::{CustomItem, CustomItemStore, FavoritesStore};
pub use storage::{DomainScope, OpenedDomain, PersistEvent, PersistHook, StorageDomain};
