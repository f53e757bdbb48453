//! Shared storage namespace.
//!
//! Both the host app and the keyboard extension open the same named domain
//! and read/write the keys below through it. There is no locking and no
//! change notification between processes: each process loads its stores
//! once and writes through on every mutation, so whichever process writes a
//! key last wins and a process holding a stale cache will overwrite the
//! other's change on its next write.
//!
//! ```text
//! shared_dir/<domain>.json            (both processes)
//!   └─ fallback: local_dir/<process>/<domain>.json
//!        └─ fallback: in-memory
//! ```

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

pub use file::FileDomain;
pub use memory::MemoryDomain;

use crate::config::StorageConfig;
use crate::error::{StoreError, StoreResult};

/// Membership array of favorited item ids
pub const FAVORITE_IDS_KEY: &str = "favorites.ids";
/// Favorited item ids, oldest favorite first
pub const FAVORITE_ORDER_KEY: &str = "favorites.order";
/// JSON array of user-created items
pub const CUSTOM_ITEMS_KEY: &str = "customItems";

/// A named key-value persistence domain.
///
/// Values are JSON; each `set` overwrites the whole value under the key.
pub trait StorageDomain: Send + Sync {
    /// Name of the domain (e.g. the app group identifier)
    fn name(&self) -> &str;

    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Write a value, replacing whatever was stored under the key
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Where an opened domain actually lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainScope {
    /// Visible to both host and extension
    Shared,
    /// Private to this process; changes are not shared
    ProcessLocal,
    /// Private to this process and lost on exit
    Memory,
}

/// A storage domain together with the scope it ended up in
#[derive(Clone)]
pub struct OpenedDomain {
    pub domain: Arc<dyn StorageDomain>,
    pub scope: DomainScope,
}

impl std::fmt::Debug for OpenedDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenedDomain")
            .field("domain", &self.domain.name())
            .field("scope", &self.scope)
            .finish()
    }
}

/// Open the configured domain, falling back to process-local storage.
///
/// Never fails: if the shared location is unconfigured or cannot be opened
/// the stores silently stop being shared, which is only logged.
pub fn open(config: &StorageConfig) -> OpenedDomain {
    let name = config.domain.as_str();

    match config.shared_path() {
        Some(dir) => match FileDomain::open(name, &dir) {
            Ok(domain) => {
                tracing::debug!(domain = name, path = %domain.path().display(), "Opened shared storage");
                return OpenedDomain {
                    domain: Arc::new(domain),
                    scope: DomainScope::Shared,
                };
            }
            Err(e) => {
                tracing::warn!(domain = name, error = %e, "Shared storage unavailable, falling back to process-local storage");
            }
        },
        None => {
            tracing::warn!(domain = name, "No shared storage configured, using process-local storage");
        }
    }

    open_local(config)
}

fn open_local(config: &StorageConfig) -> OpenedDomain {
    let name = config.domain.as_str();

    if let Some(dir) = config.local_path() {
        let dir: PathBuf = dir.join(&config.process);
        match FileDomain::open(name, &dir) {
            Ok(domain) => {
                return OpenedDomain {
                    domain: Arc::new(domain),
                    scope: DomainScope::ProcessLocal,
                }
            }
            Err(e) => {
                tracing::warn!(domain = name, error = %e, "Local storage unavailable, changes will not persist");
            }
        }
    }

    OpenedDomain {
        domain: Arc::new(MemoryDomain::new(name)),
        scope: DomainScope::Memory,
    }
}

/// Outcome of one write-through, reported to a [`PersistHook`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistEvent {
    /// Storage key that was written
    pub key: &'static str,
    /// Whether the value reached the storage domain
    pub persisted: bool,
}

/// Callback invoked after every write-through attempt
pub type PersistHook = Arc<dyn Fn(&PersistEvent) + Send + Sync>;

/// Serialize and write one key, logging failures.
///
/// Returns whether the write reached the domain. Used by the stores, which
/// treat a failed write as "not durable" rather than as an error.
pub(crate) fn write_through<T: Serialize + ?Sized>(
    domain: &dyn StorageDomain,
    key: &'static str,
    value: &T,
    hook: Option<&PersistHook>,
) -> bool {
    let result = serde_json::to_value(value)
        .map_err(StoreError::from)
        .and_then(|value| domain.set(key, value));

    let persisted = match result {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(domain = domain.name(), key, error = %e, "Failed to persist value, keeping in-memory state");
            false
        }
    };

    if let Some(hook) = hook {
        hook(&PersistEvent { key, persisted });
    }
    persisted
}
