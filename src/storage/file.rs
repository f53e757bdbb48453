//! File-backed storage domain.
//!
//! The whole domain is one JSON object in `<dir>/<name>.json`. Reads always go
//! to disk so a freshly constructed store sees what the other process wrote.
//! Writes re-read the file and replace only the written key, which keeps
//! last-writer-wins at key granularity instead of whole-file granularity.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use super::StorageDomain;
use crate::error::{StoreError, StoreResult};

/// A storage domain persisted as a single JSON file
#[derive(Debug)]
pub struct FileDomain {
    /// Domain name (for log and error messages)
    name: String,
    /// Directory holding the domain file and its temporary writes
    dir: PathBuf,
    /// Path to the domain file
    path: PathBuf,
}

impl FileDomain {
    /// Open a domain file under `dir`, creating the directory if needed.
    ///
    /// Fails when the directory cannot be created or is not writable, which
    /// is how a missing cross-process container shows up.
    pub fn open(name: &str, dir: &Path) -> StoreResult<Self> {
        let unavailable = |message: String| StoreError::Unavailable {
            path: dir.to_path_buf(),
            message,
        };

        fs::create_dir_all(dir).map_err(|e| unavailable(e.to_string()))?;

        // Probe writability up front so fallback happens at open time
        let probe = tempfile::Builder::new()
            .prefix(&format!(".{}.probe", name))
            .tempfile_in(dir)
            .map_err(|e| unavailable(e.to_string()))?;
        if let Err(e) = probe.close() {
            tracing::debug!(domain = name, error = %e, "Failed to remove storage probe file");
        }

        Ok(Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            path: dir.join(format!("{}.json", name)),
        })
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StoreResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &Map<String, Value>) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(map)?;

        // Each write gets its own temp file in the same directory, renamed
        // over the target so readers never see a torn file
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    /// Read the current file for a write, discarding a corrupt one
    fn read_for_write(&self) -> Map<String, Value> {
        match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(
                    domain = %self.name,
                    error = %e,
                    "Discarding unreadable storage file before write"
                );
                Map::new()
            }
        }
    }
}

impl StorageDomain for FileDomain {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut map = self.read_for_write();
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut map = self.read_for_write();
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
