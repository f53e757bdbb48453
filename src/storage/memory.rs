//! In-memory storage domain.
//!
//! Used as the last-resort process-local fallback and in tests. A read-only
//! domain rejects every write, which is how tests drive the non-durable path.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::StorageDomain;
use crate::error::{StoreError, StoreResult};

/// A storage domain that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryDomain {
    name: String,
    values: Mutex<HashMap<String, Value>>,
    read_only: bool,
}

impl MemoryDomain {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// A domain that serves reads from `values` and rejects all writes
    pub fn read_only(name: &str, values: HashMap<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            values: Mutex::new(values),
            read_only: true,
        }
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::WriteRejected(self.name.clone()));
        }
        Ok(())
    }
}

impl StorageDomain for MemoryDomain {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        self.check_writable()?;
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check_writable()?;
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}
