//! In-memory key-value store with an optional byte quota.
//!
//! Clones share the same entries, so a caller can hand one handle to the
//! persistence adapter and keep another to inspect what was written. A quota
//! makes oversized writes fail the way a full browser storage area does.

use crate::domain::error::{LinkHubError, Result};
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, String>,
    quota_bytes: Option<usize>,
    writes: usize,
}

impl Entries {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.values
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// Shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Entries>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses writes once keys plus values exceed `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        let store = Self::default();
        if let Ok(mut entries) = store.entries.lock() {
            entries.quota_bytes = Some(quota_bytes);
        }
        store
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().map_or(0, |entries| entries.writes)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|e| LinkHubError::Storage(format!("memory store poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.lock()?;

        if let Some(quota) = entries.quota_bytes {
            let needed = entries.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                tracing::debug!(needed, quota, "memory store quota exceeded");
                return Err(LinkHubError::Storage(format!(
                    "quota exceeded: {needed} bytes needed, {quota} available"
                )));
            }
        }

        entries.values.insert(key.to_string(), value.to_string());
        entries.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.lock()?.values.remove(key);
        Ok(())
    }
}
