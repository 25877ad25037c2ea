//! Persistence adapter: the application document under one fixed key.
//!
//! The adapter knows nothing about mutations. It reads the stored blob as a
//! shallow-merge overlay, writes the full document as JSON, and clears the key.

use crate::domain::document::{HubDocument, PartialDocument};
use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;

/// Key the document is stored under.
pub const STORAGE_KEY: &str = "linktree-data";

/// Reads and writes the [`HubDocument`] through a [`KeyValueStore`].
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    /// Adapter over `store` using [`STORAGE_KEY`].
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Loads the stored overlay.
    ///
    /// A missing key yields `Ok(None)`. A stored value that is not a JSON object
    /// is logged and treated as absent, so a damaged blob never blocks startup.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(&self) -> Result<Option<PartialDocument>> {
        let Some(raw) = self.store.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored document");
            return Ok(None);
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to parse stored document");
                return Ok(None);
            }
        };

        let partial = PartialDocument::from_value(value);
        if partial.is_none() {
            tracing::error!(key = %self.key, "stored document is not a JSON object");
        }
        Ok(partial)
    }

    /// Writes the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&mut self, document: &HubDocument) -> Result<()> {
        let json = serde_json::to_string(document)?;
        self.store.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, bytes = json.len(), links = document.links.len(), "document saved");
        Ok(())
    }

    /// Deletes the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub fn clear(&mut self) -> Result<()> {
        tracing::debug!(key = %self.key, "clearing stored document");
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Link;
    use crate::storage::MemoryStore;

    #[test]
    fn save_then_load_restores_document() {
        let store = MemoryStore::new();
        let mut persistence = Persistence::new(store.clone());

        let mut doc = HubDocument::default();
        doc.links.push(Link::new("Blog", "https://blog.example"));
        persistence.save(&doc).unwrap();

        let mut restored = HubDocument::default();
        restored.merge(persistence.load().unwrap().unwrap());
        assert_eq!(restored, doc);
        assert!(store.get(STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn damaged_blob_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{not json").unwrap();
        assert!(Persistence::new(store.clone()).load().unwrap().is_none());

        store.set(STORAGE_KEY, "[1,2]").unwrap();
        assert!(Persistence::new(store).load().unwrap().is_none());
    }

    #[test]
    fn clear_removes_the_key() {
        let store = MemoryStore::new();
        let mut persistence = Persistence::new(store.clone());
        persistence.save(&HubDocument::default()).unwrap();
        persistence.clear().unwrap();
        assert!(persistence.load().unwrap().is_none());
    }
}
