//! Storage backend abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the synchronous string
//! key-value interface the persistence adapter writes through. It mirrors the
//! shape of browser local storage: whole values are read and replaced under a
//! key, nothing finer grained.
//!
//! # Implementations
//!
//! - [`FileStore`](crate::storage::FileStore): one JSON file per key with atomic writes
//! - [`MemoryStore`](crate::storage::MemoryStore): in-memory map with an optional byte quota

use crate::domain::error::Result;

/// Synchronous string key-value store.
///
/// # Examples
///
/// ```
/// use linkhub::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// store.remove("greeting")?;
/// assert!(store.get("greeting")?.is_none());
/// # Ok::<(), linkhub::LinkHubError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails, including quota violations. The
    /// previous value is left in place in that case.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    fn remove(&mut self, key: &str) -> Result<()>;
}
