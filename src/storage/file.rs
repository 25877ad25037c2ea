//! File-backed key-value store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temporary sibling first
//! and are renamed into place, so a crash never leaves a half-written document.

use crate::domain::error::{LinkHubError, Result};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Directory of JSON files, one per key.
///
/// # Examples
///
/// ```no_run
/// use linkhub::storage::{FileStore, KeyValueStore};
///
/// let mut store = FileStore::new("/tmp/linkhub")?;
/// store.set("linktree-data", "{}")?;
/// # Ok::<(), linkhub::LinkHubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tracing::debug!(dir = ?dir, "opening file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the key files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');

        if valid {
            Ok(self.dir.join(format!("{key}.json")))
        } else {
            Err(LinkHubError::Storage(format!("invalid storage key: {key:?}")))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::trace!(path = ?path, bytes = contents.len(), "read stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = ?path, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested")).unwrap();

        assert!(store.get("linktree-data").unwrap().is_none());
        store.set("linktree-data", r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(
            store.get("linktree-data").unwrap().as_deref(),
            Some(r#"{"theme":"dark"}"#)
        );
        assert!(dir.path().join("nested/linktree-data.json").exists());
        assert!(!dir.path().join("nested/linktree-data.json.tmp").exists());

        store.remove("linktree-data").unwrap();
        store.remove("linktree-data").unwrap();
        assert!(store.get("linktree-data").unwrap().is_none());
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path()).unwrap();

        assert!(matches!(store.set("../escape", "x"), Err(LinkHubError::Storage(_))));
        assert!(matches!(store.get(""), Err(LinkHubError::Storage(_))));
    }
}
