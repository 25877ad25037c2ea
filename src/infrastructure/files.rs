//! Backup file IO performed by the plugin runtime on behalf of the handler.

use crate::domain::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a backup file chosen by the user.
///
/// # Errors
///
/// Returns [`LinkHubError::Io`](crate::LinkHubError::Io) if the file cannot be read.
pub fn read_import_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "import file read");
    Ok(bytes)
}

/// Writes an exported backup as `<dir>/<file_name>`, replacing any earlier
/// backup of the same day.
///
/// The directory is created if needed and the file is written through a
/// temporary sibling and renamed into place.
///
/// # Errors
///
/// Returns [`LinkHubError::Io`](crate::LinkHubError::Io) if the directory or
/// file cannot be written.
pub fn write_export_file(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!("{file_name}.tmp"));
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, &path)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "export file written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkHubError;
    use tempfile::TempDir;

    #[test]
    fn export_creates_the_directory_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports");

        let path = write_export_file(&dir, "linktree-backup-2024-01-02.json", b"{}").unwrap();
        assert_eq!(path, dir.join("linktree-backup-2024-01-02.json"));

        write_export_file(&dir, "linktree-backup-2024-01-02.json", b"{\"a\":1}").unwrap();
        assert_eq!(read_import_file(&path).unwrap(), b"{\"a\":1}");
        assert!(!dir.join("linktree-backup-2024-01-02.json.tmp").exists());
    }

    #[test]
    fn missing_import_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = read_import_file(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LinkHubError::Io(_)));
    }
}
