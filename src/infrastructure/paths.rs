//! Path utilities for the Zellij sandbox.
//!
//! Inside the sandbox `/host` is the directory Zellij was started from, which
//! is where `~` points for paths the user types.

use std::path::PathBuf;

/// Directory holding the stored document and the trace file.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("linkhub")
}

/// Directory exported backups are written to when none is configured.
#[must_use]
pub fn get_export_dir() -> PathBuf {
    PathBuf::from("/host")
}

/// Maps a user-typed path into the sandbox: `~` and `~/...` resolve under
/// `/host`, anything else is taken as is.
///
/// # Examples
///
/// ```
/// use linkhub::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/backup.json"), PathBuf::from("/host/backup.json"));
/// assert_eq!(expand_tilde("/tmp/b.json"), PathBuf::from("/tmp/b.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        PathBuf::from(path.replacen('~', "/host", 1))
    } else if path == "~" {
        PathBuf::from("/host")
    } else {
        PathBuf::from(path)
    }
}

/// Host-side spelling of a sandbox path, for messages shown to the user.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("a/~/b"), PathBuf::from("a/~/b"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }

    #[test]
    fn host_prefix_is_shown_as_tilde() {
        assert_eq!(strip_host_prefix("/host/linktree-backup.json"), "~/linktree-backup.json");
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hostile/x"), "/hostile/x");
        assert_eq!(strip_host_prefix("/tmp/x"), "/tmp/x");
    }
}
