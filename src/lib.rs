//! Linkhub: a personal link hub page inside a Zellij pane.
//!
//! The plugin shows a public page with the owner's profile and a list of
//! links, plus an admin panel for editing the profile, adding, editing,
//! removing and reordering links, switching the page theme, and exporting or
//! importing a JSON backup. Everything is persisted as one JSON document.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, timers, file IO
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and actions                       │
//! │  - StateStore (sole owner of the document)          │
//! │  - Notifications, drag, view model computation      │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Codec         │
//! │ (ui/)         │   │ (storage/)    │   │ (codec)       │
//! │ - Rendering   │   │ - File store  │   │ - Export      │
//! │ - Palettes    │   │ - Memory store│   │ - Import      │
//! │ - Icons       │   │ - Persistence │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Profile, links, document, validation, errors     │
//! │  - Host paths and backup file IO                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/linkhub.wasm" {
//!         data_dir "/host/.local/share/zellij/linkhub"
//!         export_dir "/host/Downloads"
//!         opener "xdg-open"
//!         sample_links "true"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use linkhub::app::{AppState, StateStore};
//! use linkhub::storage::{MemoryStore, Persistence};
//! use linkhub::ui::ThemeCatalog;
//! use linkhub::{handle_event, Event};
//!
//! let store = StateStore::open(Persistence::new(MemoryStore::new()), false);
//! let mut state = AppState::new(store, ThemeCatalog::builtin());
//!
//! let (render, _actions) = handle_event(&mut state, &Event::OpenAdmin)?;
//! assert!(render);
//! # Ok::<(), linkhub::LinkHubError>(())
//! ```

pub mod app;
pub mod codec;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, StateStore};
pub use domain::{LinkHubError, Result};

use app::NotificationKind;
use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{FileStore, MemoryStore, Persistence};
use ui::ThemeCatalog;

/// Command used to open links when none is configured.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `linktree-data.json` and the trace file.
    pub data_dir: PathBuf,

    /// Directory receiving exported backups.
    pub export_dir: PathBuf,

    /// Program invoked with a link's URL as its only argument.
    pub opener: String,

    /// Seed four sample links when the stored list is empty. Default: `true`
    pub sample_links: bool,

    /// `trace`, `debug`, `info`, `warn` or `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: infrastructure::get_data_dir(),
            export_dir: infrastructure::get_export_dir(),
            opener: DEFAULT_OPENER.to_string(),
            sample_links: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the plugin configuration map.
    ///
    /// Missing keys take their defaults. Directory values go through
    /// [`infrastructure::expand_tilde`], so `~/links` means the host home.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::Config`] when `sample_links` is not a boolean or
    /// `opener` is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use linkhub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sample_links".to_string(), "false".to_string());
    /// map.insert("opener".to_string(), "open".to_string());
    ///
    /// let config = Config::from_zellij(&map)?;
    /// assert!(!config.sample_links);
    /// assert_eq!(config.opener, "open");
    /// # Ok::<(), linkhub::LinkHubError>(())
    /// ```
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Result<Self> {
        let defaults = Self::default();

        let dir = |key: &str, default: PathBuf| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(default, infrastructure::expand_tilde)
        };

        let sample_links = match config.get("sample_links").map(|s| s.trim()) {
            None => defaults.sample_links,
            Some(value) => value.parse::<bool>().map_err(|_| {
                LinkHubError::Config(format!("sample_links must be true or false, got {value:?}"))
            })?,
        };

        let opener = match config.get("opener") {
            None => defaults.opener,
            Some(value) if value.trim().is_empty() => {
                return Err(LinkHubError::Config("opener must not be blank".to_string()));
            }
            Some(value) => value.trim().to_string(),
        };

        Ok(Self {
            data_dir: dir("data_dir", defaults.data_dir),
            export_dir: dir("export_dir", defaults.export_dir),
            opener,
            sample_links,
            trace_level: config.get("trace_level").cloned(),
        })
    }
}

/// Builds the application state for `config`.
///
/// The document is read from a [`FileStore`] in `config.data_dir`. If that
/// directory cannot be created the plugin still starts on a [`MemoryStore`],
/// with an info notification saying changes will not survive a reload; the
/// returned actions schedule that notification's dismissal.
pub fn initialize(config: &Config) -> (AppState, Vec<Action>) {
    let span = tracing::debug_span!("initialize", data_dir = %config.data_dir.display());
    let _guard = span.entered();

    let (persistence, fallback) = match FileStore::new(&config.data_dir) {
        Ok(store) => (Persistence::new(store), false),
        Err(e) => {
            tracing::error!(error = %e, "data directory unavailable, keeping data in memory");
            (Persistence::new(MemoryStore::new()), true)
        }
    };

    let store = StateStore::open(persistence, config.sample_links);
    let mut state = AppState::new(store, ThemeCatalog::builtin());
    tracing::debug!(links = state.store.links().len(), "app state initialized");

    let mut actions = Vec::new();
    if fallback {
        actions.push(state.notify(
            "Storage unavailable: changes will not be saved",
            NotificationKind::Info,
        ));
    }
    (state, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()).unwrap(), Config::default());
    }

    #[test]
    fn directories_expand_tilde() {
        let config = Config::from_zellij(&map(&[("export_dir", "~/Downloads")])).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("/host/Downloads"));
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = Config::from_zellij(&map(&[("sample_links", "sometimes")])).unwrap_err();
        assert!(matches!(err, LinkHubError::Config(_)));

        let err = Config::from_zellij(&map(&[("opener", "  ")])).unwrap_err();
        assert!(matches!(err, LinkHubError::Config(_)));
    }

    #[test]
    fn initialize_seeds_samples_without_writing() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp.path().join("data"),
            ..Config::default()
        };

        let (state, actions) = initialize(&config);

        assert!(actions.is_empty());
        assert_eq!(state.store.links().len(), 4);
        assert!(!temp.path().join("data").join("linktree-data.json").exists());
    }

    #[test]
    fn unusable_data_dir_falls_back_to_memory() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let config = Config {
            data_dir: blocker.join("data"),
            sample_links: false,
            ..Config::default()
        };

        let (state, actions) = initialize(&config);

        assert_eq!(actions.len(), 1);
        assert_eq!(state.notifier.current().unwrap().kind, NotificationKind::Info);
        assert!(state.store.links().is_empty());
    }
}
