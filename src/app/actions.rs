//! Side effects requested by the event handler.
//!
//! The handler never touches the Zellij host or the filesystem outside the
//! state store. Anything else is returned as an [`Action`] and carried out by
//! the plugin runtime, which reports results back as events.

use std::path::PathBuf;

/// Commands executed by the plugin runtime after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens a link with the configured opener command.
    OpenUrl {
        /// Link target as stored.
        url: String,
    },

    /// Reads a backup file and reports back with
    /// [`Event::ImportFileLoaded`](crate::app::Event::ImportFileLoaded) or
    /// [`Event::ImportFileFailed`](crate::app::Event::ImportFileFailed).
    ReadImportFile {
        /// Path with `~` already expanded.
        path: PathBuf,
    },

    /// Writes an exported backup into the export directory and reports back
    /// with [`Event::ExportWritten`](crate::app::Event::ExportWritten) or
    /// [`Event::ExportFailed`](crate::app::Event::ExportFailed).
    WriteExportFile {
        /// `linktree-backup-YYYY-MM-DD.json`.
        file_name: String,
        /// Pretty-printed document.
        bytes: Vec<u8>,
    },

    /// Arms a one-shot timer that delivers [`Event::Timer`](crate::app::Event::Timer).
    ScheduleDismiss {
        seconds: f64,
    },
}
