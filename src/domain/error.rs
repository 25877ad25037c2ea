//! Error types for the link hub plugin.
//!
//! This module defines the centralized error type [`LinkHubError`] and a type alias
//! [`Result`] used throughout the crate. Input problems the user can fix
//! ([`ValidationError`]) and rejected backup files ([`ImportError`]) get their own
//! enums so the interaction layer can pick the right notification text.

use thiserror::Error;

/// Rejected user input for a new link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title or URL was blank after trimming.
    #[error("please fill in both title and URL")]
    MissingField,

    /// URL is not an absolute URL with a scheme and host.
    #[error("please enter a valid URL")]
    MalformedUrl,
}

/// Reasons an uploaded backup file is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Bytes are not valid UTF-8 JSON.
    #[error("backup file is not valid JSON: {0}")]
    MalformedSyntax(String),

    /// JSON parsed but lacks a `profile` key or a `links` array.
    #[error("backup file is missing a profile or a links list")]
    InvalidShape,
}

/// The main error type for link hub operations.
///
/// Most variants are recovered locally by the event handler. None of them is
/// fatal to the plugin.
#[derive(Debug, Error)]
pub enum LinkHubError {
    /// New-link input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import file was refused; nothing was merged.
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// A link id no longer refers to any link (stale editor or drag source).
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// A positional index is outside the current link list.
    #[error("Index {index} out of bounds for {len} links")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Current list length.
        len: usize,
    },

    /// Reading or writing the key-value store failed.
    ///
    /// Also used for quota violations of bounded stores.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Palette parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinkHubError {
    /// Whether this error is a stale-reference race that should only be logged.
    #[must_use]
    pub const fn is_stale_reference(&self) -> bool {
        matches!(self, Self::LinkNotFound(_) | Self::IndexOutOfBounds { .. })
    }
}

/// A specialized `Result` type for link hub operations.
pub type Result<T> = std::result::Result<T, LinkHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_references_are_classified() {
        assert!(LinkHubError::LinkNotFound("x".into()).is_stale_reference());
        assert!(LinkHubError::IndexOutOfBounds { index: 3, len: 1 }.is_stale_reference());
        assert!(!LinkHubError::Storage("quota".into()).is_stale_reference());
        assert!(!LinkHubError::from(ValidationError::MalformedUrl).is_stale_reference());
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "please fill in both title and URL"
        );
        assert_eq!(
            LinkHubError::from(ImportError::InvalidShape).to_string(),
            "Import error: backup file is missing a profile or a links list"
        );
    }
}
