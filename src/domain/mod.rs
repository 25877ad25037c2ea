//! Domain layer for the link hub plugin.
//!
//! Core types and rules, independent of Zellij APIs and of the storage
//! backend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`profile`]: Owner profile and its defaults
//! - [`link`]: Links, link ids and editable fields
//! - [`document`]: The persisted document and the shallow-merge overlay
//! - [`validation`]: URL checks and the import shape check
//!
//! # Examples
//!
//! ```
//! use linkhub::domain::{HubDocument, Link};
//!
//! let mut doc = HubDocument::default();
//! doc.links.push(Link::new("Blog", "https://blog.example"));
//! assert_eq!(doc.links.len(), 1);
//! ```

pub mod document;
pub mod error;
pub mod link;
pub mod profile;
pub mod validation;

pub use document::{HubDocument, PartialDocument, ThemeTag, DEFAULT_THEME};
pub use error::{ImportError, LinkHubError, Result, ValidationError};
pub use link::{Link, LinkField, LinkId};
pub use profile::{Profile, ProfileDraft};
