//! The persisted application document and its shallow-merge overlay.
//!
//! [`HubDocument`] is the unit of persistence and of import/export. It is built
//! from defaults at startup and overlaid with [`PartialDocument`]s: first the one
//! found in storage, later any imported backup. An overlay replaces each
//! top-level key it carries wholesale and leaves the others alone.
//!
//! Top-level keys this crate does not know about are kept in `extra` so they
//! survive a load/save or import/export cycle unchanged.

use super::link::{Link, LinkId};
use super::profile::Profile;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Theme selected when nothing else was stored.
pub const DEFAULT_THEME: &str = "default";

/// Name of the selected visual theme.
///
/// Any string is accepted; tags without a palette simply render with the base
/// palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTag(String);

impl ThemeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeTag {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl fmt::Display for ThemeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete application state: profile, ordered links and theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HubDocument {
    pub profile: Profile,
    pub links: Vec<Link>,
    pub theme: ThemeTag,

    /// Unknown top-level keys, written back after the known ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HubDocument {
    /// Applies an overlay: every key present in `partial` replaces ours.
    pub fn merge(&mut self, partial: PartialDocument) {
        let PartialDocument {
            profile,
            links,
            theme,
            extra,
        } = partial;

        if let Some(profile) = profile {
            self.profile = profile;
        }
        if let Some(links) = links {
            self.links = links;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        for (key, value) in extra {
            self.extra.insert(key, value);
        }
    }

    /// Current position of the link with `id`.
    #[must_use]
    pub fn position_of(&self, id: LinkId) -> Option<usize> {
        self.links.iter().position(|link| link.id == id)
    }

    /// Link with `id`, if it still exists.
    #[must_use]
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id == id)
    }
}

/// A shallow-merge overlay for [`HubDocument`].
///
/// Produced from a stored blob at startup or from an imported backup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialDocument {
    pub profile: Option<Profile>,
    pub links: Option<Vec<Link>>,
    pub theme: Option<ThemeTag>,
    pub extra: Map<String, Value>,
}

impl PartialDocument {
    /// Builds an overlay from a JSON value.
    ///
    /// Returns `None` when the value is not an object. Known keys with an
    /// unusable type (a non-array `links`, a non-string `theme`, a null
    /// `profile`) are dropped from the overlay so the current value survives.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(Self::from_object(object)),
            _ => None,
        }
    }

    fn from_object(mut object: Map<String, Value>) -> Self {
        let profile = match object.remove("profile") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Profile::from_value(&value)),
        };

        let links = match object.remove("links") {
            Some(Value::Array(entries)) => Some(entries.iter().map(Link::from_value).collect()),
            Some(other) => {
                tracing::debug!(value = %other, "ignoring non-array links key");
                None
            }
            None => None,
        };

        let theme = match object.remove("theme") {
            Some(Value::String(tag)) => Some(ThemeTag::new(tag)),
            Some(other) => {
                tracing::debug!(value = %other, "ignoring non-string theme key");
                None
            }
            None => None,
        };

        Self {
            profile,
            links,
            theme,
            extra: object,
        }
    }

    /// Overlay that carries every key of `document`.
    #[must_use]
    pub fn from_document(document: &HubDocument) -> Self {
        Self {
            profile: Some(document.profile.clone()),
            links: Some(document.links.clone()),
            theme: Some(document.theme.clone()),
            extra: document.extra.clone(),
        }
    }
}
