//! Link entries and their session-local identifiers.
//!
//! On the wire a link is just `{ "title": ..., "url": ... }`. In memory every
//! link also carries a [`LinkId`] so that editors, removal prompts and drags keep
//! pointing at the same entry while the list is reordered underneath them. Ids
//! are never persisted; a fresh one is minted whenever a link is decoded.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a link within the running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(Uuid);

impl LinkId {
    /// Mints a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled URL shown on the public page.
///
/// Equality compares `title` and `url` only: two links with the same content
/// are equal even when they were decoded in different sessions.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    #[serde(skip)]
    pub id: LinkId,
    pub title: String,
    pub url: String,
}

impl Link {
    /// Creates a link with a fresh id.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: LinkId::new(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// Decodes a link from any JSON value.
    ///
    /// Non-object values and non-string fields decode as empty strings so a
    /// damaged backup still renders.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self::new(field("title"), field("url"))
    }

    /// Sets one field in place.
    pub fn set(&mut self, field: LinkField, value: impl Into<String>) {
        match field {
            LinkField::Title => self.title = value.into(),
            LinkField::Url => self.url = value.into(),
        }
    }

    /// Reads one field.
    #[must_use]
    pub fn get(&self, field: LinkField) -> &str {
        match field {
            LinkField::Title => &self.title,
            LinkField::Url => &self.url,
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.url == other.url
    }
}

impl Eq for Link {}

impl<'de> Deserialize<'de> for Link {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Editable field of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkField {
    Title,
    Url,
}

impl LinkField {
    /// The other field; used to hop from title to URL while editing.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Url,
            Self::Url => Self::Title,
        }
    }
}

impl FromStr for LinkField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "url" => Ok(Self::Url),
            other => Err(format!("unknown link field: {other}")),
        }
    }
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Url => write!(f, "url"),
        }
    }
}

/// Demonstration links placed on a brand new page.
#[must_use]
pub fn sample_links() -> Vec<Link> {
    vec![
        Link::new("My Instagram", "https://instagram.com/yourusername"),
        Link::new("YouTube Channel", "https://youtube.com/yourchannel"),
        Link::new("My Website", "https://yoursite.com"),
        Link::new("LinkedIn", "https://linkedin.com/in/yourusername"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_is_not_serialized() {
        let value = serde_json::to_value(Link::new("Blog", "https://blog.example")).unwrap();
        assert_eq!(value, json!({"title": "Blog", "url": "https://blog.example"}));
    }

    #[test]
    fn malformed_entries_decode_as_empty_fields() {
        let links: Vec<Link> =
            serde_json::from_value(json!([42, {"title": "Only title"}, {"url": false}])).unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0], Link::new("", ""));
        assert_eq!(links[1].title, "Only title");
        assert_eq!(links[1].url, "");
        assert_eq!(links[2].url, "");
    }

    #[test]
    fn decoded_links_get_distinct_ids() {
        let links: Vec<Link> = serde_json::from_value(json!([
            {"title": "A", "url": "https://a.example"},
            {"title": "A", "url": "https://a.example"}
        ]))
        .unwrap();
        assert_eq!(links[0], links[1]);
        assert_ne!(links[0].id, links[1].id);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("title".parse::<LinkField>(), Ok(LinkField::Title));
        assert_eq!("url".parse::<LinkField>(), Ok(LinkField::Url));
        assert!("href".parse::<LinkField>().is_err());
        assert_eq!(LinkField::Title.next(), LinkField::Url);
    }
}
