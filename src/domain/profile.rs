//! Profile shown at the top of the link hub page.
//!
//! A profile has a display name, a short bio and an avatar image URL. On the
//! wire the avatar is stored under the `image` key. Blank fields are replaced
//! by fixed defaults when the owner saves the profile form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name used when the profile form is saved with a blank name.
pub const DEFAULT_NAME: &str = "Your Name";

/// Bio used when the profile form is saved with a blank bio.
pub const DEFAULT_BIO: &str = "Your bio goes here";

/// Avatar used when the profile form is saved with a blank image URL.
pub const DEFAULT_IMAGE_URL: &str =
    "https://via.placeholder.com/120/4f46e5/ffffff?text=%F0%9F%91%A4";

/// Owner profile.
///
/// Decoding is lenient: a missing or non-string field decodes as an empty
/// string, and a non-object value decodes as a profile with all fields empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Short biography line.
    pub bio: String,
    /// Avatar image URL.
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

/// Raw profile form input, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub bio: String,
    pub image_url: String,
}

impl ProfileDraft {
    /// Prefills the form from an existing profile.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            image_url: profile.image_url.clone(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl Profile {
    /// Builds a profile from form input, substituting defaults for blank fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkhub::domain::{Profile, ProfileDraft};
    ///
    /// let draft = ProfileDraft { name: "Ada".into(), bio: "  ".into(), image_url: String::new() };
    /// let profile = Profile::from_draft(&draft);
    /// assert_eq!(profile.name, "Ada");
    /// assert_eq!(profile.bio, linkhub::domain::profile::DEFAULT_BIO);
    /// ```
    #[must_use]
    pub fn from_draft(draft: &ProfileDraft) -> Self {
        Self {
            name: or_default(&draft.name, DEFAULT_NAME),
            bio: or_default(&draft.bio, DEFAULT_BIO),
            image_url: or_default(&draft.image_url, DEFAULT_IMAGE_URL),
        }
    }

    /// Decodes a profile from an arbitrary JSON value without failing.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            bio: field("bio"),
            image_url: field("image"),
        }
    }

    /// Name for display; blank names show the default.
    #[must_use]
    pub fn display_name(&self) -> String {
        or_default(&self.name, DEFAULT_NAME)
    }

    /// Bio for display; blank bios show the default.
    #[must_use]
    pub fn display_bio(&self) -> String {
        or_default(&self.bio, DEFAULT_BIO)
    }

    /// Image URL for display; blank URLs show the default avatar.
    #[must_use]
    pub fn display_image_url(&self) -> String {
        or_default(&self.image_url, DEFAULT_IMAGE_URL)
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_draft_fields_take_defaults() {
        let profile = Profile::from_draft(&ProfileDraft::default());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn image_is_serialized_under_image_key() {
        let value = serde_json::to_value(Profile::default()).unwrap();
        assert_eq!(value["image"], json!(DEFAULT_IMAGE_URL));
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn lenient_decoding_never_fails() {
        let profile: Profile = serde_json::from_value(json!({"name": 7, "bio": "hi"})).unwrap();
        assert_eq!(profile.name, "");
        assert_eq!(profile.bio, "hi");
        assert_eq!(profile.image_url, "");
        assert_eq!(profile.display_name(), DEFAULT_NAME);

        let profile: Profile = serde_json::from_value(json!("oops")).unwrap();
        assert_eq!(profile.bio, "");
    }
}
