//! Icon lookup for link rows.
//!
//! Icons are chosen from the link's domain (leading `www.` ignored) using a
//! fixed table. Each icon has a stable identifier and a two-cell badge that the
//! renderer prints in front of the link title.

use crate::domain::validation::extract_domain;

/// Icon shown next to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub id: &'static str,
    pub badge: &'static str,
}

/// Icon for links whose domain is not in the table.
pub const GENERIC_LINK: Icon = Icon {
    id: "link",
    badge: "->",
};

const KNOWN: [(&str, Icon); 20] = [
    ("instagram.com", Icon { id: "instagram", badge: "IG" }),
    ("facebook.com", Icon { id: "facebook", badge: "FB" }),
    ("twitter.com", Icon { id: "twitter", badge: "TW" }),
    ("x.com", Icon { id: "x-twitter", badge: "X " }),
    ("linkedin.com", Icon { id: "linkedin", badge: "IN" }),
    ("youtube.com", Icon { id: "youtube", badge: "YT" }),
    ("tiktok.com", Icon { id: "tiktok", badge: "TT" }),
    ("github.com", Icon { id: "github", badge: "GH" }),
    ("spotify.com", Icon { id: "spotify", badge: "SP" }),
    ("apple.com", Icon { id: "apple", badge: "AP" }),
    ("whatsapp.com", Icon { id: "whatsapp", badge: "WA" }),
    ("telegram.org", Icon { id: "telegram", badge: "TG" }),
    ("discord.com", Icon { id: "discord", badge: "DC" }),
    ("twitch.tv", Icon { id: "twitch", badge: "TV" }),
    ("pinterest.com", Icon { id: "pinterest", badge: "PI" }),
    ("snapchat.com", Icon { id: "snapchat", badge: "SC" }),
    ("reddit.com", Icon { id: "reddit", badge: "RD" }),
    ("medium.com", Icon { id: "medium", badge: "MD" }),
    ("behance.net", Icon { id: "behance", badge: "BE" }),
    ("dribbble.com", Icon { id: "dribbble", badge: "DR" }),
];

/// Resolves the icon for `url`.
///
/// # Examples
///
/// ```
/// use linkhub::ui::icons::{icon_for, GENERIC_LINK};
///
/// assert_eq!(icon_for("https://www.github.com/me").id, "github");
/// assert_eq!(icon_for("https://example.com"), GENERIC_LINK);
/// ```
#[must_use]
pub fn icon_for(url: &str) -> Icon {
    let domain = extract_domain(url);
    KNOWN
        .iter()
        .find(|(known, _)| *known == domain)
        .map_or(GENERIC_LINK, |(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_domains_resolve_with_or_without_www() {
        assert_eq!(icon_for("https://instagram.com/me").id, "instagram");
        assert_eq!(icon_for("https://www.youtube.com/c/me").id, "youtube");
        assert_eq!(icon_for("https://x.com/me").id, "x-twitter");
        assert_eq!(icon_for("https://telegram.org/").id, "telegram");
    }

    #[test]
    fn subdomains_and_garbage_get_the_generic_icon() {
        assert_eq!(icon_for("https://music.spotify.com/"), GENERIC_LINK);
        assert_eq!(icon_for("not a url"), GENERIC_LINK);
        assert_eq!(icon_for(""), GENERIC_LINK);
    }

    #[test]
    fn badges_fit_two_cells() {
        for (_, icon) in KNOWN {
            assert_eq!(icon.badge.chars().count(), 2, "{}", icon.id);
        }
        assert_eq!(GENERIC_LINK.badge.chars().count(), 2);
    }
}
