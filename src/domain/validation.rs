//! Input and document validation.
//!
//! URL checks follow the WHATWG URL grammar via the `url` crate. A link URL is
//! only accepted when it is absolute and names a host, so `example.com` (no
//! scheme) and `mailto:` style URLs are rejected.

use serde_json::Value;
use url::Url;

/// Returns true iff `s` parses as an absolute URL with a scheme and a host.
///
/// # Examples
///
/// ```
/// use linkhub::domain::validation::is_well_formed_url;
///
/// assert!(is_well_formed_url("https://example.com/path"));
/// assert!(!is_well_formed_url("example.com"));
/// ```
#[must_use]
pub fn is_well_formed_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// Returns the host of `url` with a leading `www.` removed.
///
/// Yields an empty string when `url` is not well-formed. Used for icon lookup
/// and display only.
#[must_use]
pub fn extract_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let Some(host) = parsed.host_str().filter(|host| !host.is_empty()) else {
        return String::new();
    };

    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Domain shown under a link title; falls back to the raw string when the URL
/// is not well-formed.
#[must_use]
pub fn display_domain(url: &str) -> String {
    let domain = extract_domain(url);
    if domain.is_empty() {
        url.to_string()
    } else {
        domain
    }
}

/// Shape check for an imported document.
///
/// Accepts any JSON object with a non-null `profile` and a `links` array. The
/// individual links are not inspected; malformed entries are decoded leniently
/// later on.
#[must_use]
pub fn is_importable_document(doc: &Value) -> bool {
    let Some(object) = doc.as_object() else {
        return false;
    };

    let has_profile = object.get("profile").is_some_and(|profile| !profile.is_null());
    let has_links = object.get("links").is_some_and(Value::is_array);

    has_profile && has_links
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn urls_need_scheme_and_host() {
        assert!(is_well_formed_url("https://example.com/path"));
        assert!(is_well_formed_url("http://localhost:8080"));
        assert!(is_well_formed_url("https://blog.example"));
        assert!(!is_well_formed_url("example.com"));
        assert!(!is_well_formed_url("not-a-url"));
        assert!(!is_well_formed_url(""));
        assert!(!is_well_formed_url("mailto:me@example.com"));
    }

    #[test]
    fn domain_strips_leading_www() {
        assert_eq!(extract_domain("https://www.github.com/user"), "github.com");
        assert_eq!(extract_domain("https://Instagram.com/me"), "instagram.com");
        assert_eq!(extract_domain("https://awww.example"), "awww.example");
        assert_eq!(extract_domain("not a url"), "");
    }

    #[test]
    fn display_domain_falls_back_to_raw_text() {
        assert_eq!(display_domain("https://www.youtube.com/c/x"), "youtube.com");
        assert_eq!(display_domain("half-typed"), "half-typed");
    }

    #[test]
    fn importable_document_shapes() {
        assert!(!is_importable_document(&json!({})));
        assert!(is_importable_document(&json!({"profile": {}, "links": []})));
        assert!(!is_importable_document(&json!({"profile": {}, "links": "x"})));
        assert!(!is_importable_document(&json!({"profile": null, "links": []})));
        assert!(!is_importable_document(&json!([1, 2, 3])));
        assert!(!is_importable_document(&Value::Null));
        assert!(is_importable_document(&json!({"profile": {}, "links": [1, "two"]})));
    }
}
