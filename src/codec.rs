//! Backup export and import.
//!
//! Backups use exactly the format the persistence adapter stores, pretty
//! printed with two-space indentation. An exported file can therefore be
//! imported again, or dropped in as the stored document, without conversion.

use crate::domain::document::{HubDocument, PartialDocument};
use crate::domain::error::{ImportError, Result};
use crate::domain::validation::is_importable_document;
use chrono::NaiveDate;

/// Serializes the document as a pretty-printed JSON backup.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use linkhub::codec::export_document;
/// use linkhub::domain::HubDocument;
///
/// let bytes = export_document(&HubDocument::default())?;
/// assert!(String::from_utf8(bytes).unwrap().starts_with("{\n  \"profile\""));
/// # Ok::<(), linkhub::LinkHubError>(())
/// ```
pub fn export_document(document: &HubDocument) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(document)?;
    tracing::debug!(bytes = bytes.len(), links = document.links.len(), "document exported");
    Ok(bytes)
}

/// File name for a backup taken on `date`: `linktree-backup-YYYY-MM-DD.json`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("linktree-backup-{}.json", date.format("%Y-%m-%d"))
}

/// File name for a backup taken now, using the UTC calendar date.
#[must_use]
pub fn export_file_name_now() -> String {
    export_file_name(chrono::Utc::now().date_naive())
}

/// Parses and shape-checks an uploaded backup.
///
/// The result is an overlay to hand to
/// [`StateStore::replace_state`](crate::app::StateStore::replace_state). Nothing
/// is merged when this fails.
///
/// # Errors
///
/// - [`ImportError::MalformedSyntax`] if the bytes are not UTF-8 JSON
/// - [`ImportError::InvalidShape`] if the JSON lacks a `profile` or a `links` array
pub fn import_document(bytes: &[u8]) -> std::result::Result<PartialDocument, ImportError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ImportError::MalformedSyntax(e.to_string()))?;

    if !is_importable_document(&value) {
        tracing::debug!("imported document rejected by shape check");
        return Err(ImportError::InvalidShape);
    }

    PartialDocument::from_value(value).ok_or(ImportError::InvalidShape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Link, ThemeTag};

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "linktree-backup-2024-03-07.json");
        assert!(export_file_name_now().starts_with("linktree-backup-"));
    }

    #[test]
    fn export_is_pretty_printed_with_wire_names() {
        let mut doc = HubDocument::default();
        doc.links.push(Link::new("Blog", "https://blog.example"));
        let text = String::from_utf8(export_document(&doc).unwrap()).unwrap();

        assert!(text.contains("\n  \"links\": [\n    {\n      \"title\": \"Blog\""));
        assert!(text.contains("\"image\": "));
        assert!(text.contains("\"theme\": \"default\""));
    }

    #[test]
    fn import_reports_syntax_and_shape_failures() {
        assert!(matches!(
            import_document(b"{\"profile\": "),
            Err(ImportError::MalformedSyntax(_))
        ));
        assert!(matches!(
            import_document(&[0xff, 0xfe]),
            Err(ImportError::MalformedSyntax(_))
        ));
        assert_eq!(import_document(b"{}"), Err(ImportError::InvalidShape));
        assert_eq!(
            import_document(br#"{"profile": {}, "links": "x"}"#),
            Err(ImportError::InvalidShape)
        );
    }

    #[test]
    fn import_without_theme_leaves_theme_unset() {
        let partial = import_document(br#"{"profile": {"name": "Ada"}, "links": []}"#).unwrap();
        assert!(partial.theme.is_none());
        assert_eq!(partial.links, Some(vec![]));

        let mut doc = HubDocument {
            theme: ThemeTag::new("ocean"),
            ..HubDocument::default()
        };
        doc.merge(partial);
        assert_eq!(doc.theme.as_str(), "ocean");
    }
}
