//! The state store: sole owner of the [`HubDocument`].
//!
//! Every change to the document goes through a [`StateStore`] operation. Each
//! persisting operation writes the whole document through the
//! [`Persistence`] adapter and reports the outcome as a [`WriteStatus`]. A failed
//! write never rolls the in-memory document back; memory stays authoritative
//! for the rest of the session.
//!
//! Links are addressed by [`LinkId`]. Reordering is positional because drop
//! targets are positions in the rendered list.

use crate::domain::document::{HubDocument, PartialDocument, ThemeTag};
use crate::domain::error::{LinkHubError, Result, ValidationError};
use crate::domain::link::{sample_links, Link, LinkField, LinkId};
use crate::domain::profile::{Profile, ProfileDraft};
use crate::domain::validation::is_well_formed_url;
use crate::storage::Persistence;

/// Outcome of the persistence write that follows a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    /// The document was written.
    Written,
    /// Nothing changed, so nothing was written.
    Skipped,
    /// The write failed; the in-memory change stands.
    Failed(String),
}

impl WriteStatus {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Owner of the application document and its persistence.
#[derive(Debug)]
pub struct StateStore {
    document: HubDocument,
    persistence: Persistence,
}

impl StateStore {
    /// Opens the store: defaults overlaid with whatever is persisted.
    ///
    /// Loading never writes. When the resulting link list is empty and
    /// `seed_samples` is set, demonstration links are placed in memory only; they
    /// reach storage with the next persisting operation.
    pub fn open(persistence: Persistence, seed_samples: bool) -> Self {
        let _span = tracing::debug_span!("store_open", seed_samples).entered();

        let mut document = HubDocument::default();
        match persistence.load() {
            Ok(Some(partial)) => {
                document.merge(partial);
                tracing::debug!(links = document.links.len(), theme = %document.theme, "stored document merged");
            }
            Ok(None) => tracing::debug!("starting from defaults"),
            Err(e) => tracing::error!(error = %e, "failed to read stored document, starting from defaults"),
        }

        if seed_samples && document.links.is_empty() {
            tracing::debug!("seeding sample links");
            document.links = sample_links();
        }

        Self {
            document,
            persistence,
        }
    }

    /// Read-only view of the document.
    #[must_use]
    pub const fn document(&self) -> &HubDocument {
        &self.document
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.document.links
    }

    /// Writes the current document.
    ///
    /// Called directly when a link field editor is left, since keystroke edits
    /// do not persist on their own.
    pub fn commit(&mut self) -> WriteStatus {
        match self.persistence.save(&self.document) {
            Ok(()) => WriteStatus::Written,
            Err(e) => {
                tracing::error!(error = %e, "failed to persist document");
                WriteStatus::Failed(e.to_string())
            }
        }
    }

    /// Replaces the profile; blank fields take their defaults.
    pub fn update_profile(&mut self, draft: &ProfileDraft) -> WriteStatus {
        let _span = tracing::debug_span!("store_update_profile").entered();
        self.document.profile = Profile::from_draft(draft);
        self.commit()
    }

    /// Appends a link after validating the trimmed input.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] if title or URL is blank
    /// - [`ValidationError::MalformedUrl`] if the URL has no scheme or host
    pub fn add_link(&mut self, title: &str, url: &str) -> Result<(LinkId, WriteStatus)> {
        let _span = tracing::debug_span!("store_add_link", title = %title, url = %url).entered();

        let title = title.trim();
        let url = url.trim();

        if title.is_empty() || url.is_empty() {
            return Err(ValidationError::MissingField.into());
        }
        if !is_well_formed_url(url) {
            return Err(ValidationError::MalformedUrl.into());
        }

        let link = Link::new(title, url);
        let id = link.id;
        self.document.links.push(link);
        tracing::debug!(link_id = %id, count = self.document.links.len(), "link added");

        Ok((id, self.commit()))
    }

    /// Sets one field of a link in place, without validating or persisting.
    ///
    /// Safe to call on every keystroke.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::LinkNotFound`] if `id` no longer exists.
    pub fn update_link_field(&mut self, id: LinkId, field: LinkField, value: &str) -> Result<()> {
        let link = self
            .document
            .links
            .iter_mut()
            .find(|link| link.id == id)
            .ok_or_else(|| LinkHubError::LinkNotFound(id.to_string()))?;

        link.set(field, value);
        tracing::trace!(link_id = %id, field = %field, "link field updated");
        Ok(())
    }

    /// Positional variant of [`update_link_field`](Self::update_link_field).
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::IndexOutOfBounds`] for a stale index.
    pub fn update_link_field_at(&mut self, index: usize, field: LinkField, value: &str) -> Result<()> {
        let id = self.id_at(index)?;
        self.update_link_field(id, field, value)
    }

    /// Removes a link. Callers confirm with the user first.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::LinkNotFound`] if `id` no longer exists.
    pub fn remove_link(&mut self, id: LinkId) -> Result<(Link, WriteStatus)> {
        let _span = tracing::debug_span!("store_remove_link", link_id = %id).entered();

        let index = self
            .document
            .position_of(id)
            .ok_or_else(|| LinkHubError::LinkNotFound(id.to_string()))?;
        let removed = self.document.links.remove(index);
        tracing::debug!(index, count = self.document.links.len(), "link removed");

        Ok((removed, self.commit()))
    }

    /// Moves the link at `from` so that it ends up at `to`.
    ///
    /// The link is taken out first and `to` is applied to the shortened list,
    /// so moving `[A, B, C]` from 0 to 2 yields `[B, C, A]`. A `to` past the end
    /// of the shortened list appends. `from == to` changes nothing and skips
    /// the write.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::IndexOutOfBounds`] if `from` is out of range.
    pub fn reorder_link(&mut self, from: usize, to: usize) -> Result<WriteStatus> {
        let _span = tracing::debug_span!("store_reorder_link", from, to).entered();

        let len = self.document.links.len();
        if from >= len {
            return Err(LinkHubError::IndexOutOfBounds { index: from, len });
        }
        if from == to {
            tracing::debug!("reorder onto itself, nothing to do");
            return Ok(WriteStatus::Skipped);
        }

        let link = self.document.links.remove(from);
        let to = to.min(self.document.links.len());
        self.document.links.insert(to, link);
        tracing::debug!(to, "link moved");

        Ok(self.commit())
    }

    /// Moves the link with `id` to position `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::LinkNotFound`] if `id` no longer exists.
    pub fn reorder_link_by_id(&mut self, id: LinkId, to: usize) -> Result<WriteStatus> {
        let from = self
            .document
            .position_of(id)
            .ok_or_else(|| LinkHubError::LinkNotFound(id.to_string()))?;
        self.reorder_link(from, to)
    }

    /// Selects a theme. Unknown tags are accepted.
    pub fn set_theme(&mut self, tag: ThemeTag) -> WriteStatus {
        tracing::debug!(theme = %tag, "theme selected");
        self.document.theme = tag;
        self.commit()
    }

    /// Shallow-merges an overlay (an imported backup) and persists.
    pub fn replace_state(&mut self, partial: PartialDocument) -> WriteStatus {
        let _span = tracing::debug_span!("store_replace_state").entered();
        self.document.merge(partial);
        tracing::debug!(links = self.document.links.len(), theme = %self.document.theme, "state replaced");
        self.commit()
    }

    /// Deletes the stored document and resets memory to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion; memory is left
    /// untouched in that case.
    pub fn clear(&mut self) -> Result<()> {
        self.persistence.clear()?;
        self.document = HubDocument::default();
        Ok(())
    }

    fn id_at(&self, index: usize) -> Result<LinkId> {
        self.document
            .links
            .get(index)
            .map(|link| link.id)
            .ok_or(LinkHubError::IndexOutOfBounds {
                index,
                len: self.document.links.len(),
            })
    }
}
