//! Interaction mode types for the plugin.
//!
//! The plugin shows either the public page or the admin panel on top of it.
//! Inside the admin panel the cursor sits on a row of one [`AdminSection`], and
//! at most one text field is being edited at a time ([`EditTarget`]). A pending
//! yes/no question ([`Confirm`]) captures all input until it is answered.

use crate::domain::{LinkField, LinkId};

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Visitor-facing profile and link list.
    #[default]
    Public,

    /// Admin panel modal.
    Admin,
}

/// Section of the admin panel holding the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    /// Name, bio and image fields plus a save row.
    #[default]
    Profile,
    /// Title and URL fields plus an add row.
    NewLink,
    /// One row per existing link.
    Links,
    /// One row per built-in theme.
    Theme,
    /// Export row and import path row.
    Backup,
}

impl AdminSection {
    pub const ALL: [Self; 5] = [
        Self::Profile,
        Self::NewLink,
        Self::Links,
        Self::Theme,
        Self::Backup,
    ];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Profile => Self::NewLink,
            Self::NewLink => Self::Links,
            Self::Links => Self::Theme,
            Self::Theme => Self::Backup,
            Self::Backup => Self::Profile,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Profile => Self::Backup,
            Self::NewLink => Self::Profile,
            Self::Links => Self::NewLink,
            Self::Theme => Self::Links,
            Self::Backup => Self::Theme,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::NewLink => "Add link",
            Self::Links => "Links",
            Self::Theme => "Theme",
            Self::Backup => "Backup",
        }
    }
}

/// Row of the profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRow {
    Name,
    Bio,
    Image,
    Save,
}

impl ProfileRow {
    pub const ALL: [Self; 4] = [Self::Name, Self::Bio, Self::Image, Self::Save];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Bio => "Bio",
            Self::Image => "Image URL",
            Self::Save => "Save changes",
        }
    }
}

/// Row of the add-link section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLinkRow {
    Title,
    Url,
    Add,
}

impl NewLinkRow {
    pub const ALL: [Self; 3] = [Self::Title, Self::Url, Self::Add];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Url => "URL",
            Self::Add => "Add link",
        }
    }
}

/// Row of the backup section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupRow {
    Export,
    ImportPath,
}

impl BackupRow {
    pub const ALL: [Self; 2] = [Self::Export, Self::ImportPath];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Export => "Export backup",
            Self::ImportPath => "Import from",
        }
    }
}

/// The text field receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A buffered profile form field (not the Save row).
    Profile(ProfileRow),
    /// A buffered add-link form field (not the Add row).
    NewLink(NewLinkRow),
    /// A field of an existing link, edited in place.
    Link { id: LinkId, field: LinkField },
    /// The import file path.
    ImportPath,
}

/// Question waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirm {
    RemoveLink { id: LinkId, title: String },
}

impl Confirm {
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::RemoveLink { title, .. } => {
                format!("Are you sure you want to remove \"{title}\"? (y/n)")
            }
        }
    }
}
