//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: text is already sanitized,
//! defaults are already substituted and lists are already windowed to the
//! terminal height.

use crate::app::notify::NotificationKind;
use crate::app::modes::AdminSection;
use crate::domain::{LinkField, LinkId};
use crate::ui::icons::Icon;
use crate::ui::theme::Palette;

/// Complete renderable state for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub palette: Palette,

    pub header: HeaderInfo,

    pub profile: ProfileCard,

    /// Visible window of the public link list.
    pub public_links: Vec<PublicLinkItem>,

    /// Set when there are no links at all.
    pub empty_state: Option<EmptyState>,

    /// Present while the admin panel is open.
    pub admin: Option<AdminPanel>,

    pub notification: Option<NotificationView>,

    /// Pending yes/no question.
    pub confirm: Option<String>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub bio: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicLinkItem {
    pub title: String,
    /// Domain, or the raw URL when it does not parse.
    pub domain: String,
    pub icon: Icon,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct NotificationView {
    pub message: String,
    pub kind: NotificationKind,
}

/// The admin panel: section tabs plus the rows of every section.
#[derive(Debug, Clone)]
pub struct AdminPanel {
    pub tabs: Vec<SectionTab>,
    pub focused: AdminSection,
    pub profile_fields: Vec<FieldRow>,
    pub new_link_fields: Vec<FieldRow>,
    /// Visible window of the editable link list.
    pub editable_links: Vec<EditableLinkItem>,
    pub themes: Vec<ThemeButton>,
    pub backup_rows: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTab {
    pub title: &'static str,
    pub is_focused: bool,
}

/// A labelled text field, or a button when `value` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: Option<String>,
    pub is_selected: bool,
    pub is_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableLinkItem {
    pub id: LinkId,
    /// Position in the full list, one-based for display.
    pub position: usize,
    pub title: String,
    pub url: String,
    pub is_selected: bool,
    /// This row is the link being dragged.
    pub is_dragging: bool,
    /// A drag is live and dropping now would land here.
    pub is_drop_target: bool,
    /// Field with an open editor, if any.
    pub editing: Option<LinkField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeButton {
    pub tag: String,
    pub label: String,
    pub swatch: String,
    pub is_active: bool,
    pub is_selected: bool,
}
