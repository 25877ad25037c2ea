//! Application state and view model computation.
//!
//! [`AppState`] owns everything the plugin knows: the [`StateStore`] with the
//! persisted document, plus transient interaction state (which page is shown,
//! where the cursors are, the open editor, form buffers, drag, pending
//! confirmation and the current notification). Transient state is never
//! persisted and starts fresh with every plugin load.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` projects the state into a [`UIViewModel`]. It substitutes
//! profile defaults, strips control characters from user text, resolves icons
//! and windows the link lists to the terminal height. The projection is a pure
//! function of the state, so the editable list can be rebuilt after any
//! mutation without invalidating the drag source or an open editor.

use super::actions::Action;
use super::drag::DragState;
use super::modes::{AdminSection, BackupRow, Confirm, EditTarget, NewLinkRow, ProfileRow, Screen};
use super::notify::{NotificationKind, Notifier, DISMISS_AFTER_SECS};
use super::store::StateStore;
use crate::domain::validation::display_domain;
use crate::domain::{Link, LinkField, LinkId, ProfileDraft};
use crate::ui::helpers::sanitize;
use crate::ui::icons::icon_for;
use crate::ui::theme::{Palette, ThemeCatalog};
use crate::ui::viewmodel::{
    AdminPanel, EditableLinkItem, EmptyState, FieldRow, FooterInfo, HeaderInfo, NotificationView,
    ProfileCard, PublicLinkItem, SectionTab, ThemeButton, UIViewModel,
};

/// Rows taken by everything but the link list on the public page.
const PUBLIC_CHROME_ROWS: usize = 10;

/// Rows taken by everything but the section body in the admin panel.
const ADMIN_CHROME_ROWS: usize = 8;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Owner of the persisted document.
    pub store: StateStore,

    pub screen: Screen,

    /// Selected row of the public link list.
    pub public_cursor: usize,

    /// Section of the admin panel holding the cursor.
    pub section: AdminSection,

    /// Selected row within `section`.
    pub row: usize,

    /// Text field receiving input, if any.
    pub editor: Option<EditTarget>,

    pub drag: DragState,

    /// Question that must be answered before anything else happens.
    pub confirm: Option<Confirm>,

    /// Profile form buffer; applied by "Save changes".
    pub profile_draft: ProfileDraft,

    /// Add-link form buffers, kept when validation fails.
    pub new_link_title: String,
    pub new_link_url: String,

    /// Import file path buffer.
    pub import_path: String,

    pub notifier: Notifier,

    /// Theme buttons offered in the admin panel.
    pub catalog: ThemeCatalog,
}

impl AppState {
    #[must_use]
    pub fn new(store: StateStore, catalog: ThemeCatalog) -> Self {
        let profile_draft = ProfileDraft::from_profile(&store.document().profile);
        Self {
            store,
            screen: Screen::Public,
            public_cursor: 0,
            section: AdminSection::Profile,
            row: 0,
            editor: None,
            drag: DragState::Idle,
            confirm: None,
            profile_draft,
            new_link_title: String::new(),
            new_link_url: String::new(),
            import_path: String::new(),
            notifier: Notifier::new(),
            catalog,
        }
    }

    #[must_use]
    pub const fn is_typing(&self) -> bool {
        self.editor.is_some()
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.confirm.is_some()
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.catalog.palette_for(self.store.document().theme.as_str())
    }

    /// Shows a notification and returns the timer request that dismisses it.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Action {
        self.notifier.notify(message, kind);
        Action::ScheduleDismiss {
            seconds: DISMISS_AFTER_SECS,
        }
    }

    /// Opens the admin panel with the profile form prefilled from the document.
    pub fn open_admin(&mut self) {
        self.screen = Screen::Admin;
        self.section = AdminSection::Profile;
        self.row = 0;
        self.editor = None;
        self.drag = DragState::Idle;
        self.profile_draft = ProfileDraft::from_profile(&self.store.document().profile);
    }

    /// Returns to the public page. Callers blur any editor first.
    pub fn close_admin(&mut self) {
        self.screen = Screen::Public;
        self.editor = None;
        self.drag = DragState::Idle;
        self.confirm = None;
        self.clamp_cursors();
    }

    /// Number of rows in the focused admin section.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.section {
            AdminSection::Profile => ProfileRow::ALL.len(),
            AdminSection::NewLink => NewLinkRow::ALL.len(),
            AdminSection::Links => self.store.links().len(),
            AdminSection::Theme => self.catalog.len(),
            AdminSection::Backup => BackupRow::ALL.len(),
        }
    }

    /// Moves the active cursor down, wrapping to the top.
    pub fn move_down(&mut self) {
        let (cursor, len) = self.active_cursor();
        if len > 0 {
            *cursor = (*cursor + 1) % len;
        }
    }

    /// Moves the active cursor up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        let (cursor, len) = self.active_cursor();
        if len > 0 {
            *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
        }
    }

    fn active_cursor(&mut self) -> (&mut usize, usize) {
        match self.screen {
            Screen::Public => {
                let len = self.store.links().len();
                (&mut self.public_cursor, len)
            }
            Screen::Admin => {
                let len = self.row_count();
                (&mut self.row, len)
            }
        }
    }

    /// Focuses another admin section, starting at its first row.
    pub fn focus_section(&mut self, section: AdminSection) {
        self.section = section;
        self.row = 0;
    }

    /// Keeps both cursors inside their lists after the link list changed.
    pub fn clamp_cursors(&mut self) {
        let links = self.store.links().len();
        self.public_cursor = self.public_cursor.min(links.saturating_sub(1));
        self.row = self.row.min(self.row_count().saturating_sub(1));
    }

    /// Link under the public cursor.
    #[must_use]
    pub fn selected_public_link(&self) -> Option<&Link> {
        self.store.links().get(self.public_cursor)
    }

    /// Link under the admin cursor when the links section is focused.
    #[must_use]
    pub fn selected_admin_link(&self) -> Option<&Link> {
        if self.section == AdminSection::Links {
            self.store.links().get(self.row)
        } else {
            None
        }
    }

    #[must_use]
    pub fn profile_row(&self) -> Option<ProfileRow> {
        ProfileRow::ALL.get(self.row).copied()
    }

    #[must_use]
    pub fn new_link_row(&self) -> Option<NewLinkRow> {
        NewLinkRow::ALL.get(self.row).copied()
    }

    #[must_use]
    pub fn backup_row(&self) -> Option<BackupRow> {
        BackupRow::ALL.get(self.row).copied()
    }

    /// Form buffer behind a buffered editor; `None` for in-place link edits.
    pub fn buffer_mut(&mut self, target: EditTarget) -> Option<&mut String> {
        match target {
            EditTarget::Profile(ProfileRow::Name) => Some(&mut self.profile_draft.name),
            EditTarget::Profile(ProfileRow::Bio) => Some(&mut self.profile_draft.bio),
            EditTarget::Profile(ProfileRow::Image) => Some(&mut self.profile_draft.image_url),
            EditTarget::NewLink(NewLinkRow::Title) => Some(&mut self.new_link_title),
            EditTarget::NewLink(NewLinkRow::Url) => Some(&mut self.new_link_url),
            EditTarget::ImportPath => Some(&mut self.import_path),
            EditTarget::Profile(ProfileRow::Save) | EditTarget::NewLink(NewLinkRow::Add) | EditTarget::Link { .. } => {
                None
            }
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let links = self.store.links();
        let empty_state = links.is_empty().then(|| EmptyState {
            message: "No links yet".to_string(),
            subtitle: "Open the admin panel with 'a' to add your first link".to_string(),
        });

        let available = rows.saturating_sub(PUBLIC_CHROME_ROWS).max(1);
        let (start, end) = visible_window(self.public_cursor, links.len(), available);
        let public_links = links[start..end]
            .iter()
            .enumerate()
            .map(|(offset, link)| PublicLinkItem {
                title: sanitize(&link.title),
                domain: sanitize(&display_domain(&link.url)),
                icon: icon_for(&link.url),
                is_selected: self.screen == Screen::Public && start + offset == self.public_cursor,
            })
            .collect();

        let admin = (self.screen == Screen::Admin).then(|| self.compute_admin_panel(rows));

        UIViewModel {
            palette: self.palette(),
            header: self.compute_header(),
            profile: self.compute_profile_card(),
            public_links,
            empty_state,
            admin,
            notification: self.notifier.current().map(|notification| NotificationView {
                message: sanitize(&notification.message),
                kind: notification.kind,
            }),
            confirm: self.confirm.as_ref().map(|confirm| sanitize(&confirm.prompt())),
            footer: self.compute_footer(),
        }
    }

    fn compute_profile_card(&self) -> ProfileCard {
        let profile = &self.store.document().profile;
        ProfileCard {
            name: sanitize(&profile.display_name()),
            bio: sanitize(&profile.display_bio()),
            image_url: sanitize(&profile.display_image_url()),
        }
    }

    fn compute_admin_panel(&self, rows: usize) -> AdminPanel {
        let focused = self.section;
        let selected = |section: AdminSection, row: usize| focused == section && self.row == row;
        let editing = |target: EditTarget| self.editor == Some(target);

        let tabs = AdminSection::ALL
            .iter()
            .map(|section| SectionTab {
                title: section.title(),
                is_focused: *section == focused,
            })
            .collect();

        let draft = &self.profile_draft;
        let profile_fields = ProfileRow::ALL
            .iter()
            .enumerate()
            .map(|(row, field)| {
                let value = match field {
                    ProfileRow::Name => Some(&draft.name),
                    ProfileRow::Bio => Some(&draft.bio),
                    ProfileRow::Image => Some(&draft.image_url),
                    ProfileRow::Save => None,
                };
                FieldRow {
                    label: field.label(),
                    value: value.map(|v| sanitize(v)),
                    is_selected: selected(AdminSection::Profile, row),
                    is_editing: editing(EditTarget::Profile(*field)),
                }
            })
            .collect();

        let new_link_fields = NewLinkRow::ALL
            .iter()
            .enumerate()
            .map(|(row, field)| {
                let value = match field {
                    NewLinkRow::Title => Some(&self.new_link_title),
                    NewLinkRow::Url => Some(&self.new_link_url),
                    NewLinkRow::Add => None,
                };
                FieldRow {
                    label: field.label(),
                    value: value.map(|v| sanitize(v)),
                    is_selected: selected(AdminSection::NewLink, row),
                    is_editing: editing(EditTarget::NewLink(*field)),
                }
            })
            .collect();

        let links = self.store.links();
        let available = rows.saturating_sub(ADMIN_CHROME_ROWS).max(1);
        let cursor = if focused == AdminSection::Links { self.row } else { 0 };
        let (start, end) = visible_window(cursor, links.len(), available);
        let drag_source = self.drag.source();
        let editable_links = links[start..end]
            .iter()
            .enumerate()
            .map(|(offset, link)| {
                let index = start + offset;
                let is_selected = selected(AdminSection::Links, index);
                let editing = match self.editor {
                    Some(EditTarget::Link { id, field }) if id == link.id => Some(field),
                    _ => None,
                };
                EditableLinkItem {
                    id: link.id,
                    position: index + 1,
                    title: sanitize(&link.title),
                    url: sanitize(&link.url),
                    is_selected,
                    is_dragging: drag_source == Some(link.id),
                    is_drop_target: drag_source.is_some() && is_selected,
                    editing,
                }
            })
            .collect();

        let current_theme = self.store.document().theme.as_str();
        let themes = self
            .catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(row, palette)| ThemeButton {
                tag: palette.name.clone(),
                label: palette.label.clone(),
                swatch: palette.colors.accent.clone(),
                is_active: palette.name == current_theme,
                is_selected: selected(AdminSection::Theme, row),
            })
            .collect();

        let backup_rows = BackupRow::ALL
            .iter()
            .enumerate()
            .map(|(row, field)| FieldRow {
                label: field.label(),
                value: match field {
                    BackupRow::Export => None,
                    BackupRow::ImportPath => Some(sanitize(&self.import_path)),
                },
                is_selected: selected(AdminSection::Backup, row),
                is_editing: editing(EditTarget::ImportPath) && *field == BackupRow::ImportPath,
            })
            .collect();

        AdminPanel {
            tabs,
            focused,
            profile_fields,
            new_link_fields,
            editable_links,
            themes,
            backup_rows,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.screen {
            Screen::Public => format!(" Links ({}) ", self.store.links().len()),
            Screen::Admin => " Admin panel ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.is_confirming() {
            "y: yes  n/ESC: no"
        } else if let Some(target) = self.editor {
            match target {
                EditTarget::Link { field: LinkField::Title, .. } => "Type to edit  Enter: url  ESC: done",
                EditTarget::Link { field: LinkField::Url, .. } => "Type to edit  Enter/ESC: done",
                EditTarget::ImportPath => "Type a file path  Enter: import  ESC: cancel",
                EditTarget::Profile(_) | EditTarget::NewLink(_) => "Type to edit  Enter: next  ESC: done  Ctrl+s: save",
            }
        } else {
            match (self.screen, self.section) {
                (Screen::Public, _) => "j/k: navigate  Enter: open  a: admin  q: quit",
                (Screen::Admin, _) if self.drag.is_dragging() => "j/k: choose place  Space/Enter: drop  ESC: cancel",
                (Screen::Admin, AdminSection::Links) => {
                    "j/k: navigate  Tab: section  Enter: edit  d: remove  Space: move  ESC: close"
                }
                (Screen::Admin, _) => "j/k: navigate  Tab: section  Enter: select  Ctrl+s: save  x: export  ESC: close",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Id of the link shown on `row` of the admin list.
    #[must_use]
    pub fn link_id_at(&self, row: usize) -> Option<LinkId> {
        self.store.links().get(row).map(|link| link.id)
    }
}

/// Window `[start, end)` of at most `available` items that keeps `selected`
/// near the middle and fills the window whenever the list is long enough.
fn visible_window(selected: usize, len: usize, available: usize) -> (usize, usize) {
    if len <= available {
        return (0, len);
    }

    let mut start = selected.saturating_sub(available / 2);
    let end = (start + available).min(len);
    if end - start < available {
        start = end.saturating_sub(available);
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeTag;
    use crate::storage::{MemoryStore, Persistence};

    fn state_with(titles: &[&str]) -> AppState {
        let mut store = StateStore::open(Persistence::new(MemoryStore::new()), false);
        for title in titles {
            store
                .add_link(title, &format!("https://{}.example", title.to_lowercase()))
                .unwrap();
        }
        AppState::new(store, ThemeCatalog::builtin())
    }

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_window(0, 3, 10), (0, 3));
        assert_eq!(visible_window(0, 20, 5), (0, 5));
        assert_eq!(visible_window(10, 20, 5), (8, 13));
        assert_eq!(visible_window(19, 20, 5), (15, 20));
    }

    #[test]
    fn empty_list_projects_empty_state() {
        let state = state_with(&[]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.public_links.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.admin.is_none());
    }

    #[test]
    fn blank_profile_fields_render_defaults() {
        let mut state = state_with(&["A"]);
        let blank = crate::domain::Profile::from_value(&serde_json::json!({}));
        state.store.replace_state(crate::domain::PartialDocument {
            profile: Some(blank),
            ..Default::default()
        });

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.profile.name, crate::domain::profile::DEFAULT_NAME);
        assert_eq!(vm.profile.bio, crate::domain::profile::DEFAULT_BIO);
        assert_eq!(state.store.document().profile.name, "");
    }

    #[test]
    fn control_characters_never_reach_the_view() {
        let mut state = state_with(&["A"]);
        let id = state.store.links()[0].id;
        state
            .store
            .update_link_field(id, LinkField::Title, "evil\u{1b}[2Jtitle")
            .unwrap();

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.public_links[0].title, "evil[2Jtitle");
    }

    #[test]
    fn exactly_one_theme_button_is_active_for_known_tags() {
        let mut state = state_with(&[]);
        state.open_admin();
        state.store.set_theme(ThemeTag::new("sunset"));

        let vm = state.compute_viewmodel(24, 80);
        let themes = vm.admin.unwrap().themes;
        let active: Vec<_> = themes.iter().filter(|t| t.is_active).map(|t| t.tag.as_str()).collect();
        assert_eq!(active, ["sunset"]);

        state.store.set_theme(ThemeTag::new("neon"));
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.admin.unwrap().themes.iter().all(|t| !t.is_active));
        assert_eq!(vm.palette.name, "default");
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state_with(&["A", "B", "C"]);
        state.move_up();
        assert_eq!(state.public_cursor, 2);
        state.move_down();
        assert_eq!(state.public_cursor, 0);

        state.open_admin();
        state.move_up();
        assert_eq!(state.row, ProfileRow::ALL.len() - 1);
    }

    #[test]
    fn clamp_keeps_cursors_in_range() {
        let mut state = state_with(&["A", "B", "C"]);
        state.public_cursor = 2;
        let id = state.store.links()[2].id;
        state.store.remove_link(id).unwrap();
        state.clamp_cursors();
        assert_eq!(state.public_cursor, 1);
    }
}
