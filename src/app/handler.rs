//! Event handling and state transition logic.
//!
//! The plugin runtime turns key presses, timers and file IO results into
//! [`Event`]s and feeds them to [`handle_event`]. The handler mutates the
//! [`AppState`], persists through the state store, and returns whether a
//! re-render is needed together with the [`Action`]s the runtime must carry
//! out.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextSection`, `PreviousSection`
//! - **Editing**: `Activate`, `Char`, `Backspace`, `Escape`, `SaveProfile`
//! - **Link list**: `RemoveSelected`, `ConfirmAnswer`, `ToggleDrag`
//! - **Backup**: `Export`, `ImportFileLoaded`, `ImportFileFailed`,
//!   `ExportWritten`, `ExportFailed`
//! - **System**: `OpenAdmin`, `CloseFocus`, `Timer`, `PermissionsResult`
//!
//! Stale references (a link removed between selection and use) are logged and
//! swallowed. Persistence failures surface as error notifications while the
//! in-memory change stands.

use super::drag::DragStep;
use super::modes::{AdminSection, BackupRow, Confirm, EditTarget, NewLinkRow, ProfileRow, Screen};
use super::notify::NotificationKind;
use super::store::WriteStatus;
use crate::app::{Action, AppState};
use crate::codec;
use crate::domain::error::{ImportError, LinkHubError, Result, ValidationError};
use crate::domain::{LinkField, ThemeTag};
use crate::infrastructure::paths::{expand_tilde, strip_host_prefix};
use std::path::PathBuf;

/// Events triggered by user input or by completed runtime side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Focuses the next admin section.
    NextSection,
    /// Focuses the previous admin section.
    PreviousSection,
    /// Enter: open, edit, advance or submit depending on the row.
    Activate,
    /// Closes an editor, a drag, a prompt or the admin panel, innermost first.
    Escape,
    /// Typed character for the open editor.
    Char(char),
    /// Removes the last character of the open editor.
    Backspace,

    /// Opens the admin panel.
    OpenAdmin,
    /// Hides the plugin pane.
    CloseFocus,
    /// Applies the profile form, from anywhere in the admin panel.
    SaveProfile,
    /// Asks whether to remove the link under the cursor.
    RemoveSelected,
    /// Answer to the pending confirmation.
    ConfirmAnswer(bool),
    /// Grabs the link under the cursor, or drops the grabbed one here.
    ToggleDrag,
    /// Exports a backup of the current document.
    Export,

    /// A notification dismissal timer elapsed.
    Timer,

    /// The runtime read the requested backup file.
    ImportFileLoaded {
        path: PathBuf,
        bytes: Vec<u8>,
    },
    /// The runtime could not read the requested backup file.
    ImportFileFailed {
        path: PathBuf,
        error: String,
    },
    /// The runtime wrote the exported backup.
    ExportWritten {
        path: PathBuf,
    },
    /// The runtime could not write the exported backup.
    ExportFailed {
        error: String,
    },

    /// Reports whether the requested Zellij permissions were granted.
    PermissionsResult {
        granted: bool,
    },
}

const SAVE_FAILED: &str = "Could not save data";

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the runtime.
///
/// # Errors
///
/// Returns errors that cannot be recovered locally. Every error the handler
/// knows about is turned into a notification or a log line instead, so in
/// practice this only propagates programming errors.
///
/// # Example
///
/// ```rust
/// use linkhub::app::{handle_event, AppState, Event, StateStore};
/// use linkhub::storage::{MemoryStore, Persistence};
/// use linkhub::ui::theme::ThemeCatalog;
///
/// let store = StateStore::open(Persistence::new(MemoryStore::new()), true);
/// let mut state = AppState::new(store, ThemeCatalog::builtin());
/// let (render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
/// assert!(render);
/// assert_eq!(state.public_cursor, 1);
/// # Ok::<(), linkhub::LinkHubError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.is_confirming() {
        return Ok(handle_confirming(state, event));
    }

    match event {
        Event::KeyDown | Event::KeyUp => {
            let actions = blur_editor(state);
            if matches!(event, Event::KeyDown) {
                state.move_down();
            } else {
                state.move_up();
            }
            Ok((true, actions))
        }
        Event::NextSection | Event::PreviousSection => {
            if state.screen != Screen::Admin {
                return Ok((false, vec![]));
            }
            let actions = blur_editor(state);
            state.drag.cancel();
            let section = if matches!(event, Event::NextSection) {
                state.section.next()
            } else {
                state.section.previous()
            };
            state.focus_section(section);
            Ok((true, actions))
        }
        Event::Activate => Ok(activate(state)),
        Event::Escape => Ok(escape(state)),
        Event::Char(c) => Ok((edit_text(state, |text| text.push(*c)), vec![])),
        Event::Backspace => Ok((
            edit_text(state, |text| {
                text.pop();
            }),
            vec![],
        )),

        Event::OpenAdmin => {
            if state.screen == Screen::Admin {
                return Ok((false, vec![]));
            }
            state.open_admin();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SaveProfile => {
            if state.screen != Screen::Admin {
                return Ok((false, vec![]));
            }
            let mut actions = blur_editor(state);
            actions.extend(save_changes(state));
            Ok((true, actions))
        }
        Event::RemoveSelected => {
            if state.screen != Screen::Admin || state.drag.is_dragging() {
                return Ok((false, vec![]));
            }
            let Some(link) = state.selected_admin_link() else {
                tracing::debug!("no link selected for removal");
                return Ok((false, vec![]));
            };
            let confirm = Confirm::RemoveLink {
                id: link.id,
                title: link.title.clone(),
            };
            state.confirm = Some(confirm);
            Ok((true, vec![]))
        }
        Event::ConfirmAnswer(_) => {
            tracing::debug!("answer without a pending question");
            Ok((false, vec![]))
        }
        Event::ToggleDrag => Ok(toggle_drag(state)),
        Event::Export => {
            if state.screen != Screen::Admin {
                return Ok((false, vec![]));
            }
            Ok((true, export(state)))
        }

        Event::Timer => Ok((state.notifier.on_timer(), vec![])),

        Event::ImportFileLoaded { path, bytes } => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "import file loaded");
            Ok((true, import(state, bytes)))
        }
        Event::ImportFileFailed { path, error } => {
            tracing::error!(path = %path.display(), error = %error, "failed to read import file");
            let action = state.notify("Could not import data", NotificationKind::Error);
            Ok((true, vec![action]))
        }
        Event::ExportWritten { path } => {
            tracing::info!(path = %path.display(), "backup exported");
            let action = state.notify(
                format!("Data exported to {}", strip_host_prefix(&path.to_string_lossy())),
                NotificationKind::Success,
            );
            Ok((true, vec![action]))
        }
        Event::ExportFailed { error } => {
            tracing::error!(error = %error, "failed to write export file");
            let action = state.notify("Could not export data", NotificationKind::Error);
            Ok((true, vec![action]))
        }

        Event::PermissionsResult { granted } => {
            tracing::info!(granted, "permissions result");
            if *granted {
                Ok((true, vec![]))
            } else {
                let action = state.notify(
                    "Permissions denied: links cannot be opened",
                    NotificationKind::Info,
                );
                Ok((true, vec![action]))
            }
        }
    }
}

/// Only the answer (or an escape) gets through while a question is pending.
fn handle_confirming(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let answer = match event {
        Event::ConfirmAnswer(yes) => *yes,
        Event::Escape => false,
        Event::Timer => return (state.notifier.on_timer(), vec![]),
        _ => return (false, vec![]),
    };

    let Some(Confirm::RemoveLink { id, .. }) = state.confirm.take() else {
        return (true, vec![]);
    };
    if !answer {
        tracing::debug!(link_id = %id, "removal declined");
        return (true, vec![]);
    }

    match state.store.remove_link(id) {
        Ok((_, status)) => {
            state.clamp_cursors();
            (true, report_write(state, &status, Some("Link removed successfully!")))
        }
        Err(e) => {
            log_recovered(&e);
            (true, vec![])
        }
    }
}

fn activate(state: &mut AppState) -> (bool, Vec<Action>) {
    match state.screen {
        Screen::Public => {
            let Some(link) = state.selected_public_link() else {
                return (false, vec![]);
            };
            if link.url.trim().is_empty() {
                tracing::debug!(link_id = %link.id, "selected link has no url");
                return (false, vec![]);
            }
            (false, vec![Action::OpenUrl { url: link.url.clone() }])
        }
        Screen::Admin => match state.editor {
            Some(target) => (true, submit_editor(state, target)),
            None => (true, activate_row(state)),
        },
    }
}

/// Enter while a field editor is open.
fn submit_editor(state: &mut AppState, target: EditTarget) -> Vec<Action> {
    match target {
        EditTarget::Profile(_) => {
            state.editor = None;
            state.move_down();
            vec![]
        }
        EditTarget::NewLink(NewLinkRow::Title) => {
            state.editor = Some(EditTarget::NewLink(NewLinkRow::Url));
            state.row = 1;
            vec![]
        }
        EditTarget::NewLink(_) => {
            state.editor = None;
            add_link(state)
        }
        EditTarget::Link { id, field: LinkField::Title } => {
            let actions = blur_editor(state);
            state.editor = Some(EditTarget::Link { id, field: LinkField::Url });
            actions
        }
        EditTarget::Link { .. } => blur_editor(state),
        EditTarget::ImportPath => {
            state.editor = None;
            request_import(state)
        }
    }
}

/// Enter on a row with no editor open.
fn activate_row(state: &mut AppState) -> Vec<Action> {
    if state.drag.is_dragging() {
        return toggle_drag(state).1;
    }

    match state.section {
        AdminSection::Profile => match state.profile_row() {
            Some(ProfileRow::Save) => save_changes(state),
            Some(field) => {
                state.editor = Some(EditTarget::Profile(field));
                vec![]
            }
            None => vec![],
        },
        AdminSection::NewLink => match state.new_link_row() {
            Some(NewLinkRow::Add) => add_link(state),
            Some(field) => {
                state.editor = Some(EditTarget::NewLink(field));
                vec![]
            }
            None => vec![],
        },
        AdminSection::Links => {
            if let Some(id) = state.selected_admin_link().map(|link| link.id) {
                state.editor = Some(EditTarget::Link {
                    id,
                    field: LinkField::Title,
                });
            }
            vec![]
        }
        AdminSection::Theme => {
            let Some(palette) = state.catalog.get(state.row) else {
                return vec![];
            };
            let status = state.store.set_theme(ThemeTag::new(palette.name.clone()));
            report_write(state, &status, None)
        }
        AdminSection::Backup => match state.backup_row() {
            Some(BackupRow::Export) => export(state),
            Some(BackupRow::ImportPath) => {
                state.editor = Some(EditTarget::ImportPath);
                vec![]
            }
            None => vec![],
        },
    }
}

fn escape(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.editor.is_some() {
        return (true, blur_editor(state));
    }
    if state.drag.cancel() {
        tracing::debug!("drag cancelled");
        return (true, vec![]);
    }
    if state.screen == Screen::Admin {
        state.close_admin();
        return (true, vec![]);
    }
    (false, vec![])
}

/// Leaves the open editor. In-place link edits are persisted here.
fn blur_editor(state: &mut AppState) -> Vec<Action> {
    let Some(target) = state.editor.take() else {
        return vec![];
    };

    match target {
        EditTarget::Link { id, field } => {
            tracing::debug!(link_id = %id, field = %field, "link field editor left");
            let status = state.store.commit();
            report_write(state, &status, None)
        }
        _ => vec![],
    }
}

/// Applies `edit` to the open editor's text. Returns whether anything changed.
fn edit_text(state: &mut AppState, edit: impl FnOnce(&mut String)) -> bool {
    let Some(target) = state.editor else {
        return false;
    };

    if let EditTarget::Link { id, field } = target {
        let Some(link) = state.store.document().link(id) else {
            tracing::debug!(link_id = %id, "edited link no longer exists");
            state.editor = None;
            return true;
        };
        let mut value = link.get(field).to_string();
        edit(&mut value);
        if let Err(e) = state.store.update_link_field(id, field, &value) {
            log_recovered(&e);
        }
        return true;
    }

    match state.buffer_mut(target) {
        Some(buffer) => {
            edit(buffer);
            true
        }
        None => false,
    }
}

/// "Save changes": apply the profile form, confirm and close the panel.
fn save_changes(state: &mut AppState) -> Vec<Action> {
    let status = state.store.update_profile(&state.profile_draft.clone());
    let actions = report_write(state, &status, Some("Changes saved successfully!"));
    if !status.is_failed() {
        state.close_admin();
    }
    actions
}

fn add_link(state: &mut AppState) -> Vec<Action> {
    let title = state.new_link_title.clone();
    let url = state.new_link_url.clone();

    match state.store.add_link(&title, &url) {
        Ok((id, status)) => {
            tracing::debug!(link_id = %id, "link added from form");
            state.new_link_title.clear();
            state.new_link_url.clear();
            state.row = 0;
            report_write(state, &status, Some("Link added successfully!"))
        }
        Err(LinkHubError::Validation(e)) => {
            let message = match e {
                ValidationError::MissingField => "Please fill in title and URL",
                ValidationError::MalformedUrl => "Please enter a valid URL",
            };
            vec![state.notify(message, NotificationKind::Error)]
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to add link");
            vec![state.notify(SAVE_FAILED, NotificationKind::Error)]
        }
    }
}

fn toggle_drag(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.screen != Screen::Admin || state.section != AdminSection::Links {
        return (false, vec![]);
    }

    let row = state.row;
    let row_link = state.link_id_at(row);
    match state.drag.toggle(row, row_link) {
        None => (false, vec![]),
        Some(DragStep::Grabbed(id)) => {
            tracing::debug!(link_id = %id, row, "link grabbed");
            (true, vec![])
        }
        Some(DragStep::Dropped { source, target }) => match state.store.reorder_link_by_id(source, target) {
            Ok(status) => {
                if let Some(position) = state.store.document().position_of(source) {
                    state.row = position;
                }
                (true, report_write(state, &status, None))
            }
            Err(e) => {
                log_recovered(&e);
                (true, vec![])
            }
        },
    }
}

fn export(state: &mut AppState) -> Vec<Action> {
    match codec::export_document(state.store.document()) {
        Ok(bytes) => vec![Action::WriteExportFile {
            file_name: codec::export_file_name_now(),
            bytes,
        }],
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize backup");
            vec![state.notify("Could not export data", NotificationKind::Error)]
        }
    }
}

fn request_import(state: &mut AppState) -> Vec<Action> {
    let path = state.import_path.trim();
    if path.is_empty() {
        return vec![state.notify("Enter the path of a backup file", NotificationKind::Info)];
    }
    vec![Action::ReadImportFile {
        path: expand_tilde(path),
    }]
}

fn import(state: &mut AppState, bytes: &[u8]) -> Vec<Action> {
    match codec::import_document(bytes) {
        Ok(partial) => {
            let status = state.store.replace_state(partial);
            state.editor = None;
            state.drag.cancel();
            state.profile_draft = crate::domain::ProfileDraft::from_profile(&state.store.document().profile);
            state.import_path.clear();
            state.clamp_cursors();
            report_write(state, &status, Some("Data imported successfully!"))
        }
        Err(e) => {
            tracing::warn!(error = %e, "backup rejected");
            vec![state.notify(import_message(&e), NotificationKind::Error)]
        }
    }
}

const fn import_message(error: &ImportError) -> &'static str {
    match error {
        ImportError::MalformedSyntax(_) => "Could not import data",
        ImportError::InvalidShape => "Invalid backup file",
    }
}

/// Turns a write outcome into the notification the user sees.
fn report_write(state: &mut AppState, status: &WriteStatus, success: Option<&str>) -> Vec<Action> {
    match (status, success) {
        (WriteStatus::Failed(reason), _) => {
            tracing::warn!(reason = %reason, "change kept in memory only");
            vec![state.notify(SAVE_FAILED, NotificationKind::Error)]
        }
        (_, Some(message)) => vec![state.notify(message, NotificationKind::Success)],
        (_, None) => vec![],
    }
}

fn log_recovered(error: &LinkHubError) {
    if error.is_stale_reference() {
        tracing::debug!(error = %error, "stale link reference ignored");
    } else {
        tracing::error!(error = %error, "operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StateStore;
    use crate::storage::{MemoryStore, Persistence};
    use crate::ui::theme::ThemeCatalog;

    const DEFAULT_NAME_LEN: usize = crate::domain::profile::DEFAULT_NAME.len();

    fn state_with(titles: &[&str]) -> AppState {
        let mut store = StateStore::open(Persistence::new(MemoryStore::new()), false);
        for title in titles {
            store
                .add_link(title, &format!("https://{}.example", title.to_lowercase()))
                .unwrap();
        }
        AppState::new(store, ThemeCatalog::builtin())
    }

    fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|event| handle_event(state, event).unwrap().1)
            .collect()
    }

    fn type_text(text: &str) -> Vec<Event> {
        text.chars().map(Event::Char).collect()
    }

    fn titles(state: &AppState) -> Vec<String> {
        state.store.links().iter().map(|link| link.title.clone()).collect()
    }

    #[test]
    fn enter_on_public_link_opens_it() {
        let mut state = state_with(&["A", "B"]);
        let actions = send(&mut state, &[Event::KeyDown, Event::Activate]);
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                url: "https://b.example".into()
            }]
        );
    }

    #[test]
    fn notifications_schedule_their_dismissal() {
        let mut state = state_with(&[]);
        state.new_link_title = "Blog".into();
        state.new_link_url = "nope".into();
        state.open_admin();
        state.focus_section(AdminSection::NewLink);
        state.row = 2;

        let actions = send(&mut state, &[Event::Activate]);
        assert_eq!(actions, vec![Action::ScheduleDismiss { seconds: 3.0 }]);
        assert_eq!(state.notifier.current().unwrap().message, "Please enter a valid URL");
        assert_eq!(state.new_link_url, "nope");

        send(&mut state, &[Event::Timer]);
        assert!(state.notifier.current().is_none());
    }

    #[test]
    fn typing_into_a_link_field_persists_only_on_blur() {
        let mut state = state_with(&["A"]);
        state.open_admin();
        state.focus_section(AdminSection::Links);

        send(&mut state, &[Event::Activate, Event::Backspace]);
        send(&mut state, &type_text("Alpha"));
        assert_eq!(state.store.links()[0].title, "Alpha");
        assert_eq!(state.editor.map(|e| matches!(e, EditTarget::Link { field: LinkField::Title, .. })), Some(true));

        send(&mut state, &[Event::Activate]);
        assert!(matches!(state.editor, Some(EditTarget::Link { field: LinkField::Url, .. })));
        send(&mut state, &[Event::Escape]);
        assert!(state.editor.is_none());
        assert_eq!(state.screen, Screen::Admin);
    }

    #[test]
    fn removal_needs_a_yes() {
        let mut state = state_with(&["A", "B"]);
        state.open_admin();
        state.focus_section(AdminSection::Links);

        send(&mut state, &[Event::RemoveSelected, Event::KeyDown, Event::ConfirmAnswer(false)]);
        assert_eq!(titles(&state), ["A", "B"]);
        assert_eq!(state.row, 0);

        let actions = send(&mut state, &[Event::RemoveSelected, Event::ConfirmAnswer(true)]);
        assert_eq!(titles(&state), ["B"]);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.notifier.current().unwrap().kind, NotificationKind::Success);
    }

    #[test]
    fn drag_and_drop_reorders_by_identity() {
        let mut state = state_with(&["A", "B", "C"]);
        state.open_admin();
        state.focus_section(AdminSection::Links);

        send(&mut state, &[Event::ToggleDrag, Event::KeyDown, Event::KeyDown, Event::ToggleDrag]);
        assert_eq!(titles(&state), ["B", "C", "A"]);
        assert_eq!(state.row, 2);
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn escape_unwinds_innermost_first() {
        let mut state = state_with(&["A"]);
        state.open_admin();
        state.focus_section(AdminSection::Links);
        send(&mut state, &[Event::ToggleDrag]);

        send(&mut state, &[Event::Escape]);
        assert!(!state.drag.is_dragging());
        assert_eq!(state.screen, Screen::Admin);

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.screen, Screen::Public);
    }

    #[test]
    fn save_profile_applies_defaults_and_closes() {
        let mut state = state_with(&[]);
        send(&mut state, &[Event::OpenAdmin, Event::Activate]);
        for _ in 0..DEFAULT_NAME_LEN {
            send(&mut state, &[Event::Backspace]);
        }
        send(&mut state, &type_text("Ada"));
        send(&mut state, &[Event::SaveProfile]);

        assert_eq!(state.store.document().profile.name, "Ada");
        assert_eq!(state.screen, Screen::Public);
        assert_eq!(state.notifier.current().unwrap().message, "Changes saved successfully!");
    }

    #[test]
    fn import_failures_are_reported_without_change() {
        let mut state = state_with(&["A"]);
        send(
            &mut state,
            &[Event::ImportFileLoaded {
                path: "backup.json".into(),
                bytes: b"{}".to_vec(),
            }],
        );
        assert_eq!(state.notifier.current().unwrap().message, "Invalid backup file");

        send(
            &mut state,
            &[Event::ImportFileLoaded {
                path: "backup.json".into(),
                bytes: b"{oops".to_vec(),
            }],
        );
        assert_eq!(state.notifier.current().unwrap().message, "Could not import data");
        assert_eq!(titles(&state), ["A"]);
    }

    #[test]
    fn import_path_is_expanded_and_requested() {
        let mut state = state_with(&[]);
        state.open_admin();
        state.focus_section(AdminSection::Backup);
        state.row = 1;

        send(&mut state, &[Event::Activate]);
        send(&mut state, &type_text("/tmp/b.json"));
        let actions = send(&mut state, &[Event::Activate]);
        assert_eq!(
            actions,
            vec![Action::ReadImportFile {
                path: PathBuf::from("/tmp/b.json")
            }]
        );
    }

    #[test]
    fn export_emits_a_dated_write() {
        let mut state = state_with(&["A"]);
        state.open_admin();
        let actions = send(&mut state, &[Event::Export]);
        let [Action::WriteExportFile { file_name, bytes }] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert!(file_name.starts_with("linktree-backup-"));
        assert!(String::from_utf8_lossy(bytes).contains("\"title\": \"A\""));
    }
}
