//! Whole interaction flows driven through `handle_event`, the way the plugin
//! shell drives them.

use linkhub::app::{AdminSection, AppState, Screen, StateStore};
use linkhub::infrastructure::{read_import_file, write_export_file};
use linkhub::storage::{FileStore, MemoryStore, Persistence};
use linkhub::ui::ThemeCatalog;
use linkhub::{handle_event, Action, Event};
use std::path::Path;
use tempfile::TempDir;

fn file_state(dir: &Path) -> AppState {
    let store = StateStore::open(Persistence::new(FileStore::new(dir).unwrap()), false);
    AppState::new(store, ThemeCatalog::builtin())
}

fn memory_state() -> AppState {
    let store = StateStore::open(Persistence::new(MemoryStore::new()), false);
    AppState::new(store, ThemeCatalog::builtin())
}

/// Sends every event, carrying out file actions like the plugin shell does.
fn drive(state: &mut AppState, export_dir: &Path, events: Vec<Event>) -> Vec<Action> {
    let mut queue: std::collections::VecDeque<Event> = events.into();
    let mut actions = Vec::new();

    while let Some(event) = queue.pop_front() {
        let (_, produced) = handle_event(state, &event).unwrap();
        for action in produced {
            match &action {
                Action::ReadImportFile { path } => queue.push_back(match read_import_file(path) {
                    Ok(bytes) => Event::ImportFileLoaded {
                        path: path.clone(),
                        bytes,
                    },
                    Err(e) => Event::ImportFileFailed {
                        path: path.clone(),
                        error: e.to_string(),
                    },
                }),
                Action::WriteExportFile { file_name, bytes } => {
                    let path = write_export_file(export_dir, file_name, bytes).unwrap();
                    queue.push_back(Event::ExportWritten { path });
                }
                _ => {}
            }
            actions.push(action);
        }
    }
    actions
}

fn typed(text: &str) -> impl Iterator<Item = Event> + '_ {
    text.chars().map(Event::Char)
}

fn add_link_events(title: &str, url: &str) -> Vec<Event> {
    let mut events = vec![Event::Activate];
    events.extend(typed(title));
    events.push(Event::Activate);
    events.extend(typed(url));
    events.push(Event::Activate);
    events
}

fn titles(state: &AppState) -> Vec<String> {
    state.store.links().iter().map(|link| link.title.clone()).collect()
}

fn message(state: &AppState) -> Option<String> {
    state.notifier.current().map(|n| n.message.clone())
}

#[test]
fn add_and_reorder_links_then_reload() {
    let temp = TempDir::new().unwrap();
    let mut state = file_state(temp.path());

    let mut events = vec![Event::OpenAdmin, Event::NextSection];
    events.extend(add_link_events("Blog", "https://blog.example"));
    events.extend(add_link_events("Shop", "https://shop.example"));
    drive(&mut state, temp.path(), events);

    assert_eq!(titles(&state), ["Blog", "Shop"]);
    assert_eq!(message(&state).as_deref(), Some("Link added successfully!"));

    drive(
        &mut state,
        temp.path(),
        vec![Event::NextSection, Event::ToggleDrag, Event::KeyDown, Event::ToggleDrag],
    );
    assert_eq!(state.section, AdminSection::Links);
    assert!(!state.drag.is_dragging());
    assert_eq!(titles(&state), ["Shop", "Blog"]);

    let reloaded = file_state(temp.path());
    assert_eq!(titles(&reloaded), ["Shop", "Blog"]);
}

#[test]
fn invalid_url_keeps_the_form() {
    let temp = TempDir::new().unwrap();
    let mut state = memory_state();

    let mut events = vec![Event::OpenAdmin, Event::NextSection];
    events.extend(add_link_events("Blog", "blog.example"));
    let actions = drive(&mut state, temp.path(), events);

    assert!(state.store.links().is_empty());
    assert_eq!(message(&state).as_deref(), Some("Please enter a valid URL"));
    assert_eq!(state.new_link_title, "Blog");
    assert!(actions.contains(&Action::ScheduleDismiss { seconds: 3.0 }));

    drive(&mut state, temp.path(), vec![Event::Timer]);
    assert!(state.notifier.current().is_none());
}

#[test]
fn removal_waits_for_confirmation() {
    let temp = TempDir::new().unwrap();
    let mut state = memory_state();
    state.store.add_link("Blog", "https://blog.example").unwrap();
    state.store.add_link("Shop", "https://shop.example").unwrap();

    let to_links = vec![Event::OpenAdmin, Event::NextSection, Event::NextSection];
    drive(&mut state, temp.path(), to_links);

    drive(&mut state, temp.path(), vec![Event::RemoveSelected, Event::KeyDown, Event::ConfirmAnswer(false)]);
    assert_eq!(titles(&state), ["Blog", "Shop"]);
    assert_eq!(state.row, 0);

    drive(&mut state, temp.path(), vec![Event::RemoveSelected, Event::ConfirmAnswer(true)]);
    assert_eq!(titles(&state), ["Shop"]);
    assert_eq!(message(&state).as_deref(), Some("Link removed successfully!"));
}

#[test]
fn export_then_import_into_another_page() {
    let temp = TempDir::new().unwrap();
    let mut source = memory_state();
    source.store.add_link("Blog", "https://blog.example").unwrap();

    drive(&mut source, temp.path(), vec![Event::OpenAdmin, Event::Export]);
    let exported = message(&source).unwrap();
    assert!(exported.starts_with("Data exported to "), "{exported}");
    let backup = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|path| path.to_string_lossy().contains("linktree-backup-"))
        .unwrap();

    let mut target = memory_state();
    let mut events = vec![Event::OpenAdmin, Event::PreviousSection, Event::KeyDown, Event::Activate];
    events.extend(typed(&backup.to_string_lossy()));
    events.push(Event::Activate);
    drive(&mut target, temp.path(), events);

    assert_eq!(target.section, AdminSection::Backup);
    assert_eq!(titles(&target), ["Blog"]);
    assert_eq!(message(&target).as_deref(), Some("Data imported successfully!"));
}

#[test]
fn importing_a_missing_file_reports_an_error() {
    let temp = TempDir::new().unwrap();
    let mut state = memory_state();
    state.store.add_link("Blog", "https://blog.example").unwrap();

    let mut events = vec![Event::OpenAdmin, Event::PreviousSection, Event::KeyDown, Event::Activate];
    events.extend(typed(&temp.path().join("absent.json").to_string_lossy()));
    events.push(Event::Activate);
    drive(&mut state, temp.path(), events);

    assert_eq!(titles(&state), ["Blog"]);
    assert_eq!(message(&state).as_deref(), Some("Could not import data"));
}

#[test]
fn choosing_a_theme_changes_the_palette() {
    let temp = TempDir::new().unwrap();
    let mut state = memory_state();

    drive(
        &mut state,
        temp.path(),
        vec![
            Event::OpenAdmin,
            Event::PreviousSection,
            Event::PreviousSection,
            Event::KeyDown,
            Event::Activate,
        ],
    );

    assert_eq!(state.section, AdminSection::Theme);
    assert_eq!(state.store.document().theme.as_str(), "dark");
    assert_eq!(state.palette().name, "dark");
}

#[test]
fn enter_on_the_public_page_opens_the_link() {
    let temp = TempDir::new().unwrap();
    let mut state = memory_state();
    state.store.add_link("Blog", "https://blog.example").unwrap();

    let actions = drive(&mut state, temp.path(), vec![Event::Activate]);

    assert_eq!(state.screen, Screen::Public);
    assert_eq!(
        actions,
        vec![Action::OpenUrl {
            url: "https://blog.example".to_string()
        }]
    );
}
