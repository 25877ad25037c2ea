//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the linkhub library and the Zellij plugin
//! system: it turns Zellij events into library [`Event`]s, runs
//! [`handle_event`], and carries out the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, open the document
//! 2. **Permissions**: `RunCommands` (open links), `FullHdAccess` (backups
//!    and the data directory)
//! 3. **Subscribe**: `Key`, `Timer`, `PermissionRequestResult`, `RunCommandResult`
//! 4. **Update**: Map events, delegate to the library, execute actions
//! 5. **Render**: Call the library render function
//!
//! # Side Effects
//!
//! File reads and writes for import and export happen here, synchronously,
//! and their outcome goes back into the library as a follow-up event
//! (`ImportFileLoaded`, `ExportWritten`, ...) within the same update.
//!
//! # Keybindings
//!
//! Public page:
//! - `j`/`Down`, `k`/`Up`: Move between links
//! - `Enter`: Open the selected link
//! - `a`/`e`: Open the admin panel
//! - `q`/`Esc`: Close the plugin pane
//!
//! Admin panel:
//! - `j`/`k`/arrows: Move between rows
//! - `Tab`/`Shift+Tab`: Next/previous section
//! - `Enter`: Edit, add, select theme, export or import depending on the row
//! - `d`: Remove the selected link (asks first)
//! - `Space`: Pick up / drop the selected link
//! - `x`: Export a backup
//! - `Ctrl+s`: Save the profile
//! - `Esc`: Leave the editor, cancel the drag, or close the panel
//!
//! While a field is being edited every printable key is text; arrows, `Enter`,
//! `Esc` and `Backspace` keep their meaning.

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(not(target_family = "wasm"), allow(dead_code, unused_imports))]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use linkhub::app::{AdminSection, Screen};
use linkhub::infrastructure::{read_import_file, write_export_file};
use linkhub::{handle_event, Action, Config, Event};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("linkhub is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

/// Plugin state wrapper.
struct State {
    app: linkhub::AppState,
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        let (app, _) = linkhub::initialize(&config);
        Self { app, config }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration).unwrap_or_else(|e| {
            eprintln!("linkhub: {e}; using default configuration");
            Config::default()
        });
        if let Err(e) = linkhub::observability::init_tracing(&config) {
            eprintln!("linkhub: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        let (app, actions) = linkhub::initialize(&config);
        self.app = app;
        self.config = config;

        request_permission(&[PermissionType::RunCommands, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
            EventType::RunCommandResult,
        ]);

        for action in &actions {
            if let Some(event) = self.execute_action(action) {
                self.dispatch(event);
            }
        }
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::Timer,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, _context) => {
                if exit_code != Some(0) {
                    tracing::warn!(
                        exit_code = ?exit_code,
                        stderr = %String::from_utf8_lossy(&stderr),
                        opener = %self.config.opener,
                        "link opener failed"
                    );
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        linkhub::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` and every follow-up event its actions produce.
    fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);
        let mut should_render = false;

        while let Some(event) = queue.pop_front() {
            match handle_event(&mut self.app, &event) {
                Ok((render, actions)) => {
                    tracing::debug!(action_count = actions.len(), render, "event handled");
                    should_render |= render;
                    for action in &actions {
                        queue.extend(self.execute_action(action));
                    }
                }
                Err(e) => tracing::error!(error = %e, "error handling event"),
            }
        }
        should_render
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current context.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if self.app.is_confirming() {
            return match key.bare_key {
                BareKey::Char('y' | 'Y') => Some(Event::ConfirmAnswer(true)),
                BareKey::Char('n' | 'N') => Some(Event::ConfirmAnswer(false)),
                BareKey::Esc => Some(Event::Escape),
                _ => None,
            };
        }

        if ctrl && key.bare_key == BareKey::Char('s') {
            return Some(Event::SaveProfile);
        }
        if key.bare_key == BareKey::Tab {
            return Some(if key.has_modifiers(&[KeyModifier::Shift]) {
                Event::PreviousSection
            } else {
                Event::NextSection
            });
        }

        if self.app.is_typing() {
            return Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::Activate,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            });
        }

        Some(match (self.app.screen, key.bare_key) {
            (_, BareKey::Down | BareKey::Char('j')) => Event::KeyDown,
            (_, BareKey::Up | BareKey::Char('k')) => Event::KeyUp,
            (_, BareKey::Enter) => Event::Activate,

            (Screen::Public, BareKey::Char('a' | 'e')) => Event::OpenAdmin,
            (Screen::Public, BareKey::Char('q') | BareKey::Esc) => Event::CloseFocus,

            (Screen::Admin, BareKey::Esc) => Event::Escape,
            (Screen::Admin, BareKey::Char('x')) => Event::Export,
            (Screen::Admin, BareKey::Char('d') | BareKey::Delete) if self.app.section == AdminSection::Links => {
                Event::RemoveSelected
            }
            (Screen::Admin, BareKey::Char(' ')) if self.app.section == AdminSection::Links => Event::ToggleDrag,
            _ => return None,
        })
    }

    /// Carries out `action`, returning the event that reports its outcome.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) -> Option<Event> {
        match action {
            Action::CloseFocus => {
                hide_self();
                None
            }
            Action::OpenUrl { url } => {
                tracing::info!(url = %url, opener = %self.config.opener, "opening link");
                run_command(&[self.config.opener.as_str(), url.as_str()], BTreeMap::new());
                None
            }
            Action::ReadImportFile { path } => Some(match read_import_file(path) {
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
                Some(match write_export_file(&self.config.export_dir, file_name, bytes) {
                    Ok(path) => Event::ExportWritten { path },
                    Err(e) => Event::ExportFailed { error: e.to_string() },
                })
            }
            Action::ScheduleDismiss { seconds } => {
                set_timeout(*seconds);
                None
            }
        }
    }
}
