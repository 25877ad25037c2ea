//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the
//! domain/storage layers.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → StateStore mutation → Actions → Side effects
//!                          ↑                                           ↓
//!                          └──────── file IO and timer results ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`drag`]: Drag-and-drop state machine for the admin link list
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen, admin section and editor types
//! - [`notify`]: Single-slot notifications with timed dismissal
//! - [`state`]: Central state container and view model computation
//! - [`store`]: Sole owner of the persisted document

pub mod actions;
pub mod drag;
pub mod handler;
pub mod modes;
pub mod notify;
pub mod state;
pub mod store;

pub use actions::Action;
pub use drag::DragState;
pub use handler::{handle_event, Event};
pub use modes::{AdminSection, EditTarget, Screen};
pub use notify::{Notification, NotificationKind, Notifier};
pub use state::AppState;
pub use store::{StateStore, WriteStatus};
