//! Terminal rendering of the public page and the admin panel.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Page sections (profile card, link list, admin sections)
//! - [`helpers`]: Cursor positioning, sanitizing and truncation
//! - [`icons`]: Well-known site badges
//! - [`theme`]: Palettes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod icons;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Palette, ThemeCatalog};
pub use viewmodel::UIViewModel;
