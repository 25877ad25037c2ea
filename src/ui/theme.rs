//! Palettes for the selectable page themes and ANSI escape generation.
//!
//! Every theme tag the admin panel offers has a palette in `themes/*.toml`,
//! compiled into the plugin. Tags without a palette (for example one carried in
//! by an imported backup) render with the `default` palette.
//!
//! # TOML Format
//!
//! ```toml
//! name = "ocean"
//! label = "Ocean"
//!
//! [colors]
//! header_fg = "#f0f9ff"
//! header_bg = "#0369a1"
//! accent = "#0ea5e9"
//! selection_fg = "#082f49"
//! selection_bg = "#7dd3fc"
//! text_normal = "#e0f2fe"
//! text_dim = "#7dd3fc"
//! border = "#0c4a6e"
//! success = "#2dd4bf"
//! error = "#fb7185"
//! info = "#38bdf8"
//! empty_state_fg = "#38bdf8"
//! ```

use crate::domain::error::{LinkHubError, Result};
use crate::domain::DEFAULT_THEME;
use serde::{Deserialize, Serialize};

/// Tags of the built-in themes, in the order their buttons are shown.
pub const BUILTIN_THEMES: [&str; 5] = ["default", "dark", "ocean", "sunset", "forest"];

/// A named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    /// Theme tag this palette belongs to.
    pub name: String,
    /// Text on the theme button.
    pub label: String,
    pub colors: PaletteColors,
}

/// Hex colors (`#rrggbb`) used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Badges, focused tabs and the theme swatch.
    pub accent: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub success: String,
    pub error: String,
    pub info: String,

    pub empty_state_fg: String,
}

impl Palette {
    /// Parses a palette from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`LinkHubError::Theme`] if the document does not match the format.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LinkHubError::Theme(format!("failed to parse palette: {e}")))
    }

    /// Built-in palette for `tag`, or `None` for tags without one.
    #[must_use]
    pub fn builtin(tag: &str) -> Option<Self> {
        let source = match tag {
            "default" => include_str!("../../themes/default.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            "ocean" => include_str!("../../themes/ocean.toml"),
            "sunset" => include_str!("../../themes/sunset.toml"),
            "forest" => include_str!("../../themes/forest.toml"),
            _ => return None,
        };

        match Self::from_toml(source) {
            Ok(palette) => Some(palette),
            Err(e) => {
                tracing::error!(tag, error = %e, "built-in palette failed to parse");
                None
            }
        }
    }

    /// Palette to render `tag` with; unknown tags get the base palette.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        Self::builtin(tag).unwrap_or_default()
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Palette {
    /// Base palette, identical to `themes/default.toml`.
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            label: "Default".to_string(),
            colors: PaletteColors {
                header_fg: "#ffffff".to_string(),
                header_bg: Some("#4f46e5".to_string()),
                accent: "#6366f1".to_string(),
                selection_fg: "#ffffff".to_string(),
                selection_bg: "#4f46e5".to_string(),
                text_normal: "#e5e7eb".to_string(),
                text_dim: "#9ca3af".to_string(),
                border: "#4b5563".to_string(),
                success: "#10b981".to_string(),
                error: "#ef4444".to_string(),
                info: "#3b82f6".to_string(),
                empty_state_fg: "#818cf8".to_string(),
            },
        }
    }
}

/// The theme buttons offered in the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    entries: Vec<Palette>,
}

impl ThemeCatalog {
    /// All built-in palettes in [`BUILTIN_THEMES`] order.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_THEMES.iter().filter_map(|tag| Palette::builtin(tag)).collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Palette] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.entries.get(index)
    }

    /// Palette for `tag`, falling back to the base palette.
    #[must_use]
    pub fn palette_for(&self, tag: &str) -> Palette {
        self.entries
            .iter()
            .find(|palette| palette.name == tag)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_palette_parses_under_its_own_tag() {
        for tag in BUILTIN_THEMES {
            let palette = Palette::builtin(tag).unwrap_or_else(|| panic!("{tag} missing"));
            assert_eq!(palette.name, tag);
        }
        assert_eq!(ThemeCatalog::builtin().len(), BUILTIN_THEMES.len());
    }

    #[test]
    fn code_default_matches_default_toml() {
        assert_eq!(Palette::builtin("default").unwrap(), Palette::default());
    }

    #[test]
    fn unknown_tags_fall_back_to_default() {
        assert_eq!(Palette::for_tag("neon").name, "default");
        assert_eq!(ThemeCatalog::builtin().palette_for("neon").name, "default");
        assert_eq!(ThemeCatalog::builtin().palette_for("ocean").name, "ocean");
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Palette::fg("#4f46e5"), "\u{1b}[38;2;79;70;229m");
        assert_eq!(Palette::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn malformed_palette_is_a_theme_error() {
        let err = Palette::from_toml("name = 3").unwrap_err();
        assert!(matches!(err, LinkHubError::Theme(_)));
    }
}
