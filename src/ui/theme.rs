//! Light and dark palettes plus the ANSI escapes built from them.
//!
//! The browser carries two palettes at once, one for light mode and one for
//! dark mode, and switches between them when the theme flag flips. Each can
//! be a built-in name or a TOML file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: light (default light palette)
//! - `catppuccin-mocha`: dark (default dark palette)
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! region_fg = "#a6e3a1"
//! theme_marker_fg = "#f9e2af"
//! ```

use crate::domain::error::{CountryBrowserError, Result};
use crate::infrastructure::paths::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in light palette name.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Built-in dark palette name.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// A named palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles and the detail line.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Region title and region list accent.
    pub region_fg: String,

    /// The `light`/`dark` marker in the header.
    pub theme_marker_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CountryBrowserError::Theme`] if the file cannot be read or
    /// does not parse as a theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).map_err(|e| {
            CountryBrowserError::Theme(format!("failed to read {}: {e}", path.as_ref().display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| CountryBrowserError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves a configured theme: a path ending in `.toml` is read from
    /// disk (with `~` expanded), anything else is a built-in name.
    ///
    /// # Errors
    ///
    /// Returns [`CountryBrowserError::Theme`] for unknown names and
    /// unreadable files.
    pub fn resolve(theme: &str) -> Result<Self> {
        if Path::new(theme).extension().is_some_and(|ext| ext == "toml") {
            return Self::from_file(expand_tilde(theme));
        }

        Self::from_name(theme).ok_or_else(|| CountryBrowserError::Theme(format!("unknown theme '{theme}'")))
    }

    /// The built-in light palette.
    ///
    /// # Panics
    ///
    /// Panics if the bundled TOML fails to parse, which the tests rule out.
    #[must_use]
    pub fn light() -> Self {
        Self::from_name(DEFAULT_LIGHT_THEME).expect("bundled catppuccin-latte theme parses")
    }

    /// The built-in dark palette.
    ///
    /// # Panics
    ///
    /// Panics if the bundled TOML fails to parse, which the tests rule out.
    #[must_use]
    pub fn dark() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).expect("bundled catppuccin-mocha theme parses")
    }

    /// Parses `#rrggbb`; anything else renders white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let channel = |at: usize| {
            digits
                .get(at..at + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };

        match (digits.len(), channel(0), channel(2), channel(4)) {
            (6, Some(r), Some(g), Some(b)) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\x1b[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\x1b[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\x1b[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\x1b[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_palettes_parse() {
        assert_eq!(Theme::light().name, DEFAULT_LIGHT_THEME);
        assert_eq!(Theme::dark().name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            Theme::resolve("solarized"),
            Err(CountryBrowserError::Theme(_))
        ));
    }

    #[test]
    fn toml_path_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let custom = include_str!("../../themes/catppuccin-mocha.toml")
            .replace("name = \"catppuccin-mocha\"", "name = \"custom\"");
        fs::write(&path, custom).unwrap();

        let loaded = Theme::resolve(path.to_str().unwrap()).unwrap();

        assert_eq!(loaded.name, "custom");
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
        assert_eq!(Theme::bg("zz"), "\u{1b}[48;2;255;255;255m");
    }
}
